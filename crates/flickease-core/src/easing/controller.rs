//! The easing worker and its control handle
//!
//! One long-lived thread per controller runs a two-state loop:
//!
//! - **stepping**: sleep for the current interval, then either park (stop
//!   requested or interval above the ceiling) or dispatch one scroll step and
//!   grow the interval.
//! - **parked**: wait on a condition variable until `start` asks for a new
//!   sequence.
//!
//! The thread is spawned by the first `start` and reused afterwards. A stop
//! request is only observed after the in-flight sleep, so stopping can lag by
//! up to one interval.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use tracing::{debug, error, info};

use super::direction::Direction;
use super::schedule::{step_delay, EasingSettings};
use super::session::EasingSession;
use crate::action::{ActionDispatcher, ExecuteMode};
use crate::profile::{Profile, ProfileSource};
use crate::{Error, Result};

const WORKER_THREAD_NAME: &str = "flickease-easing";

struct Shared {
    session: Mutex<EasingSession>,
    wakeup: Condvar,
    settings: EasingSettings,
    dispatcher: Arc<dyn ActionDispatcher>,
    profiles: Arc<dyn ProfileSource>,
}

impl Shared {
    // Every critical section leaves the session consistent, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, EasingSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark the session idle and block until `start` requests a wakeup
    fn park<'a>(&self, mut session: MutexGuard<'a, EasingSession>) -> MutexGuard<'a, EasingSession> {
        session.active = false;
        debug!("Easing worker parked");

        let mut session = self
            .wakeup
            .wait_while(session, |s| !s.wakeup_requested)
            .unwrap_or_else(PoisonError::into_inner);

        session.wakeup_requested = false;
        session.restart_requested = false;
        session.active = true;
        debug!(interval_ms = session.interval_ms, "Easing worker woken up");
        session
    }

    fn step(&self, profile: &Profile, direction: Direction) {
        let fallback;
        let effective = if profile.scroll_inherit {
            fallback = self.profiles.default_profile();
            fallback.as_ref()
        } else {
            profile
        };

        for which in direction.scroll_actions() {
            let action = effective.scroll_action(which);
            debug!(
                profile = %effective.name,
                scroll = which.as_str(),
                %action,
                "Easing step"
            );
            self.dispatcher.execute(action, ExecuteMode::Both);
        }
    }
}

/// Handle to the flick-scroll easing worker
///
/// Cheap to share between gesture threads; all methods take `&self`.
pub struct EasingController {
    shared: Arc<Shared>,
}

impl EasingController {
    /// Create a controller; the worker thread is spawned by the first `start`
    pub fn new(
        settings: EasingSettings,
        dispatcher: Arc<dyn ActionDispatcher>,
        profiles: Arc<dyn ProfileSource>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                session: Mutex::new(EasingSession::default()),
                wakeup: Condvar::new(),
                settings,
                dispatcher,
                profiles,
            }),
        }
    }

    pub fn settings(&self) -> EasingSettings {
        self.shared.settings
    }

    /// Begin a new easing sequence, replacing any sequence in progress
    ///
    /// `direction_x` and `direction_y` are each -1, 0 or 1 and must not both
    /// be 0. `interval_ms` is the pause before the first step.
    ///
    /// A sequence already in progress adopts the new parameters after its
    /// current sleep; a parked worker is woken; the first call spawns the
    /// worker, and failure to do so is returned as [`Error::WorkerSpawn`].
    pub fn start(
        &self,
        profile: Arc<Profile>,
        direction_x: i32,
        direction_y: i32,
        interval_ms: u64,
    ) -> Result<()> {
        let direction = Direction::new(direction_x, direction_y)?;
        if interval_ms == 0 {
            return Err(Error::InvalidInterval(interval_ms));
        }

        let mut session = self.shared.lock();
        debug!(
            %direction,
            interval_ms,
            profile = %profile.name,
            "Start easing"
        );

        session.direction = direction;
        session.profile = Some(profile);
        session.interval_ms = interval_ms;
        session.stop_requested = false;

        if !session.worker_spawned() {
            let shared = Arc::clone(&self.shared);
            let handle = thread::Builder::new()
                .name(WORKER_THREAD_NAME.to_string())
                .spawn(move || run_worker(shared, interval_ms))
                .map_err(|e| {
                    error!("Failed to spawn easing worker: {}", e);
                    Error::WorkerSpawn(e)
                })?;
            session.worker = Some(handle);
            session.active = true;
            info!("Easing worker spawned");
        } else if session.active {
            session.restart_requested = true;
        } else {
            session.wakeup_requested = true;
            session.active = true;
            self.shared.wakeup.notify_all();
        }

        Ok(())
    }

    /// Ask the running sequence to end after its current sleep
    ///
    /// Does nothing when no sequence is running.
    pub fn stop(&self) {
        let mut session = self.shared.lock();
        if session.worker_spawned() && session.active {
            debug!("Stop easing requested");
            session.stop_requested = true;
        }
    }

    /// Whether a sequence is running or about to run
    pub fn is_active(&self) -> bool {
        self.shared.lock().active
    }

    pub fn is_worker_spawned(&self) -> bool {
        self.shared.lock().worker_spawned()
    }
}

fn run_worker(shared: Arc<Shared>, seed_ms: u64) {
    debug!("Easing worker running");

    let mut next_interval = seed_ms;
    // Sleeps are measured from a step start that never moves
    let last_time = 0;

    loop {
        thread::sleep(step_delay(next_interval, last_time));

        let (profile, direction) = {
            let mut session = shared.lock();

            if session.restart_requested {
                session.restart_requested = false;
                next_interval = session.interval_ms;
                debug!(next_interval, "Easing restarted while stepping");
            }

            if session.stop_requested || shared.settings.exceeds_ceiling(next_interval) {
                session.stop_requested = false;
                let session = shared.park(session);
                next_interval = session.interval_ms;
                continue;
            }

            (session.profile.clone(), session.direction)
        };

        if let Some(profile) = profile {
            shared.step(&profile, direction);
        }

        next_interval = shared.settings.grow(next_interval);
        debug!(next_interval, "Easing step finished");
    }
}
