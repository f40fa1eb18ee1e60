use std::sync::Arc;
use std::thread::JoinHandle;

use super::direction::Direction;
use crate::profile::Profile;

/// State shared between the worker and callers of `start`/`stop`
///
/// Every field is read and written only while holding the controller's mutex.
#[derive(Debug, Default)]
pub(crate) struct EasingSession {
    /// The worker is stepping, or has been told to resume and will step next
    pub active: bool,
    /// Set by `stop`, cleared by the worker when it parks
    pub stop_requested: bool,
    /// Set by `start` to release a parked worker
    pub wakeup_requested: bool,
    /// Set by `start` while stepping so the worker reseeds its interval
    pub restart_requested: bool,
    pub direction: Direction,
    /// Seed interval of the current sequence in milliseconds
    pub interval_ms: u64,
    pub profile: Option<Arc<Profile>>,
    /// Present once the worker has been spawned; never joined
    pub worker: Option<JoinHandle<()>>,
}

impl EasingSession {
    pub fn worker_spawned(&self) -> bool {
        self.worker.is_some()
    }
}
