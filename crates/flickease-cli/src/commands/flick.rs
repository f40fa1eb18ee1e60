use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};

use flickease_core::{AppConfig, EasingController, ProfileSource};

use crate::dispatch::ConsoleDispatcher;

/// How often to check whether the easing worker has parked
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub async fn run(
    config: &AppConfig,
    dx: i32,
    dy: i32,
    interval: Option<u64>,
    profile: Option<&str>,
    json: bool,
) -> Result<()> {
    let profiles = Arc::new(config.profiles.profile_set());
    let profile = match profile {
        Some(name) => profiles.get(name)?,
        None => profiles.default_profile(),
    };
    let interval = interval.unwrap_or(config.easing.default_interval_ms);

    let dispatcher = Arc::new(ConsoleDispatcher::new(json));
    let controller =
        EasingController::new(config.easing.settings(), dispatcher.clone(), profiles.clone());

    info!(
        profile = %profile.name,
        dx,
        dy,
        interval_ms = interval,
        ceiling_ms = controller.settings().ceiling_ms,
        "Starting flick (Ctrl-C to stop)"
    );

    let started = Instant::now();
    controller.start(profile, dx, dy, interval)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut interrupted = false;
    let mut poll = tokio::time::interval(POLL_INTERVAL);

    loop {
        tokio::select! {
            result = &mut ctrl_c, if !interrupted => {
                interrupted = true;
                match result {
                    Ok(()) => {
                        info!("Stopping flick after the current step");
                        controller.stop();
                    }
                    Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
                }
            }
            _ = poll.tick() => {
                if !controller.is_active() {
                    break;
                }
            }
        }
    }

    info!(
        dispatched = dispatcher.dispatched(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Flick settled"
    );

    Ok(())
}
