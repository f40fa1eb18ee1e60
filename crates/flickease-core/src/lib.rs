pub mod action;
pub mod config;
pub mod easing;
pub mod error;
pub mod profile;

pub use action::{Action, ActionDispatcher, ExecuteMode};
pub use config::{AppConfig, EasingConfig};
pub use easing::{Direction, EasingController, EasingSettings, IntervalSchedule, Motion};
pub use error::{Error, Result};
pub use profile::{Profile, ProfileSet, ProfileSource, ScrollAction};
