//! Flick-scroll easing
//!
//! After a flick gesture ends, a single background worker keeps scrolling in
//! the flick's direction with a growing pause between steps, so the content
//! appears to coast to a halt.
//!
//! # Layout
//!
//! - `schedule` - Pure interval arithmetic (growth ratio, ceiling)
//! - `direction` - Per-axis motion and the scroll actions it maps to
//! - `session` - Shared state guarded by the controller's lock
//! - `controller` - The worker thread and its `start`/`stop` handle
//!
//! # Usage
//!
//! ```ignore
//! use flickease_core::{EasingController, EasingSettings, ProfileSet};
//!
//! let profiles = Arc::new(ProfileSet::default());
//! let controller = EasingController::new(EasingSettings::default(), dispatcher, profiles.clone());
//!
//! // Flick upwards, first step after 100ms
//! controller.start(profiles.default_profile(), 0, -1, 100)?;
//!
//! // A new touch cancels the coasting
//! controller.stop();
//! ```

pub mod controller;
pub mod direction;
pub mod schedule;
mod session;

pub use controller::EasingController;
pub use direction::{Direction, Motion};
pub use schedule::{EasingSettings, IntervalSchedule};
