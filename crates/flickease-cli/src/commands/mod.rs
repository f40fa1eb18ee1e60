pub mod config;
pub mod flick;
pub mod profiles;
pub mod schedule;
