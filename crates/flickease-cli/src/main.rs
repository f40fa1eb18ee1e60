use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flickease_core::AppConfig;

mod commands;
mod dispatch;

#[derive(Parser)]
#[command(name = "flickease")]
#[command(author, version, about = "Decelerating flick-scroll easing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one flick and print every scroll action it dispatches
    Flick {
        /// Horizontal direction: -1 left, 0 none, 1 right
        #[arg(long, default_value_t = 0, allow_negative_numbers = true,
              value_parser = clap::value_parser!(i32).range(-1..=1))]
        dx: i32,
        /// Vertical direction: -1 up, 0 none, 1 down
        #[arg(long, default_value_t = 0, allow_negative_numbers = true,
              value_parser = clap::value_parser!(i32).range(-1..=1))]
        dy: i32,
        /// Pause before the first step in milliseconds
        #[arg(short, long)]
        interval: Option<u64>,
        /// Named profile to scroll with
        #[arg(short, long)]
        profile: Option<String>,
        /// Print one JSON object per dispatched action
        #[arg(long)]
        json: bool,
    },
    /// Show the step intervals a flick would use
    Schedule {
        /// Pause before the first step in milliseconds
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// List configured profiles
    Profiles,
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_filter().into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Flick {
            dx,
            dy,
            interval,
            profile,
            json,
        } => commands::flick::run(&config, dx, dy, interval, profile.as_deref(), json).await,
        Commands::Schedule { interval } => commands::schedule::run(&config, interval),
        Commands::Profiles => commands::profiles::run(&config),
        Commands::Config { write } => commands::config::run(&config, write),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flick_accepts_negative_direction() {
        let cli = Cli::try_parse_from(["flickease", "flick", "--dy", "-1", "-i", "80"]).unwrap();
        match cli.command {
            Commands::Flick { dx, dy, interval, .. } => {
                assert_eq!((dx, dy), (0, -1));
                assert_eq!(interval, Some(80));
            }
            _ => panic!("expected flick"),
        }
    }

    #[test]
    fn test_flick_rejects_out_of_range_direction() {
        assert!(Cli::try_parse_from(["flickease", "flick", "--dx", "2"]).is_err());
    }
}
