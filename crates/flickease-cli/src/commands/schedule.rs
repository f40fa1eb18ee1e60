use anyhow::{bail, Result};

use flickease_core::AppConfig;

pub fn run(config: &AppConfig, interval: Option<u64>) -> Result<()> {
    let seed = interval.unwrap_or(config.easing.default_interval_ms);
    if seed == 0 {
        bail!("interval must be positive");
    }
    let settings = config.easing.settings();

    println!(
        "Seed {}ms, growth {}%, ceiling {}ms\n",
        seed, settings.growth_percent, settings.ceiling_ms
    );

    let mut elapsed = 0;
    let mut steps = 0;
    for interval in settings.schedule(seed) {
        elapsed += interval;
        steps += 1;
        println!("  step {:>3}  +{:>5}ms  at {:>6}ms", steps, interval, elapsed);
    }

    if steps == 0 {
        println!("No steps: the seed is already above the ceiling.");
    } else {
        println!(
            "\n{} steps over {}ms.",
            steps,
            settings.schedule(seed).total_duration().as_millis()
        );
    }

    Ok(())
}
