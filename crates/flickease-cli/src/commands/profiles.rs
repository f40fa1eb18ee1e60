use anyhow::Result;

use flickease_core::{AppConfig, Profile, ProfileSource, ScrollAction};

fn print_profile(profile: &Profile) {
    if profile.scroll_inherit {
        println!("  {} (inherits default scroll actions)", profile.name);
        return;
    }

    println!("  {}", profile.name);
    for which in ScrollAction::ALL {
        println!("    {:<12} {}", which.as_str(), profile.scroll_action(which));
    }
}

pub fn run(config: &AppConfig) -> Result<()> {
    let profiles = config.profiles.profile_set();

    println!("Default profile:\n");
    print_profile(&profiles.default_profile());

    let names: Vec<&str> = profiles.names().collect();
    if names.is_empty() {
        println!("\nNo named profiles.");
        println!("\nAdd one under [profiles.named.<name>] in:");
        println!("  {}", AppConfig::config_path().display());
        return Ok(());
    }

    println!("\nNamed profiles ({}):\n", names.len());
    for name in names {
        let profile = profiles.get(name)?;
        print_profile(&profile);
    }

    Ok(())
}
