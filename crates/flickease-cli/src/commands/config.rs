use anyhow::Result;

use flickease_core::AppConfig;

pub fn run(config: &AppConfig, write: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if write {
        config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let source = if path.exists() { "file" } else { "defaults" };
    println!("# {} ({})\n", path.display(), source);
    print!("{}", config.to_toml()?);

    Ok(())
}
