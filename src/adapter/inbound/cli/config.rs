//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../bookxchange.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::note(&format!(
        "Next: bookxchange config validate --config {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    if !path.exists() {
        output::note("No configuration file found; showing defaults");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Store");
    match &config.store.seed_path {
        Some(seed) => output::field("Seed", seed.display()),
        None => output::field("Seed", "(empty store)"),
    }

    output::section("Recommendations");
    output::field("Home row", config.recommendation.personalized_limit);
    output::field("Similar row", config.recommendation.similar_limit);
    match config.recommendation.seed {
        Some(seed) => output::field("Seed", seed),
        None => output::field("Seed", "random"),
    }

    output::section("Session");
    match &config.session.user_id {
        Some(user) => output::field("User", user),
        None => output::field("User", "(anonymous)"),
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    Config::load(path)?;
    output::success("Config file is valid");
    Ok(())
}
