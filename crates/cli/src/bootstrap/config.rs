use vetted_dns_domain::{CliOverrides, Config};

/// Loads the configuration file (or defaults) and applies CLI overrides.
///
/// Validation is left to the caller, which may adjust the config first.
pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(config_path, cli_overrides)?)
}

/// Path of the file the configuration came from, if any.
pub fn config_source(config_path: Option<&str>) -> Option<String> {
    config_path.map(str::to_string).or_else(Config::get_config_path)
}
