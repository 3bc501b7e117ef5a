use ferrous_rdns_domain::{CliOverrides, Config};

/// Loads the file (if any) and applies overrides. Validation happens once,
/// in `Config::run_config`.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    Ok(Config::load(config_path, cli_overrides)?)
}
