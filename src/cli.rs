mod cli_model;
mod config;

pub use config::Config;

use cli_model::cli_model;

/// Parse the command line and set up logging.
///
/// Returns `Ok(None)` when the usage message has been printed and there is
/// nothing more to do (wrong number of input files).
pub fn handle_cli() -> anyhow::Result<Option<Config>> {
    let m = cli_model().get_matches();
    super::log_utils::init_log(&m)?;

    let cfg = Config::from_matches(&m)?;
    if cfg.is_none() {
        cli_model().print_help()?;
        println!();
    }
    Ok(cfg)
}
