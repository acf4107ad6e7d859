use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This creates the config directory, writes the configuration file (unless
/// in test mode) and prepares the data directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(Path::new);
    let path = Config::init_all(custom, cli.test)?;

    let cfg = if cli.test {
        Config::default()
    } else {
        Config::load_from(&path)?
    };

    info("Initializing rOvertime…");
    println!("📄 Config file : {}", path.display());
    println!("📁 Data dir    : {}", cfg.resolved_data_dir().display());

    success("rOvertime initialization completed!");
    Ok(())
}
