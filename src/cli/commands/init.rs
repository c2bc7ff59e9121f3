use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::ttlog_quiet;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty session log
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rWorkhours…");

    let cfg = Config::init_all(cli.file.clone(), cli.test)?;
    let times = cfg.times_path();

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Session log : {}", times.display());

    ttlog_quiet(
        &cfg.log_path(),
        "init",
        &times.to_string_lossy(),
        "Session log initialized",
    );

    println!("🎉 rWorkhours initialization completed!");
    Ok(())
}
