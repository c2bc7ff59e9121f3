use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::log::ttlog_quiet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        dest,
        compress,
        force,
    } = cmd
    {
        let written = BackupLogic::backup(&cfg.times_path(), dest, *compress, *force)?;
        ttlog_quiet(
            &cfg.log_path(),
            "backup",
            &written.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
