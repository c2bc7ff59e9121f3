use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ProjectList;
use crate::store::log::ttlog_quiet;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { selector } = cmd {
        let projects = ProjectList::new(&cfg.projects);
        let project = projects
            .resolve(selector)
            .ok_or_else(|| AppError::InvalidProject(selector.clone()))?;

        let mut ctl = super::open_controller(cfg)?;
        let reply = ctl.set_project(project)?;

        if reply.is_applied() {
            ttlog_quiet(&cfg.log_path(), "project", &project.name, reply.text());
        }
        messages::status(&reply);
    }

    Ok(())
}
