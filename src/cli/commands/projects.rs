use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ProjectList;
use crate::ui::messages::warning;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let projects = ProjectList::new(&cfg.projects);

    if projects.is_empty() {
        warning("No projects configured.");
        return Ok(());
    }

    println!("📁 Projects:");
    for n in 0..projects.len() {
        if let Some(name) = projects.name_at(n) {
            println!("{:>3}. {}", n + 1, name);
        }
    }
    Ok(())
}
