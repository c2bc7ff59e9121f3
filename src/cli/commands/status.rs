use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctl = super::open_controller(cfg)?;
    info(ctl.welcome_message());

    if let Some(entry) = ctl.entries().iter().find(|e| e.grand_total.is_some()) {
        info(format!(
            "Balance {} (as of {})",
            entry.grand_total.as_deref().unwrap_or_default(),
            entry.date
        ));
    }
    Ok(())
}
