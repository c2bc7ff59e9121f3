use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::ttlog_quiet;
use crate::ui::messages::{self, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ctl = super::open_controller(cfg)?;
    let reply = ctl.log_out()?;
    messages::status(&reply);

    if reply.is_applied() {
        let today = ctl.today();
        ttlog_quiet(&cfg.log_path(), "logout", &today.date, reply.text());
        info(format!(
            "Daily total {} | Balance {}",
            today.daily_total.as_deref().unwrap_or("--:--"),
            today.grand_total.as_deref().unwrap_or("--:--"),
        ));
    }
    Ok(())
}
