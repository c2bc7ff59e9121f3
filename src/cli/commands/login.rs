use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::ttlog_quiet;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ctl = super::open_controller(cfg)?;
    let reply = ctl.log_in()?;

    if reply.is_applied() {
        ttlog_quiet(&cfg.log_path(), "login", &ctl.today().date, reply.text());
    }
    messages::status(&reply);
    Ok(())
}
