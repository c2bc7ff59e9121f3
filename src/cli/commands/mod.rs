pub mod backup;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod project;
pub mod projects;
pub mod status;

use crate::config::Config;
use crate::core::SessionController;
use crate::errors::AppResult;
use crate::store::TimesStore;

pub(crate) fn open_controller(cfg: &Config) -> AppResult<SessionController> {
    SessionController::open(TimesStore::new(cfg.times_path()), cfg.daily_time)
}
