pub mod backup;
pub mod calculator;
pub mod config;
pub mod log;
pub mod session;

pub use session::{LoginState, SessionController, Status};
