pub mod daily_entry;
pub mod project;
pub mod session;

pub use daily_entry::DailyEntry;
pub use project::{Project, ProjectList};
pub use session::Session;
