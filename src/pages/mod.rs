//! Pages
//!
//! Top-level views for the login screen and each dashboard section.

pub mod dashboard;
pub mod login;
pub mod logs;
pub mod reminders;

pub use dashboard::Dashboard;
pub use login::Login;
pub use logs::ActivityLogs;
pub use reminders::Reminders;
