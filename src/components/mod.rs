//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod reminder_card;
pub mod reminder_form;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use reminder_card::ReminderCard;
pub use reminder_form::ReminderForm;
pub use sidebar::Sidebar;
pub use stat_card::{StatCard, Trend};
pub use toast::Toast;
