//! State Management
//!
//! Global reactive state plus the plain in-memory reminder store it wraps.

pub mod global;
pub mod session;
pub mod store;

pub use global::{provide_global_state, GlobalState, Section};
pub use session::{Role, Session};
pub use store::{
    DeliveryMethod, DeliveryOutcome, LogEntry, Reminder, ReminderDraft, ReminderStats,
    ReminderStore, Status,
};
