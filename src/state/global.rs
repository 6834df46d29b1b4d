//! Global Application State
//!
//! Reactive state management using Leptos signals. Every mutation the UI
//! can trigger goes through a method here, so components stay
//! presentational.

use leptos::*;

use crate::state::session::Session;
use crate::state::store::{seed_logs, LogEntry, Reminder, ReminderDraft, ReminderStore};

/// Dashboard sections reachable from the sidebar. Sections without a
/// dedicated view fall back to the dashboard overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Reminders,
    Logs,
    Users,
    Profile,
    Settings,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Authenticated user; `None` renders the login screen
    pub session: RwSignal<Option<Session>>,
    /// Sidebar section currently shown
    pub active_section: RwSignal<Section>,
    /// Whether the create/edit form overlay is open
    pub show_reminder_form: RwSignal<bool>,
    /// Reminder being edited; `None` while creating
    pub editing_reminder: RwSignal<Option<Reminder>>,
    /// Search term applied to the reminder list
    pub search_term: RwSignal<String>,
    /// The in-memory reminder collection
    pub reminders: RwSignal<ReminderStore>,
    /// Static delivery history
    pub logs: RwSignal<Vec<LogEntry>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(None),
        active_section: create_rw_signal(Section::Dashboard),
        show_reminder_form: create_rw_signal(false),
        editing_reminder: create_rw_signal(None),
        search_term: create_rw_signal(String::new()),
        reminders: create_rw_signal(ReminderStore::with_seed_data()),
        logs: create_rw_signal(seed_logs()),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Sign in and land on the dashboard overview.
    pub fn login(&self, email: &str, password: &str) {
        self.session.set(Some(Session::login(email, password)));
        self.active_section.set(Section::Dashboard);
    }

    /// Sign out, discarding any open form state.
    pub fn logout(&self) {
        self.session.set(None);
        self.show_reminder_form.set(false);
        self.editing_reminder.set(None);
    }

    pub fn select_section(&self, section: Section) {
        self.active_section.set(section);
    }

    /// Open the form overlay for a new reminder.
    pub fn open_create_form(&self) {
        self.editing_reminder.set(None);
        self.show_reminder_form.set(true);
    }

    /// Open the form overlay pre-filled with an existing reminder.
    /// Unknown ids leave the view untouched.
    pub fn open_edit_form(&self, id: &str) {
        let reminder = self.reminders.with_untracked(|store| store.get(id).cloned());
        match reminder {
            Some(reminder) => {
                self.editing_reminder.set(Some(reminder));
                self.show_reminder_form.set(true);
            }
            None => {
                web_sys::console::warn_1(&format!("no reminder with id {}", id).into());
            }
        }
    }

    /// Close the form overlay without saving.
    pub fn cancel_form(&self) {
        self.show_reminder_form.set(false);
        self.editing_reminder.set(None);
    }

    pub fn create_reminder(&self, draft: &ReminderDraft) {
        self.reminders.update(|store| {
            store.create(draft);
        });
        self.show_reminder_form.set(false);
        self.show_success("Reminder created: your reminder has been scheduled.");
    }

    /// Apply the draft to the reminder currently being edited. Silently a
    /// no-op when no reminder is being edited.
    pub fn update_reminder(&self, draft: &ReminderDraft) {
        let Some(editing) = self.editing_reminder.get_untracked() else {
            return;
        };

        self.reminders.update(|store| {
            store.update(&editing.id, draft);
        });
        self.editing_reminder.set(None);
        self.show_reminder_form.set(false);
        self.show_success("Reminder updated.");
    }

    pub fn delete_reminder(&self, id: &str) {
        self.reminders.update(|store| store.delete(id));
        self.show_success("The reminder has been removed.");
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
