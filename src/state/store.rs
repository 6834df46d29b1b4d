//! Reminder Store
//!
//! In-memory reminder collection and the value types shared across the UI.
//! Kept free of Leptos reactivity so the store logic can be exercised in
//! plain unit tests; [`super::global::GlobalState`] wraps it in a signal.

use serde::{Deserialize, Serialize};

/// Delivery channel for a reminder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Email,
    Sms,
    Whatsapp,
}

impl DeliveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Email => "email",
            DeliveryMethod::Sms => "sms",
            DeliveryMethod::Whatsapp => "whatsapp",
        }
    }

    /// Uppercased label shown on reminder cards.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMethod::Email => "EMAIL",
            DeliveryMethod::Sms => "SMS",
            DeliveryMethod::Whatsapp => "WHATSAPP",
        }
    }

    /// Parse a `<select>` value, falling back to email.
    pub fn from_value(value: &str) -> Self {
        match value {
            "sms" => DeliveryMethod::Sms,
            "whatsapp" => DeliveryMethod::Whatsapp,
            _ => DeliveryMethod::Email,
        }
    }
}

/// Reminder lifecycle status. Fixed at `Pending` on creation; nothing in
/// this build transitions it since there is no delivery engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Sent,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Sent => "sent",
            Status::Failed => "failed",
        }
    }
}

/// Frequency for recurring reminders. Captured by the form but not yet
/// acted upon anywhere; only the recurrence flag reaches the record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringType::Daily => "daily",
            RecurringType::Weekly => "weekly",
            RecurringType::Monthly => "monthly",
            RecurringType::Yearly => "yearly",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "weekly" => RecurringType::Weekly,
            "monthly" => RecurringType::Monthly,
            "yearly" => RecurringType::Yearly,
            _ => RecurringType::Daily,
        }
    }
}

/// A scheduled notification record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Local timestamp in `YYYY-MM-DDTHH:MM:SS` form.
    pub scheduled_time: String,
    pub delivery_method: DeliveryMethod,
    pub status: Status,
    pub is_recurring: bool,
}

/// Field values collected by the reminder form. Submitted verbatim to the
/// caller, which decides between create and update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReminderDraft {
    pub title: String,
    pub recipient: String,
    pub description: String,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub delivery_method: DeliveryMethod,
    pub is_recurring: bool,
    pub recurring_type: RecurringType,
}

impl ReminderDraft {
    /// Compose the stored timestamp from the separate date and time fields.
    pub fn scheduled(&self) -> String {
        format!("{}T{}:00", self.scheduled_date, self.scheduled_time)
    }

    /// Prefill for the edit form: the stored timestamp is split back into
    /// its date part and an `HH:MM` time part.
    pub fn from_reminder(reminder: &Reminder) -> Self {
        let (date, time) = split_scheduled(&reminder.scheduled_time);
        Self {
            title: reminder.title.clone(),
            recipient: String::new(),
            description: reminder.description.clone(),
            scheduled_date: date,
            scheduled_time: time,
            delivery_method: reminder.delivery_method,
            is_recurring: reminder.is_recurring,
            recurring_type: RecurringType::default(),
        }
    }
}

fn split_scheduled(scheduled: &str) -> (String, String) {
    match scheduled.split_once('T') {
        Some((date, time)) => (date.to_string(), time.chars().take(5).collect()),
        None => (scheduled.to_string(), String::new()),
    }
}

/// Counts derived from the full collection on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReminderStats {
    pub total: usize,
    pub pending: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Ordered reminder collection with a monotonic id counter.
///
/// Ids are session-unique strings minted from the counter, so creation is
/// deterministic and testable.
#[derive(Clone, Debug)]
pub struct ReminderStore {
    items: Vec<Reminder>,
    next_id: u64,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with the demo reminders.
    pub fn with_seed_data() -> Self {
        let items = vec![
            Reminder {
                id: "1".to_string(),
                title: "Project Deadline".to_string(),
                description: "Submit final project deliverables to client".to_string(),
                scheduled_time: "2024-01-15T14:30:00".to_string(),
                delivery_method: DeliveryMethod::Email,
                status: Status::Pending,
                is_recurring: false,
            },
            Reminder {
                id: "2".to_string(),
                title: "Weekly Team Meeting".to_string(),
                description: "Discuss project progress and upcoming tasks".to_string(),
                scheduled_time: "2024-01-12T10:00:00".to_string(),
                delivery_method: DeliveryMethod::Sms,
                status: Status::Sent,
                is_recurring: true,
            },
            Reminder {
                id: "3".to_string(),
                title: "Client Presentation".to_string(),
                description: "Present Q4 results to stakeholders".to_string(),
                scheduled_time: "2024-01-20T15:00:00".to_string(),
                delivery_method: DeliveryMethod::Whatsapp,
                status: Status::Pending,
                is_recurring: false,
            },
        ];
        let next_id = items.len() as u64 + 1;
        Self { items, next_id }
    }

    pub fn items(&self) -> &[Reminder] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Reminder> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Append a new reminder built from the draft. Status starts at
    /// `Pending`; returns the minted id.
    pub fn create(&mut self, draft: &ReminderDraft) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;

        self.items.push(Reminder {
            id: id.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            scheduled_time: draft.scheduled(),
            delivery_method: draft.delivery_method,
            status: Status::Pending,
            is_recurring: draft.is_recurring,
        });
        id
    }

    /// Replace the mutable fields of the matching record in place, keeping
    /// its id and status. Returns false when no record matches.
    pub fn update(&mut self, id: &str, draft: &ReminderDraft) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                reminder.title = draft.title.clone();
                reminder.description = draft.description.clone();
                reminder.scheduled_time = draft.scheduled();
                reminder.delivery_method = draft.delivery_method;
                reminder.is_recurring = draft.is_recurring;
                true
            }
            None => false,
        }
    }

    /// Remove the matching record. Unknown ids leave the collection
    /// unchanged.
    pub fn delete(&mut self, id: &str) {
        self.items.retain(|r| r.id != id);
    }

    /// Case-insensitive substring match over title and description.
    /// An empty term returns the full collection; insertion order is
    /// preserved.
    pub fn filter(&self, term: &str) -> Vec<Reminder> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Scan the collection for the dashboard stat tiles.
    pub fn stats(&self) -> ReminderStats {
        let mut stats = ReminderStats {
            total: self.len(),
            ..ReminderStats::default()
        };
        for reminder in &self.items {
            match reminder.status {
                Status::Pending => stats.pending += 1,
                Status::Sent => stats.sent += 1,
                Status::Failed => stats.failed += 1,
            }
        }
        stats
    }
}

/// Outcome of a past delivery attempt. Distinct from [`Status`] because a
/// log entry is only written once delivery has been tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOutcome {
    Sent,
    Failed,
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Sent => "sent",
            DeliveryOutcome::Failed => "failed",
        }
    }
}

/// Historical record of a delivery attempt. Seed data only: the delivery
/// engine that would produce these is out of scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub reminder_id: String,
    pub reminder_title: String,
    pub outcome: DeliveryOutcome,
    pub delivery_method: String,
    pub timestamp: String,
    pub recipient: String,
    pub error_message: Option<String>,
}

/// Demo delivery history shown on the activity log page.
pub fn seed_logs() -> Vec<LogEntry> {
    vec![
        LogEntry {
            id: "1".to_string(),
            reminder_id: "2".to_string(),
            reminder_title: "Weekly Team Meeting".to_string(),
            outcome: DeliveryOutcome::Sent,
            delivery_method: "SMS".to_string(),
            timestamp: "2024-01-12T10:00:00".to_string(),
            recipient: "+1234567890".to_string(),
            error_message: None,
        },
        LogEntry {
            id: "2".to_string(),
            reminder_id: "1".to_string(),
            reminder_title: "Project Deadline".to_string(),
            outcome: DeliveryOutcome::Failed,
            delivery_method: "Email".to_string(),
            timestamp: "2024-01-11T09:30:00".to_string(),
            recipient: "john@example.com".to_string(),
            error_message: Some("SMTP connection timeout".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, date: &str, time: &str) -> ReminderDraft {
        ReminderDraft {
            title: title.to_string(),
            recipient: "team@example.com".to_string(),
            description: String::new(),
            scheduled_date: date.to_string(),
            scheduled_time: time.to_string(),
            ..ReminderDraft::default()
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = ReminderStore::new();
        for i in 0..5 {
            store.create(&draft(&format!("Reminder {}", i), "2024-03-01", "08:00"));
        }

        assert_eq!(store.len(), 5);
        let mut ids: Vec<_> = store.items().iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_create_composes_timestamp_and_defaults_pending() {
        let mut store = ReminderStore::new();
        let id = store.create(&draft("Standup", "2024-02-01", "09:00"));

        let reminder = store.get(&id).unwrap();
        assert_eq!(reminder.scheduled_time, "2024-02-01T09:00:00");
        assert_eq!(reminder.status, Status::Pending);
        assert_eq!(reminder.delivery_method, DeliveryMethod::Email);
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = ReminderStore::with_seed_data();
        store.delete("2");

        assert!(store.filter("").iter().all(|r| r.id != "2"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = ReminderStore::with_seed_data();
        let before = store.items().to_vec();
        store.delete("999");
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_update_preserves_id_and_status() {
        let mut store = ReminderStore::with_seed_data();
        let mut changes = draft("Rescheduled Meeting", "2024-02-05", "11:30");
        changes.delivery_method = DeliveryMethod::Whatsapp;
        changes.is_recurring = false;

        assert!(store.update("2", &changes));

        let reminder = store.get("2").unwrap();
        assert_eq!(reminder.id, "2");
        assert_eq!(reminder.status, Status::Sent);
        assert_eq!(reminder.title, "Rescheduled Meeting");
        assert_eq!(reminder.scheduled_time, "2024-02-05T11:30:00");
        assert_eq!(reminder.delivery_method, DeliveryMethod::Whatsapp);
        assert!(!reminder.is_recurring);
    }

    #[test]
    fn test_update_unknown_id_returns_false() {
        let mut store = ReminderStore::with_seed_data();
        let before = store.items().to_vec();
        assert!(!store.update("999", &draft("Nope", "2024-02-05", "11:30")));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let store = ReminderStore::with_seed_data();

        let matches = store.filter("TEAM");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Weekly Team Meeting");

        // Matches descriptions too
        let matches = store.filter("stakeholders");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Client Presentation");
    }

    #[test]
    fn test_filter_no_match_returns_empty() {
        let store = ReminderStore::with_seed_data();
        assert!(store.filter("zzz-not-there").is_empty());
    }

    #[test]
    fn test_filter_empty_term_preserves_order() {
        let store = ReminderStore::with_seed_data();
        let all = store.filter("");
        assert_eq!(all.len(), store.len());
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_stats_counts_sum_to_total() {
        let mut store = ReminderStore::with_seed_data();
        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.sent, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.pending + stats.sent + stats.failed, stats.total);

        store.create(&draft("Another", "2024-03-01", "08:00"));
        store.delete("1");
        let stats = store.stats();
        assert_eq!(stats.pending + stats.sent + stats.failed, stats.total);
    }

    #[test]
    fn test_draft_prefill_splits_timestamp() {
        let store = ReminderStore::with_seed_data();
        let prefill = ReminderDraft::from_reminder(store.get("1").unwrap());

        assert_eq!(prefill.scheduled_date, "2024-01-15");
        assert_eq!(prefill.scheduled_time, "14:30");
        assert_eq!(prefill.title, "Project Deadline");
    }
}
