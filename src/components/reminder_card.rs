//! Reminder Card Component
//!
//! Single reminder with schedule, delivery method, status badges, and an
//! overflow menu forwarding edit/delete to the caller.

use chrono::NaiveDateTime;
use leptos::*;

use crate::state::store::{DeliveryMethod, Reminder, Status};

/// Reminder card. Edit and delete actions forward the record's id to the
/// supplied callbacks; the card itself never touches the store.
#[component]
pub fn ReminderCard(
    reminder: Reminder,
    #[prop(into)]
    on_edit: Callback<String>,
    #[prop(into)]
    on_delete: Callback<String>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    let (date_label, time_label) = format_schedule(&reminder.scheduled_time);
    let edit_id = reminder.id.clone();
    let delete_id = reminder.id.clone();
    let status = reminder.status;
    let is_recurring = reminder.is_recurring;

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-all duration-300">
            // Title row with overflow menu
            <div class="flex items-start justify-between mb-4">
                <div class="space-y-1">
                    <h3 class="font-semibold text-lg">{reminder.title}</h3>
                    <p class="text-gray-400 text-sm">{reminder.description}</p>
                </div>

                <div class="relative">
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="h-8 w-8 rounded-lg text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                    >
                        "⋮"
                    </button>
                    {move || {
                        if !menu_open.get() {
                            return view! {}.into_view();
                        }
                        let edit_id = edit_id.clone();
                        let delete_id = delete_id.clone();
                        view! {
                            <div class="absolute right-0 mt-1 w-32 bg-gray-700 border border-gray-600 rounded-lg shadow-lg z-10">
                                <button
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        on_edit.call(edit_id.clone());
                                    }
                                    class="block w-full text-left px-4 py-2 text-sm hover:bg-gray-600 rounded-t-lg"
                                >
                                    "Edit"
                                </button>
                                <button
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        on_delete.call(delete_id.clone());
                                    }
                                    class="block w-full text-left px-4 py-2 text-sm text-red-400 hover:bg-gray-600 rounded-b-lg"
                                >
                                    "Delete"
                                </button>
                            </div>
                        }.into_view()
                    }}
                </div>
            </div>

            // Schedule and delivery method
            <div class="flex items-center gap-4 text-sm text-gray-400 mb-4">
                <span>"📅 " {date_label}</span>
                <span>"🕐 " {time_label}</span>
                <span>
                    {delivery_icon(reminder.delivery_method)}
                    " "
                    {reminder.delivery_method.label()}
                </span>
            </div>

            // Status and recurring badges
            <div class="flex items-center justify-between">
                <span class=format!(
                    "px-2 py-1 rounded-full border text-xs font-medium {}",
                    status_badge_class(status)
                )>
                    {status.as_str()}
                </span>
                {is_recurring.then(|| view! {
                    <span class="px-2 py-1 rounded-full border text-xs font-medium bg-blue-900/30 text-blue-400 border-blue-700">
                        "Recurring"
                    </span>
                })}
            </div>
        </div>
    }
}

/// Split the stored timestamp into display labels for date and time.
/// Unparseable values fall back to the raw string.
fn format_schedule(scheduled: &str) -> (String, String) {
    match NaiveDateTime::parse_from_str(scheduled, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => (
            dt.format("%b %d, %Y").to_string(),
            dt.format("%H:%M").to_string(),
        ),
        Err(_) => (scheduled.to_string(), String::new()),
    }
}

fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Pending => "bg-yellow-900/30 text-yellow-400 border-yellow-700",
        Status::Sent => "bg-green-900/30 text-green-400 border-green-700",
        Status::Failed => "bg-red-900/30 text-red-400 border-red-700",
    }
}

fn delivery_icon(method: DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Email => "✉️",
        DeliveryMethod::Sms | DeliveryMethod::Whatsapp => "💬",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_schedule() {
        let (date, time) = format_schedule("2024-01-15T14:30:00");
        assert_eq!(date, "Jan 15, 2024");
        assert_eq!(time, "14:30");
    }

    #[test]
    fn test_format_schedule_falls_back_on_garbage() {
        let (date, time) = format_schedule("not-a-timestamp");
        assert_eq!(date, "not-a-timestamp");
        assert!(time.is_empty());
    }
}
