//! Activity Logs Page
//!
//! Read-only delivery history. The entries are seed data; the delivery
//! engine that would append to this list is out of scope.

use chrono::NaiveDateTime;
use leptos::*;

use crate::state::global::GlobalState;
use crate::state::store::DeliveryOutcome;

/// Activity log page component
#[component]
pub fn ActivityLogs() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let logs = state.logs;

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Activity Logs"</h1>
                <p class="text-gray-400 mt-1">"Track your reminder delivery history"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <div class="space-y-4">
                    {move || {
                        logs.get()
                            .into_iter()
                            .map(|log| {
                                let badge = outcome_badge_class(log.outcome);
                                view! {
                                    <div class="flex items-center justify-between p-4 bg-gray-700/50 rounded-lg">
                                        <div class="space-y-1">
                                            <h3 class="font-medium">{log.reminder_title}</h3>
                                            <p class="text-sm text-gray-400">
                                                {log.delivery_method} " to " {log.recipient}
                                            </p>
                                            <p class="text-xs text-gray-400">
                                                {format_timestamp(&log.timestamp)}
                                            </p>
                                            {log.error_message.map(|msg| view! {
                                                <p class="text-xs text-red-400">{msg}</p>
                                            })}
                                        </div>
                                        <span class=format!(
                                            "px-2 py-1 rounded-full border text-xs font-medium {}",
                                            badge
                                        )>
                                            {log.outcome.as_str()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

fn outcome_badge_class(outcome: DeliveryOutcome) -> &'static str {
    match outcome {
        DeliveryOutcome::Sent => "bg-green-900/30 text-green-400 border-green-700",
        DeliveryOutcome::Failed => "bg-red-900/30 text-red-400 border-red-700",
    }
}

/// Render the stored timestamp for display, falling back to the raw string.
fn format_timestamp(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-01-12T10:00:00"), "Jan 12, 2024 10:00");
        assert_eq!(format_timestamp("garbage"), "garbage");
    }
}
