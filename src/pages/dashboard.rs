//! Dashboard Page
//!
//! Overview with delivery stats and the three most recent reminders.

use leptos::*;

use crate::components::{ReminderCard, StatCard, Trend};
use crate::state::global::GlobalState;

/// Dashboard overview page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let reminders = state.reminders;
    let stats = create_memo(move |_| reminders.with(|store| store.stats()));

    let state_for_new = state.clone();
    let state_for_edit = state.clone();
    let on_edit = Callback::new(move |id: String| state_for_edit.open_edit_form(&id));
    let state_for_delete = state.clone();
    let on_delete = Callback::new(move |id: String| state_for_delete.delete_reminder(&id));

    // Trend figures are fixed display copy, not derived from the data
    let total_trend = Trend {
        value: 12,
        is_positive: true,
    };
    let sent_trend = Trend {
        value: 8,
        is_positive: true,
    };
    let failed_trend = Trend {
        value: 2,
        is_positive: false,
    };

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Welcome back! Here's your reminder overview."</p>
                </div>
                <button
                    on:click=move |_| state_for_new.open_create_form()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ New Reminder"
                </button>
            </div>

            // Stat tiles
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Total Reminders"
                    value=Signal::derive(move || stats.get().total)
                    description="All scheduled reminders"
                    icon="🔔"
                    trend=total_trend
                />
                <StatCard
                    title="Pending"
                    value=Signal::derive(move || stats.get().pending)
                    description="Awaiting delivery"
                    icon="🕐"
                />
                <StatCard
                    title="Delivered"
                    value=Signal::derive(move || stats.get().sent)
                    description="Successfully sent"
                    icon="✅"
                    trend=sent_trend
                />
                <StatCard
                    title="Failed"
                    value=Signal::derive(move || stats.get().failed)
                    description="Delivery issues"
                    icon="❌"
                    trend=failed_trend
                />
            </div>

            // Recent reminders
            <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <h2 class="text-xl font-semibold mb-4">"Recent Reminders"</h2>
                <div class="space-y-4">
                    {move || {
                        if reminders.with(|store| store.is_empty()) {
                            return view! {
                                <p class="text-gray-400 text-sm">"No reminders yet"</p>
                            }.into_view();
                        }

                        reminders.with(|store| {
                            store.items().iter().take(3).cloned().collect::<Vec<_>>()
                        })
                        .into_iter()
                        .map(|reminder| view! {
                            <ReminderCard reminder=reminder on_edit=on_edit on_delete=on_delete />
                        })
                        .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
