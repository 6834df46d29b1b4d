//! Reminders Page
//!
//! Searchable list of all reminders.

use leptos::*;

use crate::components::ReminderCard;
use crate::state::global::GlobalState;

/// Reminder list page with search
#[component]
pub fn Reminders() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let reminders = state.reminders;
    let search_term = state.search_term;

    let state_for_new = state.clone();
    let state_for_edit = state.clone();
    let on_edit = Callback::new(move |id: String| state_for_edit.open_edit_form(&id));
    let state_for_delete = state.clone();
    let on_delete = Callback::new(move |id: String| state_for_delete.delete_reminder(&id));

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Reminders"</h1>
                    <p class="text-gray-400 mt-1">"Manage your automated notifications"</p>
                </div>
                <button
                    on:click=move |_| state_for_new.open_create_form()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ New Reminder"
                </button>
            </div>

            // Search
            <div class="relative">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search reminders..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                    class="w-full bg-gray-800 rounded-lg pl-10 pr-4 py-3
                           border border-gray-700 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Filtered grid
            <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6">
                {move || {
                    let term = search_term.get();
                    let filtered = reminders.with(|store| store.filter(&term));

                    if filtered.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm col-span-full">"No reminders found"</p>
                        }.into_view();
                    }

                    filtered
                        .into_iter()
                        .map(|reminder| view! {
                            <ReminderCard reminder=reminder on_edit=on_edit on_delete=on_delete />
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
