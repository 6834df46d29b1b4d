//! Reminder Form Component
//!
//! Controlled create/edit form. Collects the draft fields and hands the
//! composed draft to the caller; whether that becomes a create or an update
//! is the caller's decision.

use leptos::*;

use crate::state::store::{DeliveryMethod, RecurringType, ReminderDraft};

/// Reminder form, optionally seeded with an existing reminder's draft.
#[component]
pub fn ReminderForm(
    /// Prefill for editing; `None` means a blank create form
    #[prop(optional)]
    initial: Option<ReminderDraft>,
    #[prop(into)]
    on_submit: Callback<ReminderDraft>,
    #[prop(into)]
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let initial = initial.unwrap_or_default();

    let (title, set_title) = create_signal(initial.title);
    let (recipient, set_recipient) = create_signal(initial.recipient);
    let (description, set_description) = create_signal(initial.description);
    let (scheduled_date, set_scheduled_date) = create_signal(initial.scheduled_date);
    let (scheduled_time, set_scheduled_time) = create_signal(initial.scheduled_time);
    let (delivery_method, set_delivery_method) = create_signal(initial.delivery_method);
    let (is_recurring, set_is_recurring) = create_signal(initial.is_recurring);
    let (recurring_type, set_recurring_type) = create_signal(initial.recurring_type);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        on_submit.call(ReminderDraft {
            title: title.get(),
            recipient: recipient.get(),
            description: description.get(),
            scheduled_date: scheduled_date.get(),
            scheduled_time: scheduled_time.get(),
            delivery_method: delivery_method.get(),
            is_recurring: is_recurring.get(),
            recurring_type: recurring_type.get(),
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            // Header
            <div class="flex items-center gap-3 mb-6">
                <div class="w-10 h-10 rounded-lg bg-gray-700 flex items-center justify-center text-xl">
                    "📅"
                </div>
                <div>
                    <h2 class="text-xl font-semibold">
                        {if is_edit { "Edit Reminder" } else { "Create New Reminder" }}
                    </h2>
                    <p class="text-gray-400 text-sm">"Set up your automated notification"</p>
                </div>
            </div>

            <form on:submit=submit class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="space-y-2">
                        <label class="block text-sm text-gray-400">"Title"</label>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            placeholder="Meeting reminder, deadline alert..."
                            required
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="space-y-2">
                        <label class="block text-sm text-gray-400">"Recipient"</label>
                        <input
                            type="text"
                            prop:value=move || recipient.get()
                            on:input=move |ev| set_recipient.set(event_target_value(&ev))
                            placeholder="email@example.com or +1234567890"
                            required
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div class="space-y-2">
                    <label class="block text-sm text-gray-400">"Description"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        placeholder="Additional details about this reminder..."
                        rows="3"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    ></textarea>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="space-y-2">
                        <label class="block text-sm text-gray-400">"Date"</label>
                        <input
                            type="date"
                            prop:value=move || scheduled_date.get()
                            on:input=move |ev| set_scheduled_date.set(event_target_value(&ev))
                            required
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="space-y-2">
                        <label class="block text-sm text-gray-400">"Time"</label>
                        <input
                            type="time"
                            prop:value=move || scheduled_time.get()
                            on:input=move |ev| set_scheduled_time.set(event_target_value(&ev))
                            required
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="space-y-2">
                        <label class="block text-sm text-gray-400">"Delivery Method"</label>
                        <select
                            on:change=move |ev| {
                                set_delivery_method.set(DeliveryMethod::from_value(&event_target_value(&ev)))
                            }
                            prop:value=move || delivery_method.get().as_str().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="email">"Email (SMTP)"</option>
                            <option value="sms">"SMS (Twilio)"</option>
                            <option value="whatsapp">"WhatsApp"</option>
                        </select>
                    </div>
                </div>

                // Recurrence toggle
                <div class="flex items-center justify-between p-4 bg-gray-700/50 rounded-lg">
                    <div class="space-y-1">
                        <label class="block text-sm font-medium">"Recurring Reminder"</label>
                        <p class="text-sm text-gray-400">"Send this reminder repeatedly"</p>
                    </div>
                    <input
                        type="checkbox"
                        prop:checked=move || is_recurring.get()
                        on:change=move |ev| set_is_recurring.set(event_target_checked(&ev))
                        class="w-5 h-5 accent-primary-500"
                    />
                </div>

                // Frequency, only while the toggle is on
                {move || {
                    if !is_recurring.get() {
                        return view! {}.into_view();
                    }
                    view! {
                        <div class="space-y-2">
                            <label class="block text-sm text-gray-400">"Frequency"</label>
                            <select
                                on:change=move |ev| {
                                    set_recurring_type.set(RecurringType::from_value(&event_target_value(&ev)))
                                }
                                prop:value=move || recurring_type.get().as_str().to_string()
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            >
                                <option value="daily">"Daily"</option>
                                <option value="weekly">"Weekly"</option>
                                <option value="monthly">"Monthly"</option>
                                <option value="yearly">"Yearly"</option>
                            </select>
                        </div>
                    }.into_view()
                }}

                // Actions
                <div class="flex gap-3 pt-4">
                    <button
                        type="submit"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        {if is_edit { "Update Reminder" } else { "Create Reminder" }}
                    </button>
                    <button
                        type="button"
                        on:click=move |_| on_cancel.call(())
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                               font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
