//! App Root Component
//!
//! Top-level view switching: login screen until a session exists, then the
//! dashboard shell. Inside the shell the active sidebar section picks the
//! page, and an open reminder form replaces the page until it is submitted
//! or cancelled. There is no URL routing; all navigation is in-memory.

use leptos::*;

use crate::components::{ReminderForm, Sidebar, Toast};
use crate::pages::{ActivityLogs, Dashboard, Login, Reminders};
use crate::state::global::{provide_global_state, GlobalState, Section};
use crate::state::store::ReminderDraft;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    view! {
        {move || {
            if session.get().is_some() {
                view! { <Shell /> }.into_view()
            } else {
                view! { <Login /> }.into_view()
            }
        }}

        // Toast notifications
        <Toast />
    }
}

/// Authenticated dashboard shell: sidebar plus the active section.
#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let show_form = state.show_reminder_form;
    let active_section = state.active_section;

    view! {
        <div class="flex min-h-screen bg-gray-900 text-white">
            <Sidebar />

            <main class="flex-1 p-8">
                {move || {
                    // The form overlay takes over the content area
                    if show_form.get() {
                        return view! { <ReminderFormOverlay /> }.into_view();
                    }

                    match active_section.get() {
                        Section::Reminders => view! { <Reminders /> }.into_view(),
                        Section::Logs => view! { <ActivityLogs /> }.into_view(),
                        _ => view! { <Dashboard /> }.into_view(),
                    }
                }}
            </main>
        </div>
    }
}

/// Wires the reminder form to the store: an editing reminder routes the
/// submitted draft to update, otherwise to create.
#[component]
fn ReminderFormOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing = state.editing_reminder.get_untracked();
    let is_edit = editing.is_some();
    let initial = editing.as_ref().map(ReminderDraft::from_reminder);

    let state_for_submit = state.clone();
    let on_submit = Callback::new(move |draft: ReminderDraft| {
        if is_edit {
            state_for_submit.update_reminder(&draft);
        } else {
            state_for_submit.create_reminder(&draft);
        }
    });

    let state_for_cancel = state.clone();
    let on_cancel = Callback::new(move |_| state_for_cancel.cancel_form());

    view! {
        <div class="max-w-3xl">
            {match initial {
                Some(initial) => view! {
                    <ReminderForm initial=initial on_submit=on_submit on_cancel=on_cancel />
                }
                .into_view(),
                None => view! {
                    <ReminderForm on_submit=on_submit on_cancel=on_cancel />
                }
                .into_view(),
            }}
        </div>
    }
}
