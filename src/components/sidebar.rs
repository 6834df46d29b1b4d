//! Sidebar Component
//!
//! Fixed navigation menu for the dashboard shell. Selection state lives in
//! the global state; the user-management entry only shows for admins.

use leptos::*;

use crate::state::global::{GlobalState, Section};

/// Sidebar navigation
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let session = state.session;
    let state_for_logout = state.clone();

    view! {
        <div class="w-64 min-h-screen bg-gray-800 border-r border-gray-700 flex flex-col">
            // Brand header
            <div class="p-6 border-b border-gray-700">
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 rounded-lg bg-primary-600 flex items-center justify-center">
                        "🕐"
                    </div>
                    <div>
                        <h1 class="font-semibold text-lg">"RemindMe"</h1>
                        <p class="text-xs text-gray-400">"Automation System"</p>
                    </div>
                </div>
            </div>

            // Menu
            <nav class="flex-1 p-4 space-y-2">
                <SidebarItem section=Section::Dashboard icon="📅" label="Dashboard" />
                <SidebarItem section=Section::Reminders icon="🔔" label="Reminders" />
                <SidebarItem section=Section::Logs icon="📊" label="Activity Logs" />
                {move || {
                    let is_admin = session.get().map(|s| s.is_admin()).unwrap_or(false);
                    is_admin.then(|| view! {
                        <SidebarItem section=Section::Users icon="👥" label="User Management" />
                    })
                }}
                <SidebarItem section=Section::Profile icon="👤" label="Profile" />
                <SidebarItem section=Section::Settings icon="⚙️" label="Settings" />
            </nav>

            // Signed-in user and sign out
            <div class="p-4 border-t border-gray-700 space-y-2">
                <p class="px-4 text-xs text-gray-400 truncate">
                    {move || session.get().map(|s| s.email).unwrap_or_default()}
                </p>
                <button
                    on:click=move |_| state_for_logout.logout()
                    class="w-full flex items-center gap-3 px-4 py-2 rounded-lg text-red-400
                           hover:bg-gray-700 transition-colors"
                >
                    <span>"🚪"</span>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}

/// Individual menu entry
#[component]
fn SidebarItem(
    section: Section,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active_section = state.active_section;

    view! {
        <button
            on:click=move |_| state.select_section(section)
            class=move || {
                let base = "w-full flex items-center gap-3 px-4 py-2 rounded-lg transition-colors";
                if active_section.get() == section {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            <span>{icon}</span>
            {label}
        </button>
    }
}
