//! Login Page
//!
//! Unauthenticated entry screen with a sign-in / sign-up toggle. There is
//! no auth backend: any credentials are accepted, and the demo admin
//! account maps to the admin role.

use leptos::*;

use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (is_login, set_is_login) = create_signal(true);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.login(&email.get(), &password.get());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 text-white p-4">
            <div class="w-full max-w-md space-y-8">
                // Logo and header
                <div class="text-center space-y-4">
                    <div class="flex justify-center">
                        <div class="w-16 h-16 rounded-2xl bg-primary-600 flex items-center justify-center text-3xl">
                            "🕐"
                        </div>
                    </div>
                    <div class="space-y-2">
                        <h1 class="text-3xl font-bold">"RemindMe"</h1>
                        <p class="text-gray-400">
                            "Professional automation system for your reminders"
                        </p>
                    </div>
                </div>

                // Auth card
                <div class="bg-gray-800 rounded-xl p-8 border border-gray-700 space-y-6">
                    <div class="text-center space-y-2">
                        <h2 class="text-2xl font-semibold">
                            {move || if is_login.get() { "Welcome back" } else { "Create account" }}
                        </h2>
                        <p class="text-gray-400 text-sm">
                            {move || if is_login.get() {
                                "Sign in to manage your automated reminders"
                            } else {
                                "Join thousands of users automating their workflows"
                            }}
                        </p>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        {move || {
                            if is_login.get() {
                                return view! {}.into_view();
                            }
                            view! {
                                <div class="space-y-2">
                                    <label class="block text-sm text-gray-400">"Full Name"</label>
                                    <input
                                        type="text"
                                        placeholder="John Doe"
                                        prop:value=move || name.get()
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                        required
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                            }.into_view()
                        }}

                        <div class="space-y-2">
                            <label class="block text-sm text-gray-400">"Email Address"</label>
                            <input
                                type="email"
                                placeholder="john@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div class="space-y-2">
                            <label class="block text-sm text-gray-400">"Password"</label>
                            <input
                                type="password"
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        {move || {
                            if is_login.get() {
                                return view! {}.into_view();
                            }
                            view! {
                                <div class="space-y-2">
                                    <label class="block text-sm text-gray-400">"Confirm Password"</label>
                                    <input
                                        type="password"
                                        placeholder="••••••••"
                                        prop:value=move || confirm_password.get()
                                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                        required
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                            }.into_view()
                        }}

                        <button
                            type="submit"
                            class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                                   font-semibold transition-colors"
                        >
                            {move || if is_login.get() { "Sign In →" } else { "Create Account →" }}
                        </button>
                    </form>

                    <div class="text-center">
                        <button
                            type="button"
                            on:click=move |_| set_is_login.update(|v| *v = !*v)
                            class="text-sm text-primary-400 hover:underline"
                        >
                            {move || if is_login.get() {
                                "Don't have an account? Sign up"
                            } else {
                                "Already have an account? Sign in"
                            }}
                        </button>
                    </div>

                    {move || {
                        is_login.get().then(|| view! {
                            <div class="text-center">
                                <button
                                    type="button"
                                    class="text-sm text-gray-400 hover:text-primary-400"
                                >
                                    "Forgot your password?"
                                </button>
                            </div>
                        })
                    }}
                </div>

                // Demo credentials
                <div class="bg-gray-800/50 rounded-xl p-4 border border-dashed border-gray-600">
                    <div class="text-center space-y-2">
                        <h3 class="font-medium text-sm">"Demo Credentials"</h3>
                        <div class="space-y-1 text-xs text-gray-400">
                            <p><strong>"Admin: "</strong> "admin@remindme.com / admin123"</p>
                            <p><strong>"User: "</strong> "user@remindme.com / user123"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
