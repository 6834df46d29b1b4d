//! RemindMe Dashboard
//!
//! Browser dashboard for managing scheduled notification reminders
//! (email / SMS / WhatsApp), built with Leptos (WASM).
//!
//! # Features
//!
//! - Reminder list with search, create/edit form, and delete
//! - Dashboard overview with delivery stats
//! - Activity log of past delivery attempts
//! - Role-aware navigation (admins see user management)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory for the lifetime of the page:
//! there is no backend, no scheduler, and no persistence in this build, and
//! the login screen accepts any credentials.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
