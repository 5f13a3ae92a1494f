//! Landing page after a successful login. Intentionally minimal; the client
//! holds no session state to display.

use crate::components::AppShell;
use leptos::prelude::*;

/// Renders the home page shell.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Home"</h1>
            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                "You are signed in."
            </p>
        </AppShell>
    }
}
