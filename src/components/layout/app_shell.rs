//! Shared page chrome: a header with the brand and a context-sensitive auth
//! link, the content container, and a footer with build metadata. Screens
//! stay focused on their forms.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500";

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let location = use_location();
    let on_login = move || location.pathname.get() == "/login";

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="font-semibold whitespace-nowrap text-gray-900 dark:text-white"
                    >
                        "Gatehouse"
                    </A>
                    <nav class="font-medium flex space-x-6">
                        <Show
                            when=on_login
                            fallback=move || {
                                view! {
                                    <A href="/login" {..} class=NAV_LINK>
                                        "Login"
                                    </A>
                                }
                            }
                        >
                            <A href="/register" {..} class=NAV_LINK>
                                "Sign up"
                            </A>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {format!(
                    "gatehouse-web {} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash(),
                )}
            </footer>
        </div>
    }
}
