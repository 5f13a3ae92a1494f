//! Login route. On success the user lands on the home page; a 403 marks an
//! unverified account, which carries the email into the verification screen
//! and fires a best-effort code resend in a detached task.

use crate::app_lib::validate;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_pending_verification;
use crate::features::auth::types::{LoginRequest, ResendVerificationRequest};
use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const LOGIN_FALLBACK: &str = "Something went wrong";

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[derive(Clone)]
/// Captures login form input for the async action without borrowing signals.
struct LoginInput {
    email: String,
    password: String,
}

/// Renders the login form and drives the authentication flow.
#[component]
pub fn LoginPage() -> impl IntoView {
    let pending = use_pending_verification();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let request = LoginRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        };
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    logging::log!("login succeeded");
                    navigate("/", Default::default());
                }
                Err(err) => {
                    set_error.set(Some(err.user_message(LOGIN_FALLBACK)));
                    if err.status() == Some(403) {
                        // Account exists but is unverified: hand the email to
                        // the verification screen and request a fresh code.
                        let email_value = email.get_untracked().trim().to_string();
                        pending.set(email_value.clone());
                        navigate("/verify-email", Default::default());
                        spawn_local(async move {
                            let request = ResendVerificationRequest { email: email_value };
                            if let Err(err) = client::resend_verification(&request).await {
                                logging::warn!("resend after unverified login failed: {err}");
                            }
                        });
                    }
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if validate::any_field_missing(&[email_value.as_str(), password_value.as_str()]) {
            set_error.set(Some(validate::REQUIRED_FIELDS_MESSAGE.to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Login"
                </h1>
                <div class="mb-5">
                    <label class=LABEL for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT
                        autocomplete="email"
                        placeholder="Enter the email address"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT
                        autocomplete="current-password"
                        placeholder="Enter the password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mb-5">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                <Button button_type="submit" disabled=login_action.pending()>
                    "Login"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                <p class="mt-6 text-sm text-gray-600 dark:text-gray-300">
                    "Don't have an account? "
                    <A href="/register" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Sign up"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
