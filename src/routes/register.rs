//! Registration route. Validates inputs locally (required fields, password
//! length, confirmation match) and on success carries the email into the
//! verification screen.

use crate::app_lib::validate;
use crate::components::{Alert, AlertKind, AppShell, Button, FieldError, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_pending_verification;
use crate::features::auth::types::RegisterRequest;
use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const REGISTER_FALLBACK: &str = "Something went wrong";

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[derive(Clone)]
/// Captures registration form input for the async action without borrowing
/// signals.
struct RegisterInput {
    email: String,
    password: String,
    full_name: String,
}

/// Renders the registration form and drives the signup flow.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let pending = use_pending_verification();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirmation_error, set_confirmation_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let request = RegisterRequest {
            email: input.email.clone(),
            password: input.password.clone(),
            full_name: input.full_name.clone(),
        };
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    logging::log!("registration succeeded");
                    pending.set(email.get_untracked().trim().to_string());
                    navigate("/verify-email", Default::default());
                }
                Err(err) => set_error.set(Some(err.user_message(REGISTER_FALLBACK))),
            }
        }
    });

    let on_password_input = move |event| {
        let value = event_target_value(&event);
        set_password_error.set(validate::password_length_error(&value));
        set_password.set(value);
    };

    let on_confirmation_input = move |event| {
        let value = event_target_value(&event);
        set_confirmation_error.set(validate::password_match_error(
            &password.get_untracked(),
            &value,
        ));
        set_confirmation.set(value);
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let full_name_value = full_name.get_untracked();
        if validate::any_field_missing(&[
            email_value.as_str(),
            password_value.as_str(),
            full_name_value.as_str(),
        ]) {
            set_error.set(Some(validate::REQUIRED_FIELDS_MESSAGE.to_string()));
            return;
        }

        // Only the length hint gates submission; the confirmation-mismatch
        // hint stays advisory.
        if password_error.get_untracked().is_some() {
            return;
        }

        set_error.set(None);
        register_action.dispatch(RegisterInput {
            email: email_value.trim().to_string(),
            password: password_value,
            full_name: full_name_value.trim().to_string(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Sign up"
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
                        autocomplete="new-password"
                        placeholder="Enter the password"
                        on:input=on_password_input
                    />
                    <FieldError message=password_error />
                </div>
                <div class="mb-5">
                    <label class=LABEL for="confirm_password">
                        "Verify your password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=INPUT
                        autocomplete="new-password"
                        placeholder="Reenter the password"
                        on:input=on_confirmation_input
                    />
                    <FieldError message=confirmation_error />
                </div>
                <div class="mb-5">
                    <label class=LABEL for="full_name">
                        "Full name"
                    </label>
                    <input
                        id="full_name"
                        type="text"
                        class=INPUT
                        autocomplete="name"
                        placeholder="Enter your full name"
                        on:input=move |event| set_full_name.set(event_target_value(&event))
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
                <Button button_type="submit" disabled=register_action.pending()>
                    "Sign up"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                <p class="mt-6 text-sm text-gray-600 dark:text-gray-300">
                    "Already have an account? "
                    <A href="/login" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Log in"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
