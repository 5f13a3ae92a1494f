//! Verification route. Acts on the email carried from registration or an
//! unverified login; without one it degrades to a dead-end view pointing
//! back at registration. A successful code submission pauses briefly before
//! redirecting to login.

use crate::app_lib::{validate, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, FieldError, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_pending_verification;
use crate::features::auth::types::{ResendVerificationRequest, VerifyEmailRequest};
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Pause before redirecting to login after a successful verification. A UX
/// beat so the success message is readable, not a retry mechanism.
const REDIRECT_DELAY_MS: u32 = 2_000;

const VERIFY_FALLBACK: &str = "Verification failed. Please try again.";
const RESEND_FALLBACK: &str = "Failed to resend code.";
const VERIFY_SUCCESS: &str = "Verification successful! Redirecting to login...";
const RESEND_SUCCESS: &str = "A new code has been sent to your email.";

const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

/// Renders the code form, or the dead-end view when no email was carried.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let pending = use_pending_verification();
    let Some(email) = pending.email() else {
        return view! {
            <AppShell>
                <div class="max-w-lg mx-auto">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Oops!"</h1>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                        "We don't know which email to verify. Please "
                        <A href="/register" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                            "register"
                        </A>
                        " first."
                    </p>
                </div>
            </AppShell>
        }
        .into_any();
    };

    let navigate = use_navigate();
    let (code, set_code) = signal(String::new());
    let (code_error, set_code_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let verify_email_value = email.clone();
    let verify_action = Action::new_local(move |code_value: &String| {
        let request = VerifyEmailRequest {
            email: verify_email_value.clone(),
            code: code_value.clone(),
        };
        async move { client::verify_email(&request).await }
    });

    let resend_email_value = email.clone();
    let resend_action = Action::new_local(move |_: &()| {
        let request = ResendVerificationRequest {
            email: resend_email_value.clone(),
        };
        async move { client::resend_verification(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    set_success.set(Some(VERIFY_SUCCESS.to_string()));
                    pending.clear();
                    let navigate = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate("/login", Default::default());
                    })
                    .forget();
                }
                // A 200 cannot normally surface through the error path; the
                // branch mirrors the API contract this screen was built
                // against and is kept pending resolution with its owners.
                Err(AppError::Http { status: 200, .. }) => {
                    set_success.set(Some("The email has been sent successfully".to_string()));
                }
                Err(err) => set_error.set(Some(err.user_message(VERIFY_FALLBACK))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => set_success.set(Some(RESEND_SUCCESS.to_string())),
                Err(err) => set_error.set(Some(err.user_message(RESEND_FALLBACK))),
            }
        }
    });

    let on_code_input = move |event| {
        let value = event_target_value(&event);
        set_code_error.set(validate::code_length_error(&value));
        set_code.set(value);
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let code_value = code.get_untracked();
        if code_value.trim().is_empty() {
            set_error.set(Some(validate::CODE_REQUIRED_MESSAGE.to_string()));
            return;
        }

        set_error.set(None);
        set_success.set(None);
        verify_action.dispatch(code_value.trim().to_string());
    };

    let on_resend_click = move |_| {
        set_error.set(None);
        set_success.set(None);
        resend_action.dispatch(());
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                    "Check your inbox"
                </h1>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                    {format!("A code has been sent to {email}.")}
                </p>
                <form class="mt-6" on:submit=on_submit>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="code"
                        >
                            "Code"
                        </label>
                        <input
                            id="code"
                            type="text"
                            class=INPUT
                            inputmode="numeric"
                            placeholder="Enter the code"
                            on:input=on_code_input
                        />
                        <FieldError message=code_error />
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
                    {move || {
                        success
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mb-5">
                                        <Alert kind=AlertKind::Success message=message />
                                    </div>
                                }
                            })
                    }}
                    <Button button_type="submit" disabled=verify_action.pending()>
                        "Verify"
                    </Button>
                    {move || {
                        verify_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                </form>
                <div class="mt-6">
                    <button
                        type="button"
                        class="text-gray-900 bg-white border border-gray-300 hover:bg-gray-100 focus:ring-4 focus:outline-none focus:ring-gray-200 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                        class:cursor-not-allowed=move || resend_action.pending().get()
                        class:opacity-70=move || resend_action.pending().get()
                        disabled=move || resend_action.pending().get()
                        on:click=on_resend_click
                    >
                        "Resend email"
                    </button>
                    {move || {
                        resend_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                </div>
                <p class="mt-6 text-sm text-gray-600 dark:text-gray-300">
                    <A href="/register" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Register"
                    </A>
                    " or "
                    <A href="/login" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Login"
                    </A>
                </p>
            </div>
        </AppShell>
    }
    .into_any()
}
