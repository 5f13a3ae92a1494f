//! Navigation-carried state for the verification flow. Registration and the
//! unverified-login path set the pending email immediately before navigating;
//! the verification screen reads it on entry and clears it once the code is
//! accepted. The value lives only in memory and is never URL-visible or
//! persisted.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Handle on the email address awaiting verification, shared through Leptos
/// context.
pub struct PendingVerification {
    email: RwSignal<Option<String>>,
}

impl PendingVerification {
    fn new(email: RwSignal<Option<String>>) -> Self {
        Self { email }
    }

    /// Records the email the next verification screen should act on.
    pub fn set(&self, email: String) {
        self.email.set(Some(email));
    }

    /// Drops the carried email, typically after a successful verification.
    pub fn clear(&self) {
        self.email.set(None);
    }

    /// Reads the carried email without subscribing; screens sample it once
    /// on entry.
    pub fn email(&self) -> Option<String> {
        self.email.get_untracked()
    }
}

/// Provides the pending-verification context for the whole app.
#[component]
pub fn PendingVerificationProvider(children: Children) -> impl IntoView {
    let email = RwSignal::new(None);
    provide_context(PendingVerification::new(email));

    view! { {children()} }
}

/// Returns the current pending-verification handle or an empty fallback.
pub fn use_pending_verification() -> PendingVerification {
    use_context::<PendingVerification>()
        .unwrap_or_else(|| PendingVerification::new(RwSignal::new(None)))
}
