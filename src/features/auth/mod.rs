//! Auth feature: API client wrappers, request payloads, and the
//! navigation-carried verification state.
//!
//! Flow Overview: registration submits profile and password, then hands the
//! email to the verification screen. Verification submits the emailed code
//! and redirects to login after a short pause. Login answers 403 for
//! unverified accounts, which routes back into verification and triggers a
//! best-effort code resend.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
