//! Shared frontend utilities: API access, configuration, validation, errors,
//! and build metadata.
//!
//! ## Account flow
//!
//! 1. **Registration:** the client validates fields locally and POSTs to
//!    `/api/register/`, then moves to the verification screen carrying the
//!    email.
//! 2. **Verification:** the user submits the 6-digit emailed code to
//!    `/api/verify-email/`; a resend action hits
//!    `/api/resend-verification-email/`.
//! 3. **Login:** `/api/login/` answers 403 while the account is unverified,
//!    which routes the user back into verification.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes. Passwords and codes must never be logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod payload;
pub(crate) mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) use errors::AppError;
