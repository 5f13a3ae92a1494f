//! Client wrappers for the account API endpoints. These centralize paths so
//! route code never builds URLs, and they keep the no-session policy in one
//! place: every success body is discarded.

use crate::app_lib::{api, AppError};
use crate::features::auth::types::{
    LoginRequest, RegisterRequest, ResendVerificationRequest, VerifyEmailRequest,
};

/// Authenticates with email and password. The server answers 403 while the
/// account is unverified; the token in the success body is not used.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    api::post_json("/api/login/", request).await
}

/// Creates an account and triggers the first verification email.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    api::post_json("/api/register/", request).await
}

/// Submits the emailed 6-digit code bound to the email address.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<(), AppError> {
    api::post_json("/api/verify-email/", request).await
}

/// Requests a fresh verification code for the email address.
pub async fn resend_verification(request: &ResendVerificationRequest) -> Result<(), AppError> {
    api::post_json("/api/resend-verification-email/", request).await
}
