//! Synchronous field validation for the auth forms. These checks gate
//! submission locally and never reach the network; field-level hints are
//! recomputed on every keystroke and do not block typing.

/// Minimum password length accepted at registration.
pub(crate) const MIN_PASSWORD_LENGTH: usize = 8;
/// Exact length of the emailed verification code.
pub(crate) const VERIFICATION_CODE_LENGTH: usize = 6;

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all the information required";
pub(crate) const CODE_REQUIRED_MESSAGE: &str = "Please enter the verification code!";

/// True when any of the given fields is empty after trimming.
pub(crate) fn any_field_missing(fields: &[&str]) -> bool {
    fields.iter().any(|field| field.trim().is_empty())
}

/// Length hint for the password field.
pub(crate) fn password_length_error(password: &str) -> Option<String> {
    if password.trim().len() < MIN_PASSWORD_LENGTH {
        Some(format!(
            "The password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ))
    } else {
        None
    }
}

/// Mismatch hint for the confirmation field, compared against the password
/// value at the time of the change.
pub(crate) fn password_match_error(password: &str, confirmation: &str) -> Option<String> {
    if password != confirmation {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

/// Length hint for the verification code; only the trimmed length is
/// checked, not the content.
pub(crate) fn code_length_error(code: &str) -> Option<String> {
    if code.trim().len() != VERIFICATION_CODE_LENGTH {
        Some(format!(
            "The verification code must have {VERIFICATION_CODE_LENGTH} digits"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{
        any_field_missing, code_length_error, password_length_error, password_match_error,
        MIN_PASSWORD_LENGTH,
    };

    #[test]
    fn any_field_missing_detects_empty_and_whitespace() {
        assert!(any_field_missing(&["", "secret"]));
        assert!(any_field_missing(&["user@example.com", "   "]));
        assert!(any_field_missing(&["\t", "\n"]));
        assert!(!any_field_missing(&["user@example.com", "secret"]));
    }

    #[test]
    fn password_length_error_set_iff_trimmed_length_below_minimum() {
        for length in 0..20 {
            let password = "a".repeat(length);
            let error = password_length_error(&password);
            if length < MIN_PASSWORD_LENGTH {
                assert!(error.is_some(), "length {length} should be rejected");
            } else {
                assert!(error.is_none(), "length {length} should be accepted");
            }
        }
    }

    #[test]
    fn password_length_error_ignores_surrounding_whitespace() {
        assert!(password_length_error("  short  ").is_some());
        assert!(password_length_error("  longenough  ").is_none());
    }

    #[test]
    fn password_match_error_set_iff_values_differ() {
        assert!(password_match_error("hunter22", "hunter2").is_some());
        assert!(password_match_error("hunter22", "hunter22").is_none());
        // Comparison is exact; whitespace is not normalized.
        assert!(password_match_error("hunter22", "hunter22 ").is_some());
        assert!(password_match_error("", "").is_none());
    }

    #[test]
    fn code_length_error_set_iff_trimmed_length_is_not_six() {
        assert!(code_length_error("").is_some());
        assert!(code_length_error("12345").is_some());
        assert!(code_length_error("1234567").is_some());
        assert!(code_length_error("123456").is_none());
        assert!(code_length_error(" 123456 ").is_none());
    }

    #[test]
    fn code_length_error_is_content_independent() {
        assert!(code_length_error("abcdef").is_none());
        assert!(code_length_error("12a45b").is_none());
    }
}
