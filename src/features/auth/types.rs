//! Request payloads for the account API. These carry credentials and
//! verification codes, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_api_field_names() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "hunter22".to_string(),
        };

        let value = serde_json::to_value(&request).expect("Failed to serialize");
        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["password"], "hunter22");
    }

    #[test]
    fn register_request_uses_snake_case_full_name() {
        let request = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "hunter22".to_string(),
            full_name: "Ada Lovelace".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"full_name\":\"Ada Lovelace\""));
    }

    #[test]
    fn verify_email_request_round_trips() {
        let request = VerifyEmailRequest {
            email: "user@example.com".to_string(),
            code: "123456".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        let parsed: VerifyEmailRequest =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(parsed.email, "user@example.com");
        assert_eq!(parsed.code, "123456");
    }

    #[test]
    fn resend_request_carries_only_the_email() {
        let request = ResendVerificationRequest {
            email: "user@example.com".to_string(),
        };

        let value = serde_json::to_value(&request).expect("Failed to serialize");
        let object = value.as_object().expect("expected an object");
        assert_eq!(object.len(), 1);
        assert_eq!(value["email"], "user@example.com");
    }
}
