use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Telegram init-data exchange request.
///
/// `init_data` is the opaque signed string handed to the Mini App by the
/// Telegram WebView. The client never parses it; the backend verifies the
/// signature and issues a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramAuthRequest {
    #[serde(rename = "initData")]
    pub init_data: String,
}

/// Telegram init-data exchange response.
///
/// `token` and `expires_at` are present only when `success` is true; `message`
/// carries the backend's reason when it is not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelegramAuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(
        rename = "expiresAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TelegramUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Telegram account details echoed back by the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_uses_wire_field_name() {
        let request = TelegramAuthRequest {
            init_data: "query_id=AAH&hash=abc".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["initData"], "query_id=AAH&hash=abc");
    }

    #[test]
    fn test_auth_response_minimal_failure_payload() {
        let response: TelegramAuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"invalid hash"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.token, None);
        assert_eq!(response.expires_at, None);
        assert_eq!(response.message.as_deref(), Some("invalid hash"));
    }

    #[test]
    fn test_auth_response_full_success_payload() {
        let response: TelegramAuthResponse = serde_json::from_str(
            r#"{
                "success": true,
                "token": "jwt-token",
                "expiresAt": "2025-02-14T10:30:00Z",
                "user": {"id": 5012341234, "firstName": "Aziz", "username": "aziz_t"}
            }"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.token.as_deref(), Some("jwt-token"));
        assert!(response.expires_at.is_some());
        let user = response.user.unwrap();
        assert_eq!(user.id, 5012341234);
        assert_eq!(user.first_name, "Aziz");
        assert_eq!(user.last_name, None);
    }
}
