use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interface language. Uppercase on the wire (`EN`, `RU`, `UZ`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    En,
    Ru,
    Uz,
}

impl Language {
    /// Lowercase storage form (`en`, `ru`, `uz`), as persisted on the device.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
        }
    }

    /// Parse the lowercase storage form back into a language.
    pub fn from_storage_key(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            "uz" => Some(Language::Uz),
            _ => None,
        }
    }
}

/// User profile and subscription/billing state, `GET /api/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDto {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "phoneNumber", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub language: Language,
    #[serde(rename = "planCode")]
    pub plan_code: String,
    #[serde(rename = "billingCycle")]
    pub billing_cycle: super::subscription::BillingCycle,
    #[serde(rename = "autoPay")]
    pub auto_pay: bool,
    #[serde(
        rename = "subscriptionExpiresAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_expires_at: Option<DateTime<Utc>>,
}

/// `PUT /api/profile/language` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateLanguageRequest {
    pub language: Language,
}

/// `PUT /api/profile/autopay` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAutoPayRequest {
    pub enabled: bool,
}

/// `PUT /api/profile/autopay` response: the authoritative new flag value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoPayResponse {
    #[serde(rename = "autoPay")]
    pub auto_pay: bool,
}
