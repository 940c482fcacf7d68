use serde::{Deserialize, Serialize};

/// A payment card as returned by `GET /api/cards`.
///
/// `balance` is in minor units (tiyin). `mask_pan` is the only form of the
/// card number the backend ever sends; the full PAN exists client-side only
/// inside the add-card form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "cardId")]
    pub card_id: String,
    #[serde(rename = "maskPan")]
    pub mask_pan: String,
    #[serde(rename = "cardType")]
    pub card_type: String,
    pub active: bool,
    pub balance: i64,
    #[serde(rename = "cardDesignInfo")]
    pub card_design_info: CardDesignDto,
}

/// Issuer branding for rendering a card face.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDesignDto {
    #[serde(rename = "cardType")]
    pub card_type: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "bankLogo")]
    pub bank_logo: String,
    #[serde(rename = "bankLogoMini")]
    pub bank_logo_mini: String,
    #[serde(
        rename = "bankWhiteLogo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_white_logo: Option<String>,
    #[serde(
        rename = "bankWhiteLogoMini",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_white_logo_mini: Option<String>,
    #[serde(rename = "processingLogo")]
    pub processing_logo: String,
    #[serde(rename = "processingLogoMini")]
    pub processing_logo_mini: String,
    #[serde(
        rename = "processingWhiteLogo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_white_logo: Option<String>,
    #[serde(
        rename = "processingWhiteLogoMini",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_white_logo_mini: Option<String>,
}

/// `POST /api/cards/add/start` request.
///
/// `expiry_date` is sent as four digits (`MMYY`, no slash).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddCardStartRequest {
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    #[serde(rename = "cardName")]
    pub card_name: String,
}

/// `POST /api/cards/add/start` response: an OTP was sent to the card's phone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddCardStartResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "maskedPhone")]
    pub masked_phone: String,
}

/// `POST /api/cards/add/verify` request: confirm the OTP for a pending add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyCardRequest {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub code: String,
}
