use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One side of an exchange-rate snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyInfoDto {
    pub currency: String,
    #[serde(rename = "currencyName")]
    pub currency_name: String,
    #[serde(rename = "flagUrl")]
    pub flag_url: String,
    pub amount: f64,
}

/// One bank's buy/sell offer for the overview pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestOfferDto {
    pub id: i64,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "bankCode", default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
    #[serde(rename = "sellRate")]
    pub sell_rate: f64,
    #[serde(rename = "buyRate")]
    pub buy_rate: f64,
}

/// `GET /api/currency/overview?amount=N` response: the converted pair plus the
/// best bank offers for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyOverviewResponse {
    pub base: CurrencyInfoDto,
    pub quote: CurrencyInfoDto,
    pub rate: f64,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "bestOffers")]
    pub best_offers: Vec<BestOfferDto>,
}

/// One entry of `GET /api/currency/pairs`: a plain rate snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyPairDto {
    pub base: String,
    pub quote: String,
    pub rate: f64,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_deserializes_from_wire_shape() {
        let overview: CurrencyOverviewResponse = serde_json::from_str(
            r#"{
                "base": {"currency": "USD", "currencyName": "AQSH dollari", "flagUrl": "/img/us.svg", "amount": 1.0},
                "quote": {"currency": "UZS", "currencyName": "O'zbek so'mi", "flagUrl": "/img/uz.svg", "amount": 12650.0},
                "rate": 12650.0,
                "updatedAt": "2025-01-15T08:00:00Z",
                "bestOffers": [
                    {"id": 1, "bankName": "Ipoteka Bank", "bankCode": null, "logoUrl": "/img/ipoteka.svg", "sellRate": 12700.0, "buyRate": 12600.0}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(overview.base.currency, "USD");
        assert_eq!(overview.best_offers.len(), 1);
        assert_eq!(overview.best_offers[0].bank_code, None);
        assert!((overview.rate - 12650.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pair_wire_round_trip() {
        let pair = CurrencyPairDto {
            base: "EUR".to_string(),
            quote: "UZS".to_string(),
            rate: 13710.5,
            updated_at: "2025-01-15T08:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["updatedAt"], "2025-01-15T08:00:00Z");
        let back: CurrencyPairDto = serde_json::from_value(json).unwrap();
        assert_eq!(back, pair);
    }
}
