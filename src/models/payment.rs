use crate::models::{DeleteResult, InsertResult};
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PaymentIntentRequest {
    /// Total in dollars, e.g. `49.99`. Numeric strings such as `"49.99"`
    /// are accepted too, since class prices are stored as posted.
    #[serde(deserialize_with = "number_or_numeric_string")]
    #[schema(value_type = f64, example = 49.99)]
    pub price: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("price is not a number: {:?}", s))),
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Result of `POST /payments`: the stored payment and the cart cleanup.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PaymentReceipt {
    #[serde(rename = "insertResult")]
    pub insert_result: InsertResult,
    #[serde(rename = "deleteResult")]
    pub delete_result: DeleteResult,
}
