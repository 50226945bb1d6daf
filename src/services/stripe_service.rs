use crate::utils::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Card payment provider. The browser confirms the intent with the
/// returned client secret; this service never sees card data.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentIntent, AppError>;
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(api_base: &str, secret_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_payment_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        log::info!("Creating payment intent: {} {}", amount_cents, currency);

        let url = format!("{}/v1/payment_intents", self.api_base);
        let amount = amount_cents.to_string();
        let form = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", uuid::Uuid::new_v4().to_string())
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::PaymentError(format!("Failed to reach Stripe: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .map(|body| {
                    format!(
                        "{} ({})",
                        body.error.message.unwrap_or_default(),
                        body.error.kind.unwrap_or_else(|| "unknown".to_string())
                    )
                })
                .unwrap_or_else(|| "no error body".to_string());
            return Err(AppError::PaymentError(format!("Stripe API error {}: {}", status, detail)));
        }

        let intent: PaymentIntent = response
            .json()
            .await
            .map_err(|e| AppError::PaymentError(format!("Failed to parse Stripe response: {}", e)))?;

        log::info!("Payment intent {} created: {} {}", intent.id, intent.amount, intent.currency);

        Ok(intent)
    }
}
