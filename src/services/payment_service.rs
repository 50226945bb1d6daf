use crate::{
    database::{MongoDB, PAYMENTS},
    models::{PaymentIntentResponse, PaymentReceipt},
    services::{selected_item_service, stripe_service::PaymentGateway},
    utils::{object_ids_from_bson, AppError},
};
use mongodb::bson::Document;

pub const CURRENCY: &str = "usd";

/// Dollars to cents, rounded to the nearest cent.
///
/// Rounds on purpose instead of truncating: `19.99` is charged as 1999
/// cents, where a `parseInt(price * 100)` truncation would charge 1998.
pub fn price_to_cents(price: f64) -> Result<i64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::InvalidRequest(format!(
            "price must be a positive amount, got {}",
            price
        )));
    }
    Ok((price * 100.0).round() as i64)
}

pub async fn create_payment_intent(
    gateway: &dyn PaymentGateway,
    price: f64,
) -> Result<PaymentIntentResponse, AppError> {
    let amount = price_to_cents(price)?;
    let intent = gateway.create_payment_intent(amount, CURRENCY).await?;

    Ok(PaymentIntentResponse {
        client_secret: intent.client_secret,
    })
}

/// Stores the payment as posted, then drops the cart entries listed in its
/// `selectedItems`. The two writes are not transactional.
pub async fn record_payment(db: &MongoDB, payment: Document) -> Result<PaymentReceipt, AppError> {
    let paid_items = object_ids_from_bson("selectedItems", payment.get("selectedItems"))?;

    let insert_result = db
        .collection::<Document>(PAYMENTS)
        .insert_one(payment)
        .await?
        .into();

    let delete_result = selected_item_service::remove_many(db, paid_items).await?;

    Ok(PaymentReceipt {
        insert_result,
        delete_result,
    })
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::services::stripe_service::PaymentIntent;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requested amounts and hands back a fixed intent.
    #[derive(Default)]
    pub struct StubGateway {
        pub requested: Mutex<Vec<(i64, String)>>,
    }

    #[async_trait]
    impl PaymentGateway for StubGateway {
        async fn create_payment_intent(
            &self,
            amount_cents: i64,
            currency: &str,
        ) -> Result<PaymentIntent, AppError> {
            self.requested
                .lock()
                .unwrap()
                .push((amount_cents, currency.to_string()));
            Ok(PaymentIntent {
                id: "pi_test".to_string(),
                client_secret: "pi_test_secret".to_string(),
                amount: amount_cents,
                currency: currency.to_string(),
            })
        }
    }
}
