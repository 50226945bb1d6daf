use actix_web::{web, HttpResponse, ResponseError};
use mongodb::bson::Document;

use crate::{
    database::MongoDB,
    middleware::auth::Claims,
    models::{PaymentIntentRequest, PaymentIntentResponse, PaymentReceipt},
    services::{payment_service, PaymentGateway},
};

/// POST /create-payment-intent - Stripe intent for the cart total
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = "Payments",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Client secret for the browser checkout", body = PaymentIntentResponse),
        (status = 400, description = "Price is not a positive amount"),
        (status = 401, description = "Missing or invalid token"),
        (status = 502, description = "Stripe rejected or was unreachable")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_payment_intent(
    user: web::ReqData<Claims>,
    gateway: web::Data<dyn PaymentGateway>,
    request: web::Json<PaymentIntentRequest>,
) -> HttpResponse {
    log::info!("💳 POST /create-payment-intent - {} for {}", request.price, user.email);

    match payment_service::create_payment_intent(gateway.get_ref(), request.price).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Payment intent failed for {}: {}", user.email, e);
            e.error_response()
        }
    }
}

/// POST /payments - records a completed payment and empties the paid cart entries
#[utoipa::path(
    post,
    path = "/payments",
    tag = "Payments",
    request_body(content = Object, description = "Payment record; `selectedItems` lists the paid cart entry ids"),
    responses(
        (status = 200, description = "Insert and delete results", body = PaymentReceipt),
        (status = 400, description = "Malformed selected item id"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn save_payment(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    payment: web::Json<Document>,
) -> HttpResponse {
    log::info!("💰 POST /payments - email: {}", user.email);

    match payment_service::record_payment(&db, payment.into_inner()).await {
        Ok(receipt) => {
            log::info!(
                "✅ Payment {} stored, {} cart entries removed",
                receipt.insert_result.inserted_id,
                receipt.delete_result.deleted_count
            );
            HttpResponse::Ok().json(receipt)
        }
        Err(e) => {
            log::error!("❌ Error saving payment for {}: {}", user.email, e);
            e.error_response()
        }
    }
}
