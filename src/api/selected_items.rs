use actix_web::{web, HttpResponse, ResponseError};
use mongodb::bson::Document;

use crate::{
    database::MongoDB,
    middleware::auth::Claims,
    models::SelectedItemsQuery,
    services::selected_item_service,
    utils::{documents_to_json, AppError, FORBIDDEN_OWNER_MESSAGE},
};

/// GET /selectedItems?email= - the caller's own cart
#[utoipa::path(
    get,
    path = "/selectedItems",
    tag = "Selected Items",
    params(SelectedItemsQuery),
    responses(
        (status = 200, description = "Cart entries of that email; empty without one", body = [Object]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email differs from the token's")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_selected_items(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    query: web::Query<SelectedItemsQuery>,
) -> HttpResponse {
    let email = match query.email.as_deref().filter(|e| !e.is_empty()) {
        Some(email) => email,
        None => return HttpResponse::Ok().json(Vec::<serde_json::Value>::new()),
    };

    log::info!("🛒 GET /selectedItems - email: {}", email);

    if email != user.email {
        log::warn!("⚠️ {} asked for the cart of {}", user.email, email);
        return AppError::Forbidden(FORBIDDEN_OWNER_MESSAGE).error_response();
    }

    match selected_item_service::list_for_email(&db, email).await {
        Ok(items) => HttpResponse::Ok().json(documents_to_json(items)),
        Err(e) => {
            log::error!("❌ Error listing selected items: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/selectedItems",
    tag = "Selected Items",
    request_body(content = Object, description = "Cart entry: class reference plus owner email"),
    responses((status = 200, description = "Insert result"))
)]
pub async fn add_selected_item(db: web::Data<MongoDB>, item: web::Json<Document>) -> HttpResponse {
    log::info!("🛒 POST /selectedItems - email: {}", item.get_str("email").unwrap_or("N/A"));

    match selected_item_service::add_item(&db, item.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error adding selected item: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/selectedItems/{id}",
    tag = "Selected Items",
    params(("id" = String, Path, description = "Selected item ObjectId")),
    responses(
        (status = 200, description = "Delete result"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete_selected_item(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    log::info!("🗑️  DELETE /selectedItems/{}", id);

    match selected_item_service::remove_item(&db, &id).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error deleting selected item {}: {}", id, e);
            e.error_response()
        }
    }
}
