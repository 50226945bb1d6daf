use actix_web::{web, HttpResponse, ResponseError};
use mongodb::bson::Document;

use crate::{
    database::MongoDB,
    models::{ClassFeedbackUpdate, ClassQuery, ClassStatusUpdate, SeatsUpdateRequest},
    services::class_service,
    utils::{documents_to_json, AppError},
};

const UPDATE_CLASS_ERROR: &str = "Error updating class.";

/// GET /classes - name search plus optional instructor filter
#[utoipa::path(
    get,
    path = "/classes",
    tag = "Classes",
    params(ClassQuery),
    responses((status = 200, description = "Matching classes", body = [Object]))
)]
pub async fn get_classes(db: web::Data<MongoDB>, query: web::Query<ClassQuery>) -> HttpResponse {
    log::info!(
        "📚 GET /classes - search: {:?}, email: {:?}",
        query.search,
        query.email
    );

    match class_service::list_classes(&db, &query).await {
        Ok(classes) => HttpResponse::Ok().json(documents_to_json(classes)),
        Err(e) => {
            log::error!("❌ Error listing classes: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/classes",
    tag = "Classes",
    request_body(content = Object, description = "Class document"),
    responses((status = 200, description = "Insert result"))
)]
pub async fn add_class(db: web::Data<MongoDB>, class: web::Json<Document>) -> HttpResponse {
    log::info!("📝 POST /classes - name: {}", class.get_str("name").unwrap_or("N/A"));

    match class_service::create_class(&db, class.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error adding class: {}", e);
            e.error_response()
        }
    }
}

/// Both class edits answer any failure with the same plain-text 500.
fn class_update_response(result: Result<crate::models::UpdateResult, AppError>) -> HttpResponse {
    match result {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("Update Class Error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(UPDATE_CLASS_ERROR)
        }
    }
}

#[utoipa::path(
    patch,
    path = "/classes/{id}/status",
    tag = "Classes",
    params(("id" = String, Path, description = "Class ObjectId")),
    request_body = ClassStatusUpdate,
    responses(
        (status = 200, description = "Update result"),
        (status = 500, description = "Error updating class.")
    )
)]
pub async fn update_class_status(
    db: web::Data<MongoDB>,
    id: web::Path<String>,
    body: web::Json<ClassStatusUpdate>,
) -> HttpResponse {
    log::info!("🔧 PATCH /classes/{}/status - {}", id, body.status);
    class_update_response(class_service::update_status(&db, &id, &body.status).await)
}

#[utoipa::path(
    patch,
    path = "/classes/{id}/feedback",
    tag = "Classes",
    params(("id" = String, Path, description = "Class ObjectId")),
    request_body = ClassFeedbackUpdate,
    responses(
        (status = 200, description = "Update result"),
        (status = 500, description = "Error updating class.")
    )
)]
pub async fn update_class_feedback(
    db: web::Data<MongoDB>,
    id: web::Path<String>,
    body: web::Json<ClassFeedbackUpdate>,
) -> HttpResponse {
    log::info!("🔧 PATCH /classes/{}/feedback", id);
    class_update_response(class_service::update_feedback(&db, &id, &body.feedback).await)
}

/// POST /update-available-seats - one seat fewer in each purchased class
#[utoipa::path(
    post,
    path = "/update-available-seats",
    tag = "Classes",
    request_body = SeatsUpdateRequest,
    responses(
        (status = 200, description = "Update result"),
        (status = 400, description = "Malformed class id")
    )
)]
pub async fn update_available_seats(
    db: web::Data<MongoDB>,
    body: web::Json<SeatsUpdateRequest>,
) -> HttpResponse {
    log::info!("🎟️  POST /update-available-seats - {} classes", body.class_ids.len());

    match class_service::decrement_seats(&db, &body.class_ids).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Error updating seats: {}", e);
            e.error_response()
        }
    }
}
