use actix_web::{web, HttpResponse, ResponseError};

use crate::{database::MongoDB, services::instructor_service, utils::documents_to_json};

#[utoipa::path(
    get,
    path = "/instructor",
    tag = "Instructors",
    responses((status = 200, description = "All instructor profiles", body = [Object]))
)]
pub async fn get_instructors(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("👩‍🏫 GET /instructor");

    match instructor_service::list_instructors(&db).await {
        Ok(instructors) => HttpResponse::Ok().json(documents_to_json(instructors)),
        Err(e) => {
            log::error!("❌ Error listing instructors: {}", e);
            e.error_response()
        }
    }
}
