use actix_web::{web, HttpResponse, ResponseError};
use mongodb::bson::Document;

use crate::{
    database::MongoDB,
    models::{MessageResponse, Role, RoleCheckResponse},
    services::user_service::{self, CreateUserOutcome},
    utils::documents_to_json,
};

/// GET /users - every registered user (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user documents", body = [Object]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an Admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /users");

    match user_service::list_users(&db).await {
        Ok(users) => HttpResponse::Ok().json(documents_to_json(users)),
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// POST /users - registers a profile once per email
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(content = Object, description = "User profile; `email` identifies the user"),
    responses(
        (status = 200, description = "Insert result, or `{ message: \"user already exists\" }`")
    )
)]
pub async fn create_user(db: web::Data<MongoDB>, user: web::Json<Document>) -> HttpResponse {
    let email = user.get_str("email").unwrap_or("N/A").to_string();
    log::info!("📝 POST /users - email: {}", email);

    match user_service::create_user(&db, user.into_inner()).await {
        Ok(CreateUserOutcome::Created(result)) => {
            log::info!("✅ User created: {}", email);
            HttpResponse::Ok().json(result)
        }
        Ok(CreateUserOutcome::AlreadyExists) => HttpResponse::Ok().json(MessageResponse {
            message: "user already exists".to_string(),
        }),
        Err(e) => {
            log::error!("❌ Error creating user {}: {}", email, e);
            e.error_response()
        }
    }
}

async fn check_role(db: &MongoDB, email: &str, role: Role) -> HttpResponse {
    log::info!("🔎 Role check {} for {}", role.as_str(), email);

    match user_service::has_role(db, email, role).await {
        Ok(admin) => HttpResponse::Ok().json(RoleCheckResponse { admin }),
        Err(e) => {
            log::error!("❌ Role check failed for {}: {}", email, e);
            e.error_response()
        }
    }
}

async fn assign_role(db: &MongoDB, id: &str, role: Role) -> HttpResponse {
    log::info!("🔧 Assigning role {} to user {}", role.as_str(), id);

    match user_service::set_role(db, id, role).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("❌ Failed to assign {} to {}: {}", role.as_str(), id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/admin/{key}",
    tag = "Users",
    params(("key" = String, Path, description = "User email")),
    responses((status = 200, description = "Whether the user is an Admin", body = RoleCheckResponse))
)]
pub async fn is_admin(db: web::Data<MongoDB>, email: web::Path<String>) -> HttpResponse {
    check_role(&db, &email, Role::Admin).await
}

#[utoipa::path(
    patch,
    path = "/users/admin/{key}",
    tag = "Users",
    params(("key" = String, Path, description = "User ObjectId")),
    responses(
        (status = 200, description = "Update result"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn make_admin(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    assign_role(&db, &id, Role::Admin).await
}

#[utoipa::path(
    get,
    path = "/users/instructor/{key}",
    tag = "Users",
    params(("key" = String, Path, description = "User email")),
    responses((status = 200, description = "Whether the user is an Instructor (reported as `admin`)", body = RoleCheckResponse))
)]
pub async fn is_instructor(db: web::Data<MongoDB>, email: web::Path<String>) -> HttpResponse {
    check_role(&db, &email, Role::Instructor).await
}

#[utoipa::path(
    patch,
    path = "/users/instructor/{key}",
    tag = "Users",
    params(("key" = String, Path, description = "User ObjectId")),
    responses(
        (status = 200, description = "Update result"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn make_instructor(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    assign_role(&db, &id, Role::Instructor).await
}
