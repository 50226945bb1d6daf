use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Summer Camp API",
        version = "1.0.0",
        description = "Class enrollment and payment API for the summer camp site.\n\n**Authentication:** obtain a token from `POST /jwt` and send it as `Authorization: Bearer <token>`. Listing users additionally requires the Admin role."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::auth::issue_token,

        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::is_admin,
        crate::api::users::make_admin,
        crate::api::users::is_instructor,
        crate::api::users::make_instructor,

        crate::api::classes::get_classes,
        crate::api::classes::add_class,
        crate::api::classes::update_class_status,
        crate::api::classes::update_class_feedback,
        crate::api::classes::update_available_seats,

        crate::api::instructors::get_instructors,

        crate::api::selected_items::get_selected_items,
        crate::api::selected_items::add_selected_item,
        crate::api::selected_items::delete_selected_item,

        crate::api::payments::create_payment_intent,
        crate::api::payments::save_payment,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::services::auth_service::TokenResponse,
            crate::models::RoleCheckResponse,
            crate::models::MessageResponse,
            crate::models::InsertResult,
            crate::models::UpdateResult,
            crate::models::DeleteResult,
            crate::models::ClassStatusUpdate,
            crate::models::ClassFeedbackUpdate,
            crate::models::SeatsUpdateRequest,
            crate::models::PaymentIntentRequest,
            crate::models::PaymentIntentResponse,
            crate::models::PaymentReceipt,
        )
    ),
    tags(
        (name = "Health", description = "Service status."),
        (name = "Auth", description = "Token issuing."),
        (name = "Users", description = "User registration and role management."),
        (name = "Classes", description = "Class catalog, review status and seat counts."),
        (name = "Instructors", description = "Instructor profiles."),
        (name = "Selected Items", description = "Per-user cart of selected classes."),
        (name = "Payments", description = "Stripe payment intents and payment records."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /jwt"))
                        .build()
                ),
            );
        }
    }
}
