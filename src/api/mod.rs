pub mod auth;
pub mod classes;
pub mod health;
pub mod instructors;
pub mod payments;
pub mod selected_items;
pub mod swagger;
pub mod users;

use actix_web::{guard, web};

use crate::middleware::{AuthMiddleware, RoleGuard};
use crate::utils::AppError;

/// Full route table. Expects `Data<AppConfig>`, `Data<MongoDB>` and
/// `Data<dyn PaymentGateway>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::InvalidRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::InvalidRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(health::index))
    .route("/health", web::get().to(health::health_check))
    .route("/jwt", web::post().to(auth::issue_token))
    // ==================== USERS ====================
    .service(
        web::resource("/users")
            .guard(guard::Get())
            .wrap(RoleGuard::admin())
            .wrap(AuthMiddleware)
            .route(web::get().to(users::get_users)),
    )
    .service(web::resource("/users").route(web::post().to(users::create_user)))
    .service(
        web::resource("/users/admin/{key}")
            .route(web::get().to(users::is_admin))
            .route(web::patch().to(users::make_admin)),
    )
    .service(
        web::resource("/users/instructor/{key}")
            .route(web::get().to(users::is_instructor))
            .route(web::patch().to(users::make_instructor)),
    )
    // ==================== CLASSES ====================
    .service(
        web::resource("/classes")
            .route(web::get().to(classes::get_classes))
            .route(web::post().to(classes::add_class)),
    )
    .route("/classes/{id}/status", web::patch().to(classes::update_class_status))
    .route("/classes/{id}/feedback", web::patch().to(classes::update_class_feedback))
    .route("/update-available-seats", web::post().to(classes::update_available_seats))
    .route("/instructor", web::get().to(instructors::get_instructors))
    // ==================== CART ====================
    .service(
        web::resource("/selectedItems")
            .guard(guard::Get())
            .wrap(AuthMiddleware)
            .route(web::get().to(selected_items::get_selected_items)),
    )
    .service(web::resource("/selectedItems").route(web::post().to(selected_items::add_selected_item)))
    .route("/selectedItems/{id}", web::delete().to(selected_items::delete_selected_item))
    // ==================== PAYMENTS ====================
    .service(
        web::resource("/create-payment-intent")
            .wrap(AuthMiddleware)
            .route(web::post().to(payments::create_payment_intent)),
    )
    .service(
        web::resource("/payments")
            .wrap(AuthMiddleware)
            .route(web::post().to(payments::save_payment)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, TEST_SECRET};
    use crate::database::test_support::{lazy_handle, live_handle};
    use crate::services::auth_service::generate_jwt;
    use crate::services::payment_service::test_support::StubGateway;
    use crate::services::{PaymentGateway, RoleDirectory};
    use actix_web::{http::StatusCode, test, App};
    use chrono::Duration;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn bearer(email: &str) -> (&'static str, String) {
        let payload = json!({ "email": email }).as_object().cloned().unwrap();
        let token = generate_jwt(payload, TEST_SECRET, Duration::hours(1)).unwrap();
        ("Authorization", format!("Bearer {}", token))
    }

    macro_rules! app_with {
        ($db:expr, $gateway:expr) => {{
            let db = $db;
            let roles: Arc<dyn RoleDirectory> = Arc::new(db.clone());
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppConfig::for_tests()))
                    .app_data(web::Data::new(db))
                    .app_data(web::Data::from(roles))
                    .app_data(web::Data::from($gateway as Arc<dyn PaymentGateway>))
                    .configure(configure),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn root_reports_running() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, web::Bytes::from_static(b"Running Successfully"));
    }

    #[actix_web::test]
    async fn jwt_route_issues_verifiable_token() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!({ "email": "camper@example.com" }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        let token = body["token"].as_str().unwrap();
        let claims = crate::services::auth_service::verify_token(token, TEST_SECRET).unwrap();
        assert_eq!(claims.email, "camper@example.com");
    }

    #[actix_web::test]
    async fn listing_users_requires_a_token() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": true, "message": "unauthorized access" }));
    }

    #[actix_web::test]
    async fn cart_without_email_is_empty() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::get()
            .uri("/selectedItems")
            .insert_header(bearer("camper@example.com"))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn cart_of_someone_else_is_forbidden() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::get()
            .uri("/selectedItems?email=other@example.com")
            .insert_header(bearer("camper@example.com"))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": true, "message": "forbidden access" }));
    }

    #[actix_web::test]
    async fn payment_intent_returns_client_secret() {
        let gateway = Arc::new(StubGateway::default());
        let app = app_with!(lazy_handle().await, gateway.clone());
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .insert_header(bearer("camper@example.com"))
            .set_json(json!({ "price": 35.5 }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "clientSecret": "pi_test_secret" }));
        assert_eq!(*gateway.requested.lock().unwrap(), vec![(3550, "usd".to_string())]);
    }

    #[actix_web::test]
    async fn payment_intent_accepts_price_sent_as_string() {
        let gateway = Arc::new(StubGateway::default());
        let app = app_with!(lazy_handle().await, gateway.clone());
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .insert_header(bearer("camper@example.com"))
            .set_json(json!({ "price": "35.5" }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(*gateway.requested.lock().unwrap(), vec![(3550, "usd".to_string())]);
    }

    #[actix_web::test]
    async fn payment_intent_rejects_non_numeric_price() {
        let gateway = Arc::new(StubGateway::default());
        let app = app_with!(lazy_handle().await, gateway.clone());
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .insert_header(bearer("camper@example.com"))
            .set_json(json!({ "price": "free" }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(gateway.requested.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn payment_intent_rejects_negative_price() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .insert_header(bearer("camper@example.com"))
            .set_json(json!({ "price": -3 }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn payment_intent_requires_a_token() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .set_json(json!({ "price": 10 }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_json_gets_error_envelope() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::post()
            .uri("/update-available-seats")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!(true));
    }

    #[actix_web::test]
    async fn malformed_class_id_is_plain_text_500() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::patch()
            .uri("/classes/not-an-id/status")
            .set_json(json!({ "status": "approved" }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(res).await, web::Bytes::from_static(b"Error updating class."));
    }

    #[actix_web::test]
    async fn malformed_user_id_is_bad_request() {
        let app = app_with!(lazy_handle().await, Arc::new(StubGateway::default()));
        let req = test::TestRequest::patch().uri("/users/admin/xyz").to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn registering_twice_returns_message_and_no_new_document() {
        let db = live_handle().await;
        let app = app_with!(db.clone(), Arc::new(StubGateway::default()));
        let user = json!({ "email": "camper@example.com", "name": "Ada" });

        let req = test::TestRequest::post().uri("/users").set_json(&user).to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first["acknowledged"], json!(true));
        assert!(first["insertedId"].is_string());

        let req = test::TestRequest::post().uri("/users").set_json(&user).to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second, json!({ "message": "user already exists" }));

        let count = db
            .collection::<mongodb::bson::Document>(crate::database::USERS)
            .count_documents(mongodb::bson::doc! {})
            .await
            .unwrap();
        assert_eq!(count, 1);

        db.database().drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn enrollment_flow_end_to_end() {
        let db = live_handle().await;
        let app = app_with!(db.clone(), Arc::new(StubGateway::default()));

        let req = test::TestRequest::post()
            .uri("/classes")
            .set_json(json!({ "name": "Pottery", "email": "coach@camp.io", "availableSeats": 10 }))
            .to_request();
        let class: Value = test::call_and_read_body_json(&app, req).await;
        let class_id = class["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/selectedItems")
            .set_json(json!({ "email": "kid@camp.io", "classId": class_id }))
            .to_request();
        let item: Value = test::call_and_read_body_json(&app, req).await;
        let item_id = item["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/selectedItems?email=kid@camp.io")
            .insert_header(bearer("kid@camp.io"))
            .to_request();
        let cart: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(cart[0]["_id"], json!(item_id));

        let req = test::TestRequest::post()
            .uri("/payments")
            .insert_header(bearer("kid@camp.io"))
            .set_json(json!({ "email": "kid@camp.io", "price": 25, "selectedItems": [item_id] }))
            .to_request();
        let receipt: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt["deleteResult"]["deletedCount"], json!(1));

        let req = test::TestRequest::post()
            .uri("/update-available-seats")
            .set_json(json!({ "classIds": [class_id] }))
            .to_request();
        let seats: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(seats["modifiedCount"], json!(1));

        let req = test::TestRequest::get().uri("/classes?search=pot").to_request();
        let classes: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(classes[0]["availableSeats"], json!(9));

        db.database().drop().await.unwrap();
    }
}
