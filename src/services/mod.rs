pub mod auth_service;
pub mod class_service;
pub mod instructor_service;
pub mod payment_service;
pub mod selected_item_service;
pub mod stripe_service;
pub mod user_service;

pub use stripe_service::{PaymentGateway, StripeClient};
pub use user_service::RoleDirectory;
