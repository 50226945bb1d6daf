pub mod class;
pub mod payment;
pub mod results;
pub mod selected_item;
pub mod user;

pub use class::*;
pub use payment::*;
pub use results::*;
pub use selected_item::*;
pub use user::*;
