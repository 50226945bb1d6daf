// Utility functions
pub mod error;
pub mod json;
pub mod object_id;

pub use error::*;
pub use json::*;
pub use object_id::*;
