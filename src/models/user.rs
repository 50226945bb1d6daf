use mongodb::bson::Document;
use serde::Serialize;

/// Value of the `role` field on a user document. Users without the field
/// are plain students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Instructor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Instructor => "Instructor",
        }
    }

    /// True when the stored user document carries exactly this role.
    pub fn is_held_by(&self, user: Option<&Document>) -> bool {
        user.and_then(|u| u.get_str("role").ok()) == Some(self.as_str())
    }
}

/// Answer of the role probes. Both probes report under `admin`, which is
/// what the web client reads.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RoleCheckResponse {
    pub admin: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
