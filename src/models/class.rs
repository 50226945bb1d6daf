use serde::Deserialize;

/// Query string of `GET /classes`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassQuery {
    /// Case-insensitive pattern matched against the class name.
    pub search: Option<String>,
    /// Instructor email; only that instructor's classes when set.
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ClassStatusUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "approved")]
    pub status: serde_json::Value,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ClassFeedbackUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub feedback: serde_json::Value,
}

/// Body of `POST /update-available-seats`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SeatsUpdateRequest {
    #[serde(rename = "classIds", default)]
    pub class_ids: Vec<String>,
}
