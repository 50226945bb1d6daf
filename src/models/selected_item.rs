use serde::Deserialize;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SelectedItemsQuery {
    /// Owner of the cart. Without it the list is empty.
    pub email: Option<String>,
}
