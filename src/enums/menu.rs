use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /restaurants/{id}/menu`; the restaurant id comes from the
/// path, not the body.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItemRequest {
    pub name: String,
    pub price: f64,
    pub is_available: bool,
}
