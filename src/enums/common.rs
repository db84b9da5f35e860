use serde::Serialize;
use utoipa::ToSchema;

/// The one error envelope every failing route answers with.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
