use crate::db::RepositoryError;
use crate::enums::common::ErrorBody;
use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest, HttpResponse};

pub(crate) fn default_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    error!("Error in request: {} \n Error: {}", req.full_url(), err);
    let resp = HttpResponse::BadRequest().json(ErrorBody {
        error: err.to_string(),
    });
    actix_web::error::InternalError::from_response("", resp).into()
}

/// Maps the repository taxonomy onto the wire contract: missing targets of
/// mutations are 404, validation failures 400, everything else a uniform 500.
pub(crate) fn repository_error_response(err: &RepositoryError) -> HttpResponse {
    match err {
        RepositoryError::NotFound(_) => HttpResponse::NotFound().json(ErrorBody {
            error: err.to_string(),
        }),
        RepositoryError::ValidationError(message) => HttpResponse::BadRequest().json(ErrorBody {
            error: message.clone(),
        }),
        RepositoryError::DatabaseError(_) | RepositoryError::ConnectionPoolError(_) => {
            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Internal Server Error".to_string(),
            })
        }
    }
}
