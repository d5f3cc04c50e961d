use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// The catalog operation that was being attempted when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Delete,
    Fetch,
}

impl Operation {
    /// Returns the generic failure message for this operation.
    pub fn failure_message(&self) -> &'static str {
        match *self {
            Operation::Add => "error adding product",
            Operation::Update => "error updating product",
            Operation::Delete => "error deleting product",
            Operation::Fetch => "error fetching products",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Outcome of a failed catalog operation.
///
/// The display text of each variant is the message sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required field was missing when creating a product.
    #[error("incomplete data: name, price, and category are required")]
    Validation,

    /// No product with the given id exists.
    #[error("product not found")]
    NotFound,

    /// An unexpected failure while running the operation.
    #[error("{0}")]
    Internal(Operation),
}

/// A convenient result type.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let CatalogError::Internal(operation) = self {
            log::error!("Failed operation: {}", operation);
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Rejects bodies that cannot be read as a JSON object of the expected shape.
///
/// Field presence is checked by the catalog itself, this only covers malformed input.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(json!({ "error": format!("invalid request body: {}", err) }));

    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_test() {
        assert_eq!(
            "incomplete data: name, price, and category are required",
            CatalogError::Validation.to_string()
        );
        assert_eq!("product not found", CatalogError::NotFound.to_string());
        assert_eq!(
            "error adding product",
            CatalogError::Internal(Operation::Add).to_string()
        );
        assert_eq!(
            "error updating product",
            CatalogError::Internal(Operation::Update).to_string()
        );
        assert_eq!(
            "error deleting product",
            CatalogError::Internal(Operation::Delete).to_string()
        );
    }

    #[test]
    fn status_code_test() {
        assert_eq!(StatusCode::BAD_REQUEST, CatalogError::Validation.status_code());
        assert_eq!(StatusCode::NOT_FOUND, CatalogError::NotFound.status_code());
        assert_eq!(
            StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Internal(Operation::Delete).status_code()
        );
    }
}
