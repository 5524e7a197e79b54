//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while giving every failing handler the
//! same JSON envelope, status mapping, and trace header.

use actix_web::error::QueryPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code(), ErrorCode::InternalError) {
        error!(message = err.message(), trace_id = ?err.trace_id(), "internal error");
        let redacted = Error::internal("Internal server error");
        match err.trace_id() {
            Some(id) => redacted.with_trace_id(id),
            None => redacted,
        }
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Query extractor configuration reporting failures as [`Error`] payloads.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "signature fixed by actix_web::web::QueryConfig::error_handler"
)]
fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = req.path(), error = %err, "malformed query string");
    Error::invalid_request(format!("invalid query string: {err}"))
        .with_details(json!({ "code": "malformed_query" }))
        .into()
}

/// Fallback for unmatched routes, answering with the JSON error envelope.
///
/// Install with `App::default_service(web::to(route_not_found))`.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    ))
    .with_details(json!({ "path": req.path() })))
}
