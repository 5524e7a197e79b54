//! Service-level policy for catalogue requests.
//!
//! The generation engine accepts any well-formed window. The service adds
//! upper bounds so a single request cannot ask for unbounded work, and maps
//! engine validation failures into [`Error`] payloads.

use book_data::{GenerationError, GenerationRequest};
use serde_json::json;

use crate::domain::Error;

/// Default cap on records per page.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 1_000;
/// Default cap on the average review count.
pub const DEFAULT_MAX_REVIEWS_AVG: f64 = 100.0;
/// Default cap on the average like count.
pub const DEFAULT_MAX_LIKES_AVG: f64 = 10_000.0;
/// Default cap on the records a single export may generate.
pub const DEFAULT_MAX_EXPORT_RECORDS: u64 = 100_000;

/// Upper bounds applied to incoming catalogue requests.
///
/// # Examples
/// ```
/// use backend::domain::CatalogueLimits;
/// use book_data::GenerationRequest;
///
/// let limits = CatalogueLimits::default();
/// assert!(limits.check(&GenerationRequest::default()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueLimits {
    /// Largest accepted `pageSize`.
    pub max_page_size: u32,
    /// Largest accepted `reviewsAvg`.
    pub max_reviews_avg: f64,
    /// Largest accepted `likesAvg`.
    pub max_likes_avg: f64,
    /// Largest accepted `page * pageSize` for exports.
    pub max_export_records: u64,
}

impl Default for CatalogueLimits {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            max_reviews_avg: DEFAULT_MAX_REVIEWS_AVG,
            max_likes_avg: DEFAULT_MAX_LIKES_AVG,
            max_export_records: DEFAULT_MAX_EXPORT_RECORDS,
        }
    }
}

impl CatalogueLimits {
    /// Rejects requests exceeding any configured bound.
    ///
    /// Only the bounds are checked here; structural validation (zero page
    /// size, negative averages, empty locale) stays with the engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::invalid_request`] naming the offending field.
    pub fn check(&self, request: &GenerationRequest) -> Result<(), Error> {
        if request.page_size > self.max_page_size {
            return Err(limit_error("pageSize", self.max_page_size.to_string()));
        }
        if request.likes_avg > self.max_likes_avg {
            return Err(limit_error("likesAvg", self.max_likes_avg.to_string()));
        }
        if request.reviews_avg > self.max_reviews_avg {
            return Err(limit_error("reviewsAvg", self.max_reviews_avg.to_string()));
        }
        Ok(())
    }

    /// Applies [`Self::check`] plus the export size bound.
    ///
    /// Exports cover every record up to the requested page, so the bound is
    /// on `page * pageSize` and is reported against `page`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::invalid_request`] naming the offending field.
    pub fn check_export(&self, request: &GenerationRequest) -> Result<(), Error> {
        self.check(request)?;
        let records = request.page.saturating_mul(u64::from(request.page_size));
        if records > self.max_export_records {
            return Err(limit_error("page", self.max_export_records.to_string()));
        }
        Ok(())
    }
}

fn limit_error(field: &str, max: String) -> Error {
    Error::invalid_request(format!("{field} must not exceed {max}"))
        .with_details(json!({ "field": field, "code": "limit_exceeded", "max": max }))
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        Self::invalid_request(err.to_string())
            .with_details(json!({ "field": err.field(), "code": err.code() }))
    }
}
