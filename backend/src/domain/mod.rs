//! Domain primitives, policy, and ports.
//!
//! Purpose: keep catalogue rules and error payloads free of transport
//! concerns. Inbound adapters translate these types into HTTP responses.
//!
//! Public surface:
//! - Error / ErrorCode: client-facing error payload and its stable code.
//! - CatalogueLimits: service-level bounds on catalogue requests.
//! - TraceId: request-scoped correlation identifier.
//! - ports: the `BookCatalogue` port and its fixture.

mod catalogue;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::catalogue::{
    CatalogueLimits, DEFAULT_MAX_EXPORT_RECORDS, DEFAULT_MAX_LIKES_AVG, DEFAULT_MAX_PAGE_SIZE,
    DEFAULT_MAX_REVIEWS_AVG,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;

/// Header carrying the trace identifier on requests and responses.
pub const TRACE_ID_HEADER: &str = "trace-id";
