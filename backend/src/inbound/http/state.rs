//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend only
//! on the catalogue port and the request limits and stay testable without the
//! generation engine.

use std::sync::Arc;

use crate::domain::CatalogueLimits;
use crate::domain::ports::BookCatalogue;

/// Dependency bundle for catalogue handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::CatalogueLimits;
/// use backend::domain::ports::FixtureBookCatalogue;
/// use backend::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(FixtureBookCatalogue), CatalogueLimits::default());
/// assert_eq!(state.limits.max_page_size, 1_000);
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Source of generated books.
    pub catalogue: Arc<dyn BookCatalogue>,
    /// Bounds applied before any generation runs.
    pub limits: CatalogueLimits,
}

impl HttpState {
    /// Bundle a catalogue port with request limits.
    #[must_use]
    pub fn new(catalogue: Arc<dyn BookCatalogue>, limits: CatalogueLimits) -> Self {
        Self { catalogue, limits }
    }
}
