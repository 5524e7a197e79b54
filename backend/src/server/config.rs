//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::domain::CatalogueLimits;
use backend::domain::ports::BookCatalogue;
use backend::outbound::generation::GeneratedBookCatalogue;

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) limits: CatalogueLimits,
    pub(crate) catalogue: Arc<dyn BookCatalogue>,
}

impl ServerConfig {
    /// Construct a configuration serving the generated catalogue.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, limits: CatalogueLimits) -> Self {
        Self {
            bind_addr,
            limits,
            catalogue: Arc::new(GeneratedBookCatalogue),
        }
    }
}
