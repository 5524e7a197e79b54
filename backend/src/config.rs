//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, configuration files, `BOOKSTORE_*`
//! environment variables and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{
    CatalogueLimits, DEFAULT_MAX_EXPORT_RECORDS, DEFAULT_MAX_LIKES_AVG, DEFAULT_MAX_PAGE_SIZE,
    DEFAULT_MAX_REVIEWS_AVG,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings for the catalogue HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSTORE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Largest accepted `pageSize`.
    pub max_page_size: Option<u32>,
    /// Largest accepted `reviewsAvg`.
    pub max_reviews_avg: Option<f64>,
    /// Largest accepted `likesAvg`.
    pub max_likes_avg: Option<f64>,
    /// Largest accepted `page * pageSize` for exports.
    pub max_export_records: Option<u64>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`std::net::AddrParseError`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host(), self.port()).parse()
    }

    /// Return the request limits, with defaults for unset bounds.
    #[must_use]
    pub fn limits(&self) -> CatalogueLimits {
        CatalogueLimits {
            max_page_size: self.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE),
            max_reviews_avg: self.max_reviews_avg.unwrap_or(DEFAULT_MAX_REVIEWS_AVG),
            max_likes_avg: self.max_likes_avg.unwrap_or(DEFAULT_MAX_LIKES_AVG),
            max_export_records: self
                .max_export_records
                .unwrap_or(DEFAULT_MAX_EXPORT_RECORDS),
        }
    }
}
