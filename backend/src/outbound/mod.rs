//! Outbound adapters implementing domain ports.
//!
//! - **generation**: the `book-data` engine behind the `BookCatalogue` port
//!
//! Adapters are thin translators between domain ports and the engine. They
//! contain no catalogue policy.

pub mod generation;
