//! Deterministic, paginated synthetic book catalogue generation.
//!
//! Every book is a pure function of `(seed, locale, absolute index, likes
//! average, reviews average)`. Any page of the conceptually infinite catalogue
//! can be regenerated, in any order, without generating the pages before it.
//!
//! # Overview
//!
//! The crate is split into three stages:
//!
//! - Seed derivation hashes `(seed, locale, index)` into a per-record seed and
//!   splits it into independent generator streams
//! - Field synthesis fills identifier, title, authors, publisher, and cover
//!   image from locale-specific templates and name generators
//! - Expectation sampling turns fractional averages into integer like and
//!   review counts whose mean converges to the average
//!
//! A [`GenerationRequest`] ties them together. [`export_cli`] and the
//! [`write_csv`]/[`write_json`] helpers cover bulk export.
//!
//! # Example
//!
//! ```
//! use book_data::{GenerationRequest, generate_page};
//!
//! let request = GenerationRequest {
//!     seed: "mossy-owl".to_owned(),
//!     locale: "de".to_owned(),
//!     page: 1,
//!     page_size: 5,
//!     ..GenerationRequest::default()
//! };
//!
//! let books = generate_page(&request).expect("valid request");
//! assert_eq!(books.len(), 5);
//! assert_eq!(books.first().map(|book| book.index), Some(6));
//! assert_eq!(books, generate_page(&request).expect("valid request"));
//! ```

mod book;
mod error;
mod export;
pub mod export_cli;
mod generator;
mod locale;
mod request;
mod sampler;
mod seed;
mod synthesizer;

pub use book::{Book, Review};
pub use error::{ExportError, GenerationError};
pub use export::{write_csv, write_json};
pub use generator::{generate_book, generate_export, generate_page, generate_window};
pub use locale::{Lexicon, LocaleProfile};
pub use request::{
    DEFAULT_LIKES_AVG, DEFAULT_LOCALE, DEFAULT_PAGE_SIZE, DEFAULT_REVIEWS_AVG, DEFAULT_SEED,
    GenerationRequest, MAX_LIKES_AVG, MAX_REVIEWS_AVG, PageWindow, ValidatedRequest,
};
pub use sampler::{sample_count, synthesize_reviews};
pub use seed::{RecordSeed, SEED_HASH_VERSION, SeedStream, derive_seed, fnv1a_32};
pub use synthesizer::synthesize_book;
