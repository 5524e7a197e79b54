//! Generated catalogue record types.
//!
//! Records are built once per request and never mutated afterwards. Field
//! names serialise in camelCase to match the catalogue client.

use serde::{Deserialize, Serialize};

/// A reader review attached to a [`Book`].
///
/// Reviews have no identity beyond their position in the parent's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review body.
    pub text: String,
    /// Reviewer display name.
    pub reviewer: String,
}

/// A generated catalogue record.
///
/// # Example
///
/// ```
/// use book_data::{Book, Review};
///
/// let book = Book {
///     index: 1,
///     isbn: "978-12-34567-89012-3".to_owned(),
///     title: "Rustic Lantern".to_owned(),
///     authors: vec!["Ada Lovelace".to_owned()],
///     publisher: "Babbage Ltd, 1999".to_owned(),
///     likes: 3,
///     reviews: vec![Review {
///         text: "A refined read from start to finish.".to_owned(),
///         reviewer: "Charles Babbage".to_owned(),
///     }],
///     image: "https://dummyimage.com/verticalrectangle/123/fff&text=Rustic+Lantern".to_owned(),
/// };
///
/// assert_eq!(book.authors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 1-based absolute index within the `(seed, locale)` space.
    pub index: u64,
    /// ISBN-like identifier.
    pub isbn: String,
    /// Title.
    pub title: String,
    /// One to three author names, in order.
    pub authors: Vec<String>,
    /// Publisher name and year.
    pub publisher: String,
    /// Like count.
    pub likes: u32,
    /// Reviews, in order.
    pub reviews: Vec<Review>,
    /// Cover image URL.
    pub image: String,
}
