//! Port for generating catalogue pages.
//!
//! HTTP handlers depend on this trait rather than on the generation engine,
//! so they can be exercised with fixtures and mocks.

use async_trait::async_trait;
use book_data::{Book, GenerationError, GenerationRequest};

use crate::domain::Error;

/// Errors raised by a [`BookCatalogue`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookCatalogueError {
    /// The request does not describe a valid window.
    #[error(transparent)]
    Rejected(#[from] GenerationError),
    /// Generation could not run to completion.
    #[error("catalogue generation failed: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },
}

impl BookCatalogueError {
    /// Convenience constructor for [`BookCatalogueError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<BookCatalogueError> for Error {
    fn from(err: BookCatalogueError) -> Self {
        match err {
            BookCatalogueError::Rejected(source) => Self::from(source),
            BookCatalogueError::Unavailable { message } => Self::internal(message),
        }
    }
}

/// Source of generated books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalogue: Send + Sync {
    /// Generate the page addressed by `request`.
    async fn page(&self, request: GenerationRequest) -> Result<Vec<Book>, BookCatalogueError>;

    /// Generate the first `request.page * request.page_size` books.
    async fn export(&self, request: GenerationRequest) -> Result<Vec<Book>, BookCatalogueError>;
}

/// Fixture implementation returning empty windows after validation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookCatalogue;

#[async_trait]
impl BookCatalogue for FixtureBookCatalogue {
    async fn page(&self, request: GenerationRequest) -> Result<Vec<Book>, BookCatalogueError> {
        request.validate()?;
        Ok(Vec::new())
    }

    async fn export(&self, request: GenerationRequest) -> Result<Vec<Book>, BookCatalogueError> {
        request.validate()?;
        Ok(Vec::new())
    }
}
