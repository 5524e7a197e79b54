//! Engine-backed implementation of the [`BookCatalogue`] port.
//!
//! Generation is CPU-bound, so each call runs on Tokio's blocking pool with
//! the caller's trace identifier re-established there.

use async_trait::async_trait;
use book_data::{Book, GenerationError, GenerationRequest, generate_export, generate_page};
use tracing::{debug, error};

use crate::domain::TraceId;
use crate::domain::ports::{BookCatalogue, BookCatalogueError};

/// Catalogue adapter delegating to `book_data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::ports::BookCatalogue;
/// use backend::outbound::generation::GeneratedBookCatalogue;
///
/// let catalogue: Arc<dyn BookCatalogue> = Arc::new(GeneratedBookCatalogue);
/// # let _ = catalogue;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratedBookCatalogue;

#[async_trait]
impl BookCatalogue for GeneratedBookCatalogue {
    async fn page(&self, request: GenerationRequest) -> Result<Vec<Book>, BookCatalogueError> {
        run_blocking("page", request, |req| generate_page(&req)).await
    }

    async fn export(&self, request: GenerationRequest) -> Result<Vec<Book>, BookCatalogueError> {
        run_blocking("export", request, |req| generate_export(&req)).await
    }
}

async fn run_blocking<F>(
    operation: &'static str,
    request: GenerationRequest,
    generate: F,
) -> Result<Vec<Book>, BookCatalogueError>
where
    F: FnOnce(GenerationRequest) -> Result<Vec<Book>, GenerationError> + Send + 'static,
{
    let trace_id = TraceId::current();
    let task = tokio::task::spawn_blocking(move || match trace_id {
        Some(id) => TraceId::sync_scope(id, || generate(request)),
        None => generate(request),
    });

    match task.await {
        Ok(Ok(books)) => {
            debug!(operation, count = books.len(), "catalogue window generated");
            Ok(books)
        }
        Ok(Err(rejected)) => {
            debug!(
                operation,
                field = rejected.field(),
                code = rejected.code(),
                "catalogue request rejected"
            );
            Err(BookCatalogueError::Rejected(rejected))
        }
        Err(join_error) => {
            error!(operation, error = %join_error, "catalogue generation task failed");
            Err(BookCatalogueError::unavailable(join_error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn page_matches_the_engine() {
        let request = GenerationRequest {
            page: 2,
            page_size: 5,
            ..GenerationRequest::default()
        };

        let books = GeneratedBookCatalogue
            .page(request.clone())
            .await
            .expect("valid request");

        assert_eq!(books, generate_page(&request).expect("valid request"));
    }

    #[rstest]
    #[tokio::test]
    async fn export_collapses_to_the_leading_window() {
        let request = GenerationRequest {
            page: 2,
            page_size: 5,
            ..GenerationRequest::default()
        };

        let books = GeneratedBookCatalogue
            .export(request)
            .await
            .expect("valid request");

        let indices: Vec<u64> = books.iter().map(|book| book.index).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_requests_are_rejected() {
        let request = GenerationRequest {
            locale: "  ".to_owned(),
            ..GenerationRequest::default()
        };

        let err = GeneratedBookCatalogue
            .page(request)
            .await
            .expect_err("empty locale");
        assert_eq!(err, BookCatalogueError::Rejected(GenerationError::EmptyLocale));
    }
}
