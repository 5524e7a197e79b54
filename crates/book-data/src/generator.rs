//! Page and export generation over validated requests.
//!
//! Every record is a pure function of `(seed, locale, absolute index, likes
//! average, reviews average)`. Validation runs before any record is built, so
//! a request either yields its whole window or an error.

use crate::book::Book;
use crate::error::GenerationError;
use crate::request::{GenerationRequest, PageWindow, ValidatedRequest};
use crate::sampler::{sample_count, synthesize_reviews};
use crate::seed::derive_seed;
use crate::synthesizer::synthesize_book;

/// Builds the record at `absolute_index` for a validated request.
///
/// # Example
///
/// ```
/// use book_data::{GenerationRequest, generate_book};
///
/// let request = GenerationRequest::default().validate().expect("valid request");
/// let book = generate_book(&request, 7);
/// assert_eq!(book.index, 7);
/// assert_eq!(book, generate_book(&request, 7));
/// ```
#[must_use]
pub fn generate_book(request: &ValidatedRequest, absolute_index: u64) -> Book {
    let seed = derive_seed(request.seed(), request.locale(), absolute_index);
    let profile = request.profile();
    let base = synthesize_book(seed, profile, absolute_index);
    Book {
        likes: sample_count(seed, request.likes_avg()),
        reviews: synthesize_reviews(seed, profile, request.reviews_avg()),
        ..base
    }
}

/// Builds every record in `window`, in index order.
#[must_use]
pub fn generate_window(request: &ValidatedRequest, window: PageWindow) -> Vec<Book> {
    window
        .indices()
        .map(|index| generate_book(request, index))
        .collect()
}

/// Generates the requested page.
///
/// # Errors
///
/// Returns [`GenerationError`] when the request fails validation; no records
/// are built in that case.
///
/// # Example
///
/// ```
/// use book_data::{GenerationRequest, generate_page};
///
/// let request = GenerationRequest {
///     page: 1,
///     page_size: 5,
///     ..GenerationRequest::default()
/// };
/// let books = generate_page(&request).expect("valid request");
///
/// let indices: Vec<u64> = books.iter().map(|book| book.index).collect();
/// assert_eq!(indices, vec![6, 7, 8, 9, 10]);
/// ```
pub fn generate_page(request: &GenerationRequest) -> Result<Vec<Book>, GenerationError> {
    let validated = request.validate()?;
    Ok(generate_window(&validated, validated.page_window()))
}

/// Generates the first `page * page_size` records for bulk export.
///
/// # Errors
///
/// Returns [`GenerationError`] when the request fails validation.
pub fn generate_export(request: &GenerationRequest) -> Result<Vec<Book>, GenerationError> {
    let validated = request.validate()?;
    Ok(generate_window(&validated, validated.export_window()))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn request() -> GenerationRequest {
        GenerationRequest {
            seed: "lantern".to_owned(),
            page_size: 10,
            ..GenerationRequest::default()
        }
    }

    #[rstest]
    fn pages_hold_page_size_records_in_index_order(request: GenerationRequest) {
        let books = generate_page(&GenerationRequest { page: 3, ..request }).expect("page");
        let indices: Vec<u64> = books.iter().map(|book| book.index).collect();
        assert_eq!(indices, (31..=40).collect::<Vec<_>>());
    }

    #[rstest]
    fn invalid_requests_build_nothing(request: GenerationRequest) {
        let err = generate_page(&GenerationRequest {
            page_size: 0,
            ..request
        })
        .expect_err("zero page size");
        assert_eq!(err, GenerationError::EmptyPage);
    }

    #[rstest]
    fn export_covers_all_pages_seen_so_far(request: GenerationRequest) {
        let export = generate_export(&GenerationRequest {
            page: 3,
            ..request.clone()
        })
        .expect("export");
        assert_eq!(export.len(), 30);

        let third = generate_page(&GenerationRequest { page: 2, ..request }).expect("page");
        assert_eq!(export.get(20..), Some(third.as_slice()));
    }

    #[rstest]
    fn export_of_page_zero_is_empty(request: GenerationRequest) {
        let export = generate_export(&request).expect("export");
        assert!(export.is_empty());
    }

    #[rstest]
    fn likes_average_does_not_touch_other_fields(request: GenerationRequest) {
        let quiet = generate_page(&GenerationRequest {
            likes_avg: 0.0,
            ..request.clone()
        })
        .expect("page");
        let busy = generate_page(&GenerationRequest {
            likes_avg: 7.5,
            ..request
        })
        .expect("page");

        for (a, b) in quiet.iter().zip(&busy) {
            assert_eq!(a.likes, 0);
            assert_eq!(
                Book { likes: 0, ..b.clone() },
                a.clone(),
                "only likes may differ at index {}",
                a.index
            );
        }
    }

    #[rstest]
    fn validated_locale_is_the_trimmed_code(request: GenerationRequest) {
        let trimmed = generate_page(&GenerationRequest {
            locale: "de".to_owned(),
            ..request.clone()
        })
        .expect("page");
        let padded = generate_page(&GenerationRequest {
            locale: "  de ".to_owned(),
            ..request
        })
        .expect("page");
        assert_eq!(trimmed, padded);
    }
}
