//! Serialisation of generated books for bulk export.
//!
//! CSV flattens each book into one row: authors are joined with `"; "` and
//! reviews are reported as a count. JSON keeps the full record shape.

use std::io::Write;

use serde::Serialize;

use crate::book::Book;
use crate::error::ExportError;

const AUTHOR_SEPARATOR: &str = "; ";

/// One flattened CSV row. Field order fixes the header order.
#[derive(Serialize)]
struct CsvRow<'a> {
    index: u64,
    isbn: &'a str,
    title: &'a str,
    authors: String,
    publisher: &'a str,
    likes: u32,
    reviews: usize,
    image: &'a str,
}

impl<'a> From<&'a Book> for CsvRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            index: book.index,
            isbn: &book.isbn,
            title: &book.title,
            authors: book.authors.join(AUTHOR_SEPARATOR),
            publisher: &book.publisher,
            likes: book.likes,
            reviews: book.reviews.len(),
            image: &book.image,
        }
    }
}

/// Writes `books` as CSV with a single header row.
///
/// An empty slice still produces the header row.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] when a row cannot be written or the writer
/// cannot be flushed.
///
/// # Example
///
/// ```
/// use book_data::{GenerationRequest, generate_page, write_csv};
///
/// let books = generate_page(&GenerationRequest {
///     page_size: 2,
///     ..GenerationRequest::default()
/// })
/// .expect("valid request");
///
/// let mut out = Vec::new();
/// write_csv(&books, &mut out).expect("write csv");
///
/// let text = String::from_utf8(out).expect("utf-8");
/// assert!(text.starts_with("index,isbn,title,authors,publisher,likes,reviews,image\n"));
/// assert_eq!(text.lines().count(), 3);
/// ```
pub fn write_csv<W: Write>(books: &[Book], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if books.is_empty() {
        csv_writer
            .write_record(HEADER)
            .map_err(|err| csv_error(&err))?;
    }
    for book in books {
        csv_writer
            .serialize(CsvRow::from(book))
            .map_err(|err| csv_error(&err))?;
    }
    csv_writer.flush().map_err(|err| csv_error(&err))
}

const HEADER: [&str; 8] = [
    "index",
    "isbn",
    "title",
    "authors",
    "publisher",
    "likes",
    "reviews",
    "image",
];

fn csv_error(err: &impl ToString) -> ExportError {
    ExportError::Csv {
        message: err.to_string(),
    }
}

/// Writes `books` as a pretty-printed JSON array followed by a newline.
///
/// # Errors
///
/// Returns [`ExportError::Json`] when serialisation or the write fails.
pub fn write_json<W: Write>(books: &[Book], mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, books).map_err(|err| ExportError::Json {
        message: err.to_string(),
    })?;
    writeln!(writer).map_err(|err| ExportError::Json {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::book::Review;

    #[fixture]
    fn book() -> Book {
        Book {
            index: 3,
            isbn: "978-12-34567-89012-3".to_owned(),
            title: "Quiet, Burning Harbour".to_owned(),
            authors: vec!["Ada Lovelace".to_owned(), "Grace Hopper".to_owned()],
            publisher: "Babbage Ltd, 1999".to_owned(),
            likes: 4,
            reviews: vec![
                Review {
                    text: "Fine.".to_owned(),
                    reviewer: "Alan Turing".to_owned(),
                };
                2
            ],
            image: "https://dummyimage.com/verticalrectangle/123/fff&text=Quiet".to_owned(),
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[rstest]
    fn csv_rows_flatten_authors_and_count_reviews(book: Book) {
        let mut out = Vec::new();
        write_csv(&[book], &mut out).expect("write csv");
        let text = String::from_utf8(out).expect("utf-8");
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("index,isbn,title,authors,publisher,likes,reviews,image")
        );
        assert_eq!(
            lines.next(),
            Some(
                "3,978-12-34567-89012-3,\"Quiet, Burning Harbour\",Ada Lovelace; Grace Hopper,\
                 \"Babbage Ltd, 1999\",4,2,https://dummyimage.com/verticalrectangle/123/fff&text=Quiet"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_of_no_books_is_just_the_header() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).expect("write csv");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "index,isbn,title,authors,publisher,likes,reviews,image\n"
        );
    }

    #[rstest]
    fn json_keeps_the_full_record(book: Book) {
        let mut out = Vec::new();
        write_json(std::slice::from_ref(&book), &mut out).expect("write json");

        let parsed: Vec<Book> = serde_json::from_slice(&out).expect("parse json");
        assert_eq!(parsed, vec![book]);
        assert!(out.ends_with(b"]\n"));
    }

    #[rstest]
    fn writer_failures_surface_as_export_errors(book: Book) {
        let csv_err = write_csv(std::slice::from_ref(&book), FailingWriter).expect_err("csv");
        assert!(matches!(csv_err, ExportError::Csv { .. }));

        let json_err = write_json(&[book], FailingWriter).expect_err("json");
        assert!(matches!(json_err, ExportError::Json { .. }));
    }
}
