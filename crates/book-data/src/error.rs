//! Error types for the book-data crate.
//!
//! Generation has a single recoverable failure surface: a request that does
//! not describe a valid page window is rejected before any record is built.
//! Export adds the serialisation failures of the output writers.

use thiserror::Error;

/// Errors raised while validating a [`GenerationRequest`].
///
/// A rejected request never yields a partial page.
///
/// [`GenerationRequest`]: crate::GenerationRequest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The page size was zero.
    #[error("pageSize must be greater than zero")]
    EmptyPage,

    /// An average was negative, NaN, or infinite.
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidAverage {
        /// Request field carrying the invalid average.
        field: &'static str,
        /// Offending value rendered as text.
        value: String,
    },

    /// An average exceeded the engine ceiling for its field.
    #[error("{field} must not exceed {max}, got {value}")]
    AverageTooLarge {
        /// Request field carrying the oversized average.
        field: &'static str,
        /// Offending value rendered as text.
        value: String,
        /// Ceiling for the field rendered as text.
        max: String,
    },

    /// The locale code was empty or whitespace.
    #[error("locale must not be empty")]
    EmptyLocale,

    /// The requested window addresses indices beyond `u64::MAX`.
    #[error("page {page} with pageSize {page_size} exceeds the addressable record range")]
    WindowOverflow {
        /// Zero-based page number.
        page: u64,
        /// Requested page size.
        page_size: u32,
    },
}

impl GenerationError {
    /// Returns the request field the error refers to.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::GenerationError;
    ///
    /// assert_eq!(GenerationError::EmptyPage.field(), "pageSize");
    /// ```
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyPage => "pageSize",
            Self::InvalidAverage { field, .. } | Self::AverageTooLarge { field, .. } => *field,
            Self::EmptyLocale => "locale",
            Self::WindowOverflow { .. } => "page",
        }
    }

    /// Returns a stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyPage => "empty_page",
            Self::InvalidAverage { .. } => "invalid_average",
            Self::AverageTooLarge { .. } => "average_too_large",
            Self::EmptyLocale => "empty_locale",
            Self::WindowOverflow { .. } => "window_overflow",
        }
    }
}

/// Errors raised while writing generated books to an output format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("failed to write CSV export: {message}")]
    Csv {
        /// Description of the writer failure.
        message: String,
    },

    /// JSON serialisation failed.
    #[error("failed to write JSON export: {message}")]
    Json {
        /// Description of the serialisation failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn empty_page_formats_correctly() {
        assert_eq!(
            GenerationError::EmptyPage.to_string(),
            "pageSize must be greater than zero"
        );
    }

    #[test]
    fn invalid_average_formats_correctly() {
        let err = GenerationError::InvalidAverage {
            field: "likesAvg",
            value: "-1".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "likesAvg must be a finite, non-negative number, got -1"
        );
    }

    #[test]
    fn average_too_large_formats_correctly() {
        let err = GenerationError::AverageTooLarge {
            field: "reviewsAvg",
            value: "1000000000".to_owned(),
            max: "1000".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "reviewsAvg must not exceed 1000, got 1000000000"
        );
    }

    #[test]
    fn window_overflow_formats_correctly() {
        let err = GenerationError::WindowOverflow {
            page: u64::MAX,
            page_size: 20,
        };
        assert_eq!(
            err.to_string(),
            format!(
                "page {} with pageSize 20 exceeds the addressable record range",
                u64::MAX
            )
        );
    }

    #[rstest]
    #[case(GenerationError::EmptyPage, "pageSize", "empty_page")]
    #[case(GenerationError::EmptyLocale, "locale", "empty_locale")]
    #[case(
        GenerationError::InvalidAverage { field: "reviewsAvg", value: "NaN".to_owned() },
        "reviewsAvg",
        "invalid_average"
    )]
    #[case(
        GenerationError::AverageTooLarge {
            field: "likesAvg",
            value: "5000000000".to_owned(),
            max: "1000000".to_owned(),
        },
        "likesAvg",
        "average_too_large"
    )]
    #[case(
        GenerationError::WindowOverflow { page: 1, page_size: 1 },
        "page",
        "window_overflow"
    )]
    fn errors_name_their_field_and_code(
        #[case] err: GenerationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        assert_eq!(err.field(), field);
        assert_eq!(err.code(), code);
    }

    #[test]
    fn export_error_formats_correctly() {
        let err = ExportError::Csv {
            message: "broken pipe".to_owned(),
        };
        assert_eq!(err.to_string(), "failed to write CSV export: broken pipe");
    }
}
