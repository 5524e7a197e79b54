//! Generation requests and the absolute index windows they address.
//!
//! A request names a `(seed, locale)` space and a window into it. Records are
//! addressed by absolute index (`page * pageSize + offset + 1`), so the same
//! index always yields the same record whichever window reached it.

use std::ops::Range;

use crate::error::GenerationError;
use crate::locale::LocaleProfile;

/// Locale used when the caller supplies none.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Base seed used when the caller supplies none.
pub const DEFAULT_SEED: &str = "42";

/// Average likes per book used when the caller supplies none.
pub const DEFAULT_LIKES_AVG: f64 = 3.5;

/// Average reviews per book used when the caller supplies none.
pub const DEFAULT_REVIEWS_AVG: f64 = 2.0;

/// Largest accepted likes average.
///
/// Keeps every sampled like count well inside `u32`.
pub const MAX_LIKES_AVG: f64 = 1_000_000.0;

/// Largest accepted reviews average.
///
/// Bounds the reviews synthesised per book.
pub const MAX_REVIEWS_AVG: f64 = 1_000.0;

/// Page size used when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A request for one page of generated books.
///
/// # Example
///
/// ```
/// use book_data::GenerationRequest;
///
/// let request = GenerationRequest {
///     seed: "mossy-owl".to_owned(),
///     page: 2,
///     ..GenerationRequest::default()
/// };
/// let validated = request.validate().expect("valid request");
///
/// assert_eq!(validated.page_window().first(), Some(41));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Locale code selecting the template family, e.g. `en_US`, `fr`, `de`.
    pub locale: String,
    /// Opaque base seed hashed into every record seed.
    pub seed: String,
    /// Expected likes per book.
    pub likes_avg: f64,
    /// Expected reviews per book.
    pub reviews_avg: f64,
    /// Zero-based page number.
    pub page: u64,
    /// Records per page.
    pub page_size: u32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            seed: DEFAULT_SEED.to_owned(),
            likes_avg: DEFAULT_LIKES_AVG,
            reviews_avg: DEFAULT_REVIEWS_AVG,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GenerationRequest {
    /// Validates the request and resolves its locale profile and windows.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if:
    /// - `page_size` is zero
    /// - either average is negative, NaN, or infinite
    /// - an average exceeds [`MAX_LIKES_AVG`] or [`MAX_REVIEWS_AVG`]
    /// - the locale is empty
    /// - the page window addresses indices beyond `u64::MAX`
    pub fn validate(&self) -> Result<ValidatedRequest, GenerationError> {
        let locale = self.locale.trim();
        if locale.is_empty() {
            return Err(GenerationError::EmptyLocale);
        }
        check_average("likesAvg", self.likes_avg, MAX_LIKES_AVG)?;
        check_average("reviewsAvg", self.reviews_avg, MAX_REVIEWS_AVG)?;

        let page_window = PageWindow::page(self.page, self.page_size)?;
        let export_window = PageWindow::leading(self.page, self.page_size)?;

        Ok(ValidatedRequest {
            locale: locale.to_owned(),
            seed: self.seed.clone(),
            likes_avg: self.likes_avg,
            reviews_avg: self.reviews_avg,
            profile: LocaleProfile::lookup(locale),
            page_window,
            export_window,
        })
    }
}

fn check_average(field: &'static str, value: f64, max: f64) -> Result<(), GenerationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(GenerationError::InvalidAverage {
            field,
            value: value.to_string(),
        });
    }
    if value > max {
        return Err(GenerationError::AverageTooLarge {
            field,
            value: value.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// A request that passed validation.
///
/// Holds everything record synthesis needs, so generation itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    locale: String,
    seed: String,
    likes_avg: f64,
    reviews_avg: f64,
    profile: &'static LocaleProfile,
    page_window: PageWindow,
    export_window: PageWindow,
}

impl ValidatedRequest {
    /// Returns the trimmed locale code used for seed derivation.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the base seed.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Returns the expected likes per book.
    #[must_use]
    pub const fn likes_avg(&self) -> f64 {
        self.likes_avg
    }

    /// Returns the expected reviews per book.
    #[must_use]
    pub const fn reviews_avg(&self) -> f64 {
        self.reviews_avg
    }

    /// Returns the locale profile resolved for the request, after fallback.
    #[must_use]
    pub const fn profile(&self) -> &'static LocaleProfile {
        self.profile
    }

    /// Returns the window for the requested page.
    #[must_use]
    pub const fn page_window(&self) -> PageWindow {
        self.page_window
    }

    /// Returns the window covering every record up to the end of
    /// `page * pageSize`, used by bulk export.
    #[must_use]
    pub const fn export_window(&self) -> PageWindow {
        self.export_window
    }
}

/// A contiguous run of absolute record indices.
///
/// Indices are 1-based. An empty window has no first index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: u64,
    len: u64,
}

impl PageWindow {
    /// Builds the window for zero-based `page` of `page_size` records:
    /// `[page * page_size + 1, page * page_size + page_size]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyPage`] for a zero page size and
    /// [`GenerationError::WindowOverflow`] when the last index does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::PageWindow;
    ///
    /// let window = PageWindow::page(4, 10).expect("valid window");
    /// assert_eq!(window.indices(), 41..51);
    /// ```
    pub fn page(page: u64, page_size: u32) -> Result<Self, GenerationError> {
        if page_size == 0 {
            return Err(GenerationError::EmptyPage);
        }
        let size = u64::from(page_size);
        let offset = page
            .checked_mul(size)
            .ok_or(GenerationError::WindowOverflow { page, page_size })?;
        Self::checked(offset, size, page, page_size)
    }

    /// Builds the window of the first `page * page_size` records.
    ///
    /// This is the bulk export convention: `page` counts the pages the caller
    /// has already seen, so `page = 0` is an empty window.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyPage`] for a zero page size and
    /// [`GenerationError::WindowOverflow`] when the last index does not fit.
    pub fn leading(page: u64, page_size: u32) -> Result<Self, GenerationError> {
        if page_size == 0 {
            return Err(GenerationError::EmptyPage);
        }
        let len = page
            .checked_mul(u64::from(page_size))
            .ok_or(GenerationError::WindowOverflow { page, page_size })?;
        Self::checked(0, len, page, page_size)
    }

    fn checked(offset: u64, len: u64, page: u64, page_size: u32) -> Result<Self, GenerationError> {
        // The exclusive end must fit so `indices` never wraps.
        offset
            .checked_add(len)
            .and_then(|last| last.checked_add(1))
            .map(|_| Self {
                start: offset + 1,
                len,
            })
            .ok_or(GenerationError::WindowOverflow { page, page_size })
    }

    /// Returns the number of records in the window.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` when the window holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first absolute index, if any.
    #[must_use]
    pub const fn first(&self) -> Option<u64> {
        if self.len == 0 {
            None
        } else {
            Some(self.start)
        }
    }

    /// Returns the absolute index of the record at `offset` within the window.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::PageWindow;
    ///
    /// let window = PageWindow::page(2, 20).expect("valid window");
    /// assert_eq!(window.absolute_index(0), Some(41));
    /// assert_eq!(window.absolute_index(20), None);
    /// ```
    #[must_use]
    pub const fn absolute_index(&self, offset: u64) -> Option<u64> {
        if offset < self.len {
            Some(self.start + offset)
        } else {
            None
        }
    }

    /// Returns the absolute indices covered by the window, in order.
    #[must_use]
    pub const fn indices(&self) -> Range<u64> {
        self.start..self.start + self.len
    }
}
