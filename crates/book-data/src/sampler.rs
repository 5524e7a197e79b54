//! Expectation sampling: fractional averages to integer counts.
//!
//! A count for average `a` is `floor(a)`, plus one with probability
//! `a - floor(a)`. Over many records the mean converges to `a`. Whole-number
//! averages consume no randomness at all.
//!
//! Likes and reviews draw from separate streams of the record seed. The review
//! count and the review bodies are also split, so raising the review average
//! only appends reviews and never rewrites the ones already shown.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::book::Review;
use crate::locale::LocaleProfile;
use crate::seed::{RecordSeed, SeedStream, SeededRng};

/// Sentences joined into each review body.
const SENTENCES_PER_REVIEW: usize = 2;

/// Samples the like count for a record.
///
/// Requests validated by [`crate::GenerationRequest::validate`] never pass
/// an average above [`crate::MAX_LIKES_AVG`].
///
/// # Example
///
/// ```
/// use book_data::{RecordSeed, sample_count};
///
/// let seed = RecordSeed::new(7);
/// assert_eq!(sample_count(seed, 0.0), 0);
/// assert_eq!(sample_count(seed, 4.0), 4);
/// assert!((2..=3).contains(&sample_count(seed, 2.5)));
/// ```
#[must_use]
pub fn sample_count(seed: RecordSeed, average: f64) -> u32 {
    round_expectation(&mut seed.rng(SeedStream::Likes), average)
}

/// Samples the review count for a record and synthesises that many reviews.
///
/// Each review gets a reviewer name, then its body: every review template of
/// the profile is filled, the candidates are shuffled, and the first two are
/// joined by a space.
///
/// # Example
///
/// ```
/// use book_data::{LocaleProfile, RecordSeed, synthesize_reviews};
///
/// let reviews = synthesize_reviews(RecordSeed::new(7), LocaleProfile::lookup("fr"), 2.0);
/// assert_eq!(reviews.len(), 2);
/// ```
#[must_use]
pub fn synthesize_reviews(seed: RecordSeed, profile: &LocaleProfile, average: f64) -> Vec<Review> {
    let count = round_expectation(&mut seed.rng(SeedStream::ReviewCount), average);
    let mut rng = seed.rng(SeedStream::ReviewText);
    (0..count)
        .map(|_| synthesize_review(&mut rng, profile))
        .collect()
}

fn synthesize_review(rng: &mut SeededRng, profile: &LocaleProfile) -> Review {
    let reviewer = profile.lexicon().person_name(rng);
    let mut sentences = profile.review_sentences(rng);
    sentences.shuffle(rng);
    sentences.truncate(SENTENCES_PER_REVIEW);
    Review {
        text: sentences.join(" "),
        reviewer,
    }
}

/// Rounds `average` to `floor(average)` or `floor(average) + 1`.
///
/// Non-finite and non-positive averages yield zero. Counts saturate at
/// `u32::MAX` for averages beyond it; validation caps averages at
/// [`crate::MAX_LIKES_AVG`] and [`crate::MAX_REVIEWS_AVG`], so only direct
/// callers can reach either branch.
#[expect(
    clippy::float_arithmetic,
    reason = "fractional part of the average drives the rounding probability"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "floor of a finite, positive average; `as` saturates at u32::MAX"
)]
fn round_expectation(rng: &mut SeededRng, average: f64) -> u32 {
    if !average.is_finite() || average <= 0.0 {
        return 0;
    }
    let whole = average.floor();
    let fraction = average - whole;
    let base = whole as u32;
    if fraction > 0.0 && rng.random::<f64>() < fraction {
        base.saturating_add(1)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn non_positive_averages_yield_zero(#[case] average: f64) {
        for raw in 0..100 {
            assert_eq!(sample_count(RecordSeed::new(raw), average), 0);
        }
    }

    #[rstest]
    #[case(1.0, 1)]
    #[case(2.0, 2)]
    #[case(10.0, 10)]
    fn whole_averages_are_exact(#[case] average: f64, #[case] expected: u32) {
        for raw in 0..100 {
            assert_eq!(sample_count(RecordSeed::new(raw), average), expected);
        }
    }

    #[test]
    fn the_likes_ceiling_samples_exactly() {
        assert_eq!(
            sample_count(RecordSeed::new(1), crate::MAX_LIKES_AVG),
            1_000_000
        );
    }

    #[test]
    fn whole_averages_consume_no_randomness() {
        let mut rng = RecordSeed::new(5).rng(SeedStream::Likes);
        let mut untouched = RecordSeed::new(5).rng(SeedStream::Likes);

        assert_eq!(round_expectation(&mut rng, 3.0), 3);
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[rstest]
    #[case(0.4, 0)]
    #[case(2.5, 2)]
    #[case(3.9, 3)]
    fn fractional_averages_round_to_a_neighbour(#[case] average: f64, #[case] floor: u32) {
        let mut seen = [false; 2];
        for raw in 0..200 {
            let count = sample_count(RecordSeed::new(raw), average);
            assert!(count == floor || count == floor + 1, "count {count}");
            if let Some(flag) = seen.get_mut(usize::from(count > floor)) {
                *flag = true;
            }
        }
        assert_eq!(seen, [true, true], "both neighbours should appear");
    }

    #[test]
    fn sampled_mean_converges_to_the_average() {
        // 10 000 draws at 2.3 should total within 2.25..=2.35 of the mean.
        let total: u64 = (0..10_000)
            .map(|raw| u64::from(sample_count(RecordSeed::new(raw), 2.3)))
            .sum();
        assert!((22_500..=23_500).contains(&total), "total {total}");
    }

    #[test]
    fn review_count_follows_the_average() {
        let profile = LocaleProfile::fallback();
        assert!(synthesize_reviews(RecordSeed::new(1), profile, 0.0).is_empty());
        assert_eq!(synthesize_reviews(RecordSeed::new(1), profile, 3.0).len(), 3);
    }

    #[rstest]
    #[case("en_US")]
    #[case("fr")]
    #[case("de")]
    fn reviews_have_a_reviewer_and_two_sentences(#[case] locale: &str) {
        let profile = LocaleProfile::lookup(locale);
        let reviews = synthesize_reviews(RecordSeed::new(99), profile, 4.0);

        assert_eq!(reviews.len(), 4);
        for review in reviews {
            assert!(!review.reviewer.trim().is_empty());
            assert!(!review.text.contains('{'), "unfilled slot: {}", review.text);
            assert!(review.text.contains(' '));
        }
    }

    #[test]
    fn raising_the_review_average_only_appends() {
        let profile = LocaleProfile::fallback();
        let seed = RecordSeed::new(2024);
        let fewer = synthesize_reviews(seed, profile, 2.0);
        let more = synthesize_reviews(seed, profile, 5.0);

        assert_eq!(more.len(), 5);
        assert_eq!(more.get(..fewer.len()), Some(fewer.as_slice()));
    }

    #[test]
    fn likes_do_not_depend_on_reviews() {
        let seed = RecordSeed::new(77);
        let likes = sample_count(seed, 3.5);
        let _reviews = synthesize_reviews(seed, LocaleProfile::fallback(), 9.5);
        assert_eq!(sample_count(seed, 3.5), likes);
    }
}
