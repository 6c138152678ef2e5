//! Spaced repetition scheduling
//!
//! A simplified SM-2 variant driven by four quality ratings:
//! - Forgot: interval resets to 1 day, ease drops by 0.2, mastery is cleared
//! - Hard: interval grows by ease x 0.85, ease drops by 0.15
//! - Good: interval grows by ease, ease unchanged
//! - Easy: interval grows by ease x 1.3, ease rises by 0.15
//!
//! The first successful review uses a fixed seed interval instead
//! (Hard 1d, Good 3d, Easy 5d). Ease never goes below 1.3.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::errors::{FlashcardError, Result};
use super::models::{Flashcard, Quality, ReviewState, MIN_EASE_FACTOR};

/// Ease lost on a forgotten card
const FORGOT_EASE_PENALTY: f64 = 0.2;

fn default_mastery_threshold_days() -> u32 {
    21
}

/// Tunable scheduler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// A card is mastered once its interval exceeds this many days
    #[serde(default = "default_mastery_threshold_days")]
    pub mastery_threshold_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            mastery_threshold_days: default_mastery_threshold_days(),
        }
    }
}

impl Quality {
    /// Interval for the first successful review
    fn seed_interval(self) -> u32 {
        match self {
            Quality::Forgot | Quality::Hard => 1,
            Quality::Good => 3,
            Quality::Easy => 5,
        }
    }

    fn interval_multiplier(self) -> f64 {
        match self {
            Quality::Forgot => 0.0,
            Quality::Hard => 0.85,
            Quality::Good => 1.0,
            Quality::Easy => 1.3,
        }
    }

    fn ease_delta(self) -> f64 {
        match self {
            Quality::Forgot => -FORGOT_EASE_PENALTY,
            Quality::Hard => -0.15,
            Quality::Good => 0.0,
            Quality::Easy => 0.15,
        }
    }
}

fn clamp_ease(ease_factor: f64) -> f64 {
    ease_factor.max(MIN_EASE_FACTOR)
}

fn add_days(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Calculate the card's state after a review on `today`
///
/// Pure: the input card is left untouched and the same inputs always give
/// the same result.
pub fn review(card: &Flashcard, quality: Quality, today: NaiveDate, config: &SchedulerConfig) -> Flashcard {
    let mut next = card.clone();

    let interval = match quality {
        Quality::Forgot => {
            next.mastered = false;
            1
        }
        _ => {
            let interval = match card.state {
                ReviewState::Unreviewed => quality.seed_interval(),
                ReviewState::Reviewed { interval, .. } => {
                    let scaled = f64::from(interval) * card.ease_factor * quality.interval_multiplier();
                    // Floor at one day, also for a stored zero interval
                    (scaled.round() as u32).max(1)
                }
            };
            if interval > config.mastery_threshold_days {
                next.mastered = true;
            }
            interval
        }
    };

    next.ease_factor = clamp_ease(card.ease_factor + quality.ease_delta());
    next.state = ReviewState::Reviewed {
        interval,
        due_date: add_days(today, interval),
        reviews: card.reviews().saturating_add(1),
    };

    next
}

/// Review with an untyped quality signal, as received from a UI
pub fn review_input(
    card: Option<&Flashcard>,
    quality: &str,
    today: NaiveDate,
    config: &SchedulerConfig,
) -> Result<Flashcard> {
    let card = card.ok_or_else(|| FlashcardError::InvalidInput("no card to review".to_string()))?;
    let quality: Quality = quality.parse()?;
    Ok(review(card, quality, today, config))
}

/// Calculate the interval each quality rating would give, in
/// Forgot, Hard, Good, Easy order
pub fn preview_intervals(card: &Flashcard, today: NaiveDate, config: &SchedulerConfig) -> [u32; 4] {
    Quality::ALL.map(|quality| review(card, quality, today, config).interval().unwrap_or(0))
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: u32) -> String {
    if days == 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_ease(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "ease {} != {}", actual, expected);
    }

    fn new_card() -> Flashcard {
        Flashcard::new("What is a diode?".to_string(), "A one-way valve for current".to_string())
    }

    fn reviewed_card(interval: u32, ease_factor: f64, reviews: u32) -> Flashcard {
        let mut card = new_card();
        card.ease_factor = ease_factor;
        card.state = ReviewState::Reviewed {
            interval,
            due_date: day(2026, 10, 1),
            reviews,
        };
        card
    }

    #[test]
    fn test_first_review_seeds() {
        let today = day(2026, 10, 19);
        let config = SchedulerConfig::default();

        let good = review(&new_card(), Quality::Good, today, &config);
        assert_eq!(good.interval(), Some(3));
        assert_eq!(good.due_date(), Some(day(2026, 10, 22)));
        assert_eq!(good.reviews(), 1);

        assert_eq!(review(&new_card(), Quality::Hard, today, &config).interval(), Some(1));
        assert_eq!(review(&new_card(), Quality::Easy, today, &config).interval(), Some(5));
    }

    #[test]
    fn test_easy_review_grows_interval_and_masters() {
        let today = day(2026, 10, 19);
        let card = reviewed_card(10, 2.5, 3);

        let result = review(&card, Quality::Easy, today, &SchedulerConfig::default());

        // round(10 * 2.5 * 1.3) = round(32.5) = 33
        assert_eq!(result.interval(), Some(33));
        assert_ease(result.ease_factor, 2.65);
        assert_eq!(result.due_date(), Some(day(2026, 11, 21)));
        assert_eq!(result.reviews(), 4);
        assert!(result.mastered);
    }

    #[test]
    fn test_hard_and_good_reviews() {
        let today = day(2026, 10, 19);
        let card = reviewed_card(10, 2.5, 3);
        let config = SchedulerConfig::default();

        let hard = review(&card, Quality::Hard, today, &config);
        // round(10 * 2.5 * 0.85) = round(21.25) = 21, not above the threshold
        assert_eq!(hard.interval(), Some(21));
        assert_ease(hard.ease_factor, 2.35);
        assert!(!hard.mastered);

        let good = review(&card, Quality::Good, today, &config);
        assert_eq!(good.interval(), Some(25));
        assert_eq!(good.ease_factor, 2.5);
        assert!(good.mastered);
    }

    #[test]
    fn test_good_keeps_ease_exactly() {
        let card = reviewed_card(10, 2.123, 2);
        let result = review(&card, Quality::Good, day(2026, 10, 19), &SchedulerConfig::default());

        assert_eq!(result.ease_factor, 2.123);
        // round(10 * 2.123) = 21
        assert_eq!(result.interval(), Some(21));
    }

    #[test]
    fn test_zero_interval_moves_at_least_one_day() {
        let today = day(2026, 10, 19);
        let card = reviewed_card(0, 2.5, 2);

        let result = review(&card, Quality::Good, today, &SchedulerConfig::default());
        assert_eq!(result.interval(), Some(1));
        assert_eq!(result.due_date(), Some(day(2026, 10, 20)));
    }

    #[test]
    fn test_forgot_resets() {
        let today = day(2026, 10, 19);
        let mut card = reviewed_card(60, 2.5, 8);
        card.mastered = true;

        let result = review(&card, Quality::Forgot, today, &SchedulerConfig::default());

        assert_eq!(result.interval(), Some(1));
        assert_eq!(result.due_date(), Some(day(2026, 10, 20)));
        assert_ease(result.ease_factor, 2.3);
        assert_eq!(result.reviews(), 9);
        assert!(!result.mastered);
    }

    #[test]
    fn test_forgot_on_new_card() {
        let result = review(&new_card(), Quality::Forgot, day(2026, 10, 19), &SchedulerConfig::default());
        assert_eq!(result.interval(), Some(1));
        assert_eq!(result.reviews(), 1);
        assert_ease(result.ease_factor, 2.3);
    }

    #[test]
    fn test_ease_factor_minimum() {
        let today = day(2026, 10, 19);
        let config = SchedulerConfig::default();
        let mut card = reviewed_card(10, 1.4, 5);

        for quality in [Quality::Hard, Quality::Forgot, Quality::Hard, Quality::Forgot, Quality::Hard] {
            card = review(&card, quality, today, &config);
            assert!(card.ease_factor >= MIN_EASE_FACTOR);
        }
        assert_eq!(card.ease_factor, MIN_EASE_FACTOR);
    }

    #[test]
    fn test_mastery_threshold_is_configurable() {
        let config = SchedulerConfig {
            mastery_threshold_days: 2,
        };
        let result = review(&new_card(), Quality::Good, day(2026, 10, 19), &config);
        assert!(result.mastered);
    }

    #[test]
    fn test_review_is_pure() {
        let card = reviewed_card(4, 2.0, 2);
        let today = day(2026, 10, 19);
        let config = SchedulerConfig::default();

        let first = review(&card, Quality::Good, today, &config);
        let second = review(&card, Quality::Good, today, &config);
        assert_eq!(first, second);
        assert_eq!(card.reviews(), 2);
    }

    #[test]
    fn test_review_input_errors() {
        let today = day(2026, 10, 19);
        let config = SchedulerConfig::default();
        let card = new_card();

        assert!(matches!(
            review_input(None, "good", today, &config),
            Err(FlashcardError::InvalidInput(_))
        ));
        assert!(matches!(
            review_input(Some(&card), "meh", today, &config),
            Err(FlashcardError::InvalidInput(_))
        ));

        let result = review_input(Some(&card), "Easy", today, &config).unwrap();
        assert_eq!(result.interval(), Some(5));
    }

    #[test]
    fn test_preview_intervals() {
        let today = day(2026, 10, 19);
        let config = SchedulerConfig::default();

        assert_eq!(preview_intervals(&new_card(), today, &config), [1, 1, 3, 5]);
        assert_eq!(preview_intervals(&reviewed_card(10, 2.5, 3), today, &config), [1, 21, 25, 33]);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(5), "5d");
        assert_eq!(format_interval(7), "1w");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(90), "3mo");
        assert_eq!(format_interval(365), "1y");
        assert_eq!(format_interval(730), "2y");
    }
}
