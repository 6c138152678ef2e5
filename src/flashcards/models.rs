//! Data models for the flashcard system

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::FlashcardError;

/// Ease factor given to a card that has never been reviewed
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// How well the answer was recalled, from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    Forgot,
    Hard,
    Good,
    Easy,
}

impl Quality {
    pub const ALL: [Quality; 4] = [Quality::Forgot, Quality::Hard, Quality::Good, Quality::Easy];

    /// Map UI rating (1-4: Forgot, Hard, Good, Easy)
    pub fn from_rating(rating: u8) -> Option<Self> {
        match rating {
            1 => Some(Self::Forgot),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forgot => "forgot",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(rating) = normalized.parse::<u8>() {
            return Self::from_rating(rating).ok_or_else(|| {
                FlashcardError::InvalidInput(format!("rating {} is outside 1-4", rating))
            });
        }

        match normalized.as_str() {
            "forgot" | "again" => Ok(Self::Forgot),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            _ => Err(FlashcardError::InvalidInput(format!(
                "unrecognized quality '{}'",
                s.trim()
            ))),
        }
    }
}

/// Where a card stands in the review schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    /// Never reviewed; always due
    Unreviewed,
    /// Reviewed at least once
    Reviewed {
        /// Days between the last review and the due date
        interval: u32,
        due_date: NaiveDate,
        /// Total reviews, at least 1
        reviews: u32,
    },
}

/// A question/answer card owned by a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FlashcardRecord", into = "FlashcardRecord")]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub mastered: bool,
    pub ease_factor: f64,
    pub state: ReviewState,
}

impl Flashcard {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question,
            answer,
            mastered: false,
            ease_factor: DEFAULT_EASE_FACTOR,
            state: ReviewState::Unreviewed,
        }
    }

    pub fn reviews(&self) -> u32 {
        match self.state {
            ReviewState::Unreviewed => 0,
            ReviewState::Reviewed { reviews, .. } => reviews,
        }
    }

    pub fn interval(&self) -> Option<u32> {
        match self.state {
            ReviewState::Unreviewed => None,
            ReviewState::Reviewed { interval, .. } => Some(interval),
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        match self.state {
            ReviewState::Unreviewed => None,
            ReviewState::Reviewed { due_date, .. } => Some(due_date),
        }
    }

    pub fn is_reviewed(&self) -> bool {
        matches!(self.state, ReviewState::Reviewed { .. })
    }

    /// Check if the card should be presented on `as_of`
    pub fn is_due(&self, as_of: NaiveDate) -> bool {
        match self.state {
            ReviewState::Unreviewed => true,
            ReviewState::Reviewed { due_date, .. } => due_date <= as_of,
        }
    }
}

/// Stored shape of a flashcard, with the schedule as optional fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlashcardRecord {
    id: String,
    question: String,
    answer: String,
    #[serde(default)]
    mastered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ease_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reviews: Option<u32>,
}

impl TryFrom<FlashcardRecord> for Flashcard {
    type Error = FlashcardError;

    fn try_from(record: FlashcardRecord) -> Result<Self, Self::Error> {
        let reviews = record.reviews.unwrap_or(0);
        let state = match (record.interval, record.due_date) {
            (Some(interval), Some(due_date)) => ReviewState::Reviewed {
                interval,
                due_date,
                reviews: reviews.max(1),
            },
            _ if reviews > 0 => {
                return Err(FlashcardError::InvalidRecord {
                    id: record.id,
                    reason: format!("{} reviews but no interval or due date", reviews),
                });
            }
            _ => ReviewState::Unreviewed,
        };

        let ease_factor = match record.ease_factor {
            Some(ef) if ef.is_finite() => ef.max(MIN_EASE_FACTOR),
            _ => DEFAULT_EASE_FACTOR,
        };

        Ok(Self {
            id: record.id,
            question: record.question,
            answer: record.answer,
            mastered: record.mastered,
            ease_factor,
            state,
        })
    }
}

impl From<Flashcard> for FlashcardRecord {
    fn from(card: Flashcard) -> Self {
        let (interval, due_date, reviews) = match card.state {
            ReviewState::Unreviewed => (None, None, Some(0)),
            ReviewState::Reviewed {
                interval,
                due_date,
                reviews,
            } => (Some(interval), Some(due_date), Some(reviews)),
        };

        Self {
            id: card.id,
            question: card.question,
            answer: card.answer,
            mastered: card.mastered,
            interval,
            ease_factor: Some(card.ease_factor),
            due_date,
            reviews,
        }
    }
}

/// Counts over all cards as of a given day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_notes: usize,
    pub total_cards: usize,
    pub unreviewed_cards: usize,
    pub due_cards: usize,
    pub mastered_cards: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_parsing() {
        assert_eq!("Good".parse::<Quality>().unwrap(), Quality::Good);
        assert_eq!(" again ".parse::<Quality>().unwrap(), Quality::Forgot);
        assert_eq!("4".parse::<Quality>().unwrap(), Quality::Easy);
        assert!(Quality::Forgot < Quality::Easy);

        assert!(matches!(
            "perfect".parse::<Quality>(),
            Err(FlashcardError::InvalidInput(_))
        ));
        assert!(matches!("0".parse::<Quality>(), Err(FlashcardError::InvalidInput(_))));
    }

    #[test]
    fn test_decode_legacy_unreviewed_card() {
        let json = r#"{"id":"1700000000000","question":"Ohm's law?","answer":"V = IR","mastered":false}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();

        assert_eq!(card.state, ReviewState::Unreviewed);
        assert_eq!(card.ease_factor, DEFAULT_EASE_FACTOR);
        assert!(card.is_due(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
    }

    #[test]
    fn test_decode_reviewed_card() {
        let json = r#"{"id":"c1","question":"q","answer":"a","mastered":true,
            "interval":30,"easeFactor":2.65,"dueDate":"2026-11-18","reviews":4}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();

        assert_eq!(card.reviews(), 4);
        assert_eq!(card.interval(), Some(30));
        assert_eq!(card.due_date(), NaiveDate::from_ymd_opt(2026, 11, 18));
        assert!(!card.is_due(NaiveDate::from_ymd_opt(2026, 11, 17).unwrap()));
        assert!(card.is_due(NaiveDate::from_ymd_opt(2026, 11, 18).unwrap()));
    }

    #[test]
    fn test_decode_schedule_with_zero_reviews_counts_one() {
        let json = r#"{"id":"c1","question":"q","answer":"a","mastered":false,
            "interval":3,"dueDate":"2026-10-22","reviews":0}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();

        assert_eq!(
            card.state,
            ReviewState::Reviewed {
                interval: 3,
                due_date: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
                reviews: 1,
            }
        );
    }

    #[test]
    fn test_decode_rejects_reviews_without_schedule() {
        let json = r#"{"id":"c1","question":"q","answer":"a","mastered":false,"reviews":2}"#;
        let err = serde_json::from_str::<Flashcard>(json).unwrap_err();
        assert!(err.to_string().contains("2 reviews"));
    }

    #[test]
    fn test_encode_uses_camel_case_fields() {
        let mut card = Flashcard::new("q".to_string(), "a".to_string());
        card.state = ReviewState::Reviewed {
            interval: 3,
            due_date: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
            reviews: 1,
        };

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["easeFactor"], 2.5);
        assert_eq!(value["dueDate"], "2026-10-22");
        assert_eq!(value["reviews"], 1);

        let unreviewed = serde_json::to_value(Flashcard::new("q".into(), "a".into())).unwrap();
        assert!(unreviewed.get("dueDate").is_none());
        assert_eq!(unreviewed["reviews"], 0);
    }
}
