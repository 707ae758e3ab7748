//! Data types shared by the analyzer, scorer and evaluator.

use std::fmt;

/// Upper bound of the strength score.
pub const MAX_SCORE: u8 = 10;

/// Facts derived from a single password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordAttributes {
    /// Number of characters (not bytes).
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Some character occurs three or more times in a row.
    pub has_repeating_run: bool,
    /// Contains a predictable sequence such as `1234` or `qwerty`.
    pub has_known_sequence: bool,
    /// Matches an entry of the common-password list.
    pub is_common: bool,
    /// Times seen in the breach corpus. `None` means the lookup failed or
    /// was not performed, which is not the same as `Some(0)`.
    pub breach_count: Option<u64>,
}

/// Qualitative strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Weak,
    Moderate,
    Strong,
}

impl Rating {
    /// Maps a clamped score to its rating.
    pub fn from_score(score: u8) -> Self {
        match score {
            8.. => Rating::Strong,
            5..=7 => Rating::Moderate,
            _ => Rating::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Weak => "Weak",
            Rating::Moderate => "Moderate",
            Rating::Strong => "Strong",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score in `[0, MAX_SCORE]` together with its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub rating: Rating,
}

impl ScoreResult {
    /// Clamps a raw point total and derives the rating.
    pub fn from_points(points: i32) -> Self {
        let score = points.clamp(0, MAX_SCORE as i32) as u8;
        Self {
            score,
            rating: Rating::from_score(score),
        }
    }
}

/// Outcome of a full evaluation.
///
/// `attributes` and `score` are `None` only when the evaluation was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub attributes: Option<PasswordAttributes>,
    pub score: Option<ScoreResult>,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn rating(&self) -> Option<Rating> {
        self.score.map(|s| s.rating)
    }
}
