//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use super::SectionOutcome;
use crate::types::PasswordAttributes;

/// Punctuation counted as a special character.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Scores character-class coverage.
///
/// `+1` each for uppercase, lowercase and digit, `+2` for a special character.
pub fn character_variety_section(attributes: &PasswordAttributes) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    if attributes.has_uppercase {
        outcome.add(1, None);
    } else {
        outcome.add(0, Some("Add uppercase letters (e.g., A, B, C)"));
    }
    if attributes.has_lowercase {
        outcome.add(1, None);
    } else {
        outcome.add(0, Some("Add lowercase letters (e.g., a, b, c)"));
    }
    if attributes.has_digit {
        outcome.add(1, None);
    } else {
        outcome.add(0, Some("Include numbers (e.g., 0-9)"));
    }
    if attributes.has_special {
        outcome.add(2, None);
    } else {
        outcome.add(0, Some("Add special characters (e.g., !@#$%^&*)"));
    }

    outcome
}
