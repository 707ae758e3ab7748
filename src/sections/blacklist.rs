//! Blacklist section - flags passwords from the common-password list.

use super::SectionOutcome;
use crate::types::PasswordAttributes;

/// Adds no points; the evaluator forces the score to zero for common passwords.
pub fn blacklist_section(attributes: &PasswordAttributes) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    if attributes.is_common {
        outcome.add(0, Some("Avoid common passwords (e.g., 'password')"));
    }
    outcome
}
