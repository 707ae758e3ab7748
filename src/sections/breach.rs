//! Breach section - warns about passwords seen in breach corpora.

use super::SectionOutcome;
use crate::types::PasswordAttributes;

/// Carries no points. A failed lookup (`None`) produces no hint.
pub fn breach_section(attributes: &PasswordAttributes) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    if let Some(count) = attributes.breach_count.filter(|&c| c > 0) {
        outcome.hints.push(format!(
            "This password appeared in {} known data breaches, do not use it",
            count
        ));
    }
    outcome
}
