//! Length section - rewards long passwords, penalizes very short ones.

use super::SectionOutcome;
use crate::types::PasswordAttributes;

const RECOMMENDED_LENGTH: usize = 12;

fn length_points(length: usize) -> i32 {
    match length {
        16.. => 4,
        12..=15 => 3,
        8..=11 => 2,
        6..=7 => 0,
        _ => -1,
    }
}

/// Scores the password length.
///
/// `+4` from 16 characters, `+3` from 12, `+2` from 8, `-1` below 6.
pub fn length_section(attributes: &PasswordAttributes) -> SectionOutcome {
    let mut outcome = SectionOutcome::new(length_points(attributes.length));
    if attributes.length < RECOMMENDED_LENGTH {
        outcome.hints.push(format!(
            "Increase length to at least {} characters (currently {})",
            RECOMMENDED_LENGTH, attributes.length
        ));
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_length(length: usize) -> PasswordAttributes {
        PasswordAttributes {
            length,
            ..Default::default()
        }
    }

    #[test]
    fn test_length_section_thresholds() {
        assert_eq!(length_section(&with_length(0)).points, -1);
        assert_eq!(length_section(&with_length(5)).points, -1);
        assert_eq!(length_section(&with_length(6)).points, 0);
        assert_eq!(length_section(&with_length(7)).points, 0);
        assert_eq!(length_section(&with_length(8)).points, 2);
        assert_eq!(length_section(&with_length(11)).points, 2);
        assert_eq!(length_section(&with_length(12)).points, 3);
        assert_eq!(length_section(&with_length(15)).points, 3);
        assert_eq!(length_section(&with_length(16)).points, 4);
        assert_eq!(length_section(&with_length(200)).points, 4);
    }

    #[test]
    fn test_length_section_too_short_hint() {
        let outcome = length_section(&with_length(9));
        assert_eq!(
            outcome.hints,
            vec!["Increase length to at least 12 characters (currently 9)".to_string()]
        );
    }

    #[test]
    fn test_length_section_exactly_recommended() {
        let outcome = length_section(&with_length(12));
        assert!(outcome.hints.is_empty());
    }
}
