//! Pattern analysis section - detects repetitive and predictable sequences.

use super::SectionOutcome;
use crate::types::PasswordAttributes;

/// Lowercase substrings that mark a password as predictable.
pub const KNOWN_SEQUENCES: &[&str] = &[
    "1234", "2345", "3456", "4567", "5678", "6789", "7890",
    "abcd", "bcde", "cdef", "defg", "efgh", "fghi", "ghij",
    "hijk", "ijkl", "jklm", "klmn", "lmno", "mnop", "nopq",
    "opqr", "pqrs", "qrst", "rstu", "stuv", "tuvw", "uvwx",
    "vwxy", "wxyz", "qwerty", "asdfgh", "zxcvbn", "poiuyt",
    "lkjhg", "mnbvc",
];

/// True if some character occurs three or more times in a row.
pub fn has_repeating_run(password: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in password.chars() {
        if Some(c) == previous {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Case-insensitive substring match against [`KNOWN_SEQUENCES`].
pub fn has_known_sequence(password: &str) -> bool {
    let lowered = password.to_lowercase();
    KNOWN_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

/// Penalizes repetition (`-2`) and known sequences (`-3`).
pub fn pattern_analysis_section(attributes: &PasswordAttributes) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    if attributes.has_repeating_run {
        outcome.add(-2, Some("Avoid repeating characters (e.g., aaa)"));
    }
    if attributes.has_known_sequence {
        outcome.add(-3, Some("Remove predictable sequences (e.g., 1234, qwerty)"));
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeating_run_needs_three() {
        assert!(!has_repeating_run("aabbccddee"));
        assert!(has_repeating_run("aaabbb"));
        assert!(has_repeating_run("xy111z"));
    }

    #[test]
    fn test_repeating_run_is_case_sensitive() {
        assert!(!has_repeating_run("aAa"));
    }

    #[test]
    fn test_repeating_run_short_input() {
        assert!(!has_repeating_run(""));
        assert!(!has_repeating_run("zz"));
    }

    #[test]
    fn test_known_sequence_substring() {
        assert!(has_known_sequence("myqwerty1"));
        assert!(has_known_sequence("QWERTY"));
        assert!(has_known_sequence("x7890y"));
        assert!(has_known_sequence("__MnOp__"));
    }

    #[test]
    fn test_known_sequence_absent() {
        assert!(!has_known_sequence("xk9mz"));
        assert!(!has_known_sequence(""));
        assert!(!has_known_sequence("Tr0ub4dor&3xtra"));
    }

    #[test]
    fn test_pattern_section_penalties() {
        let attributes = PasswordAttributes {
            has_repeating_run: true,
            has_known_sequence: true,
            ..Default::default()
        };
        let outcome = pattern_analysis_section(&attributes);
        assert_eq!(outcome.points, -5);
        assert_eq!(outcome.hints.len(), 2);
        assert!(outcome.hints[0].contains("repeating"));
        assert!(outcome.hints[1].contains("sequences"));
    }

    #[test]
    fn test_pattern_section_clean() {
        let outcome = pattern_analysis_section(&PasswordAttributes::default());
        assert_eq!(outcome, SectionOutcome::default());
    }
}
