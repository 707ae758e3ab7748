//! Password scoring sections
//!
//! Each section scores a specific aspect of an attribute record and
//! explains what would improve it.

mod blacklist;
mod breach;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use breach::breach_section;
pub use length::length_section;
pub use pattern::{has_known_sequence, has_repeating_run, pattern_analysis_section, KNOWN_SEQUENCES};
pub use variety::{
    character_variety_section, has_digit, has_lowercase, has_special, has_uppercase,
    SPECIAL_CHARACTERS,
};

use crate::types::PasswordAttributes;

/// Points contributed by one section, plus improvement hints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOutcome {
    pub points: i32,
    pub hints: Vec<String>,
}

impl SectionOutcome {
    pub fn new(points: i32) -> Self {
        Self {
            points,
            hints: Vec::new(),
        }
    }

    pub fn add(&mut self, points: i32, hint: Option<&str>) {
        self.points += points;
        if let Some(hint) = hint {
            self.hints.push(hint.to_string());
        }
    }
}

/// Signature shared by all sections.
pub type Section = fn(&PasswordAttributes) -> SectionOutcome;
