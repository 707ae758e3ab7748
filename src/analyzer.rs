//! Password analyzer - derives the attribute record of a password.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::{BlacklistError, CommonPasswords};
use crate::breach::{BreachChecker, NoBreachCheck, PwnedPasswords};
use crate::sections::{
    has_digit, has_known_sequence, has_lowercase, has_repeating_run, has_special, has_uppercase,
};
use crate::types::PasswordAttributes;

/// Computes [`PasswordAttributes`] for passwords.
///
/// Holds the common-password list and the breach checker; both are fixed
/// for the lifetime of the analyzer.
pub struct Analyzer {
    common: CommonPasswords,
    checker: Box<dyn BreachChecker>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("common_passwords", &self.common.len())
            .finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::offline()
    }
}

impl Analyzer {
    pub fn new(common: CommonPasswords, checker: impl BreachChecker + 'static) -> Self {
        Self {
            common,
            checker: Box::new(checker),
        }
    }

    /// Built-in common list, no breach lookup.
    pub fn offline() -> Self {
        Self::new(CommonPasswords::builtin(), NoBreachCheck)
    }

    /// Common list from `PWD_BLACKLIST_PATH` and a range-API client
    /// configured from the environment.
    pub fn from_env() -> Result<Self, BlacklistError> {
        Ok(Self::new(CommonPasswords::from_env()?, PwnedPasswords::from_env()))
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Every attribute except `breach_count`, which is left `None`.
    pub fn analyze_local(&self, password: &SecretString) -> PasswordAttributes {
        let pwd = password.expose_secret();
        PasswordAttributes {
            length: pwd.chars().count(),
            has_uppercase: has_uppercase(pwd),
            has_lowercase: has_lowercase(pwd),
            has_digit: has_digit(pwd),
            has_special: has_special(pwd),
            has_repeating_run: has_repeating_run(pwd),
            has_known_sequence: has_known_sequence(pwd),
            is_common: self.common.contains(pwd),
            breach_count: None,
        }
    }

    /// Queries the breach checker. Never fails; an unavailable lookup is `None`.
    pub fn breach_count(&self, password: &SecretString) -> Option<u64> {
        self.checker.breach_count(password)
    }

    /// Full attribute record, including the breach lookup.
    pub fn analyze(&self, password: &SecretString) -> PasswordAttributes {
        let mut attributes = self.analyze_local(password);
        attributes.breach_count = self.breach_count(password);
        attributes
    }
}
