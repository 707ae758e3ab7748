//! Password generator - random passwords that satisfy a character-class policy.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::sections::{has_digit, has_lowercase, has_special, has_uppercase};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// Special characters used for generation, a subset of what the analyzer accepts.
pub const SPECIALS: &str = "!@#$%^&*";

/// Attempt cap for [`Strategy::Rejection`].
pub const MAX_ATTEMPTS: usize = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid generator configuration: {0}")]
    InvalidConfiguration(String),
    #[error("No candidate satisfied the character policy after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

/// How candidates are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One character per selected class, the rest random, then shuffled.
    #[default]
    Construction,
    /// Uniform draws from the pool until every selected class is present.
    Rejection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    fn charset(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIALS,
        }
    }

    fn is_present(self, password: &str) -> bool {
        match self {
            CharClass::Upper => has_uppercase(password),
            CharClass::Lower => has_lowercase(password),
            CharClass::Digit => has_digit(password),
            CharClass::Special => has_special(password),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_special: bool,
    pub strategy: Strategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_special: true,
            strategy: Strategy::Construction,
        }
    }
}

impl GeneratorConfig {
    /// Advisory bounds for interactive callers; generation accepts any
    /// positive length.
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 32;

    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    pub fn has_valid_options(&self) -> bool {
        self.use_uppercase || self.use_lowercase || self.use_digits || self.use_special
    }

    fn selected_classes(&self) -> Vec<CharClass> {
        [
            (self.use_uppercase, CharClass::Upper),
            (self.use_lowercase, CharClass::Lower),
            (self.use_digits, CharClass::Digit),
            (self.use_special, CharClass::Special),
        ]
        .into_iter()
        .filter_map(|(selected, class)| selected.then_some(class))
        .collect()
    }
}

fn pick<R: Rng + ?Sized>(charset: &[char], rng: &mut R) -> char {
    charset[rng.gen_range(0..charset.len())]
}

fn construct<R: Rng + ?Sized>(
    classes: &[CharClass],
    pool: &[char],
    length: usize,
    rng: &mut R,
) -> String {
    let mut chars: Vec<char> = classes
        .iter()
        .map(|class| {
            let charset: Vec<char> = class.charset().chars().collect();
            pick(&charset, rng)
        })
        .collect();
    while chars.len() < length {
        chars.push(pick(pool, rng));
    }
    chars.shuffle(rng);
    chars.into_iter().collect()
}

fn reject<R: Rng + ?Sized>(
    classes: &[CharClass],
    pool: &[char],
    length: usize,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    for _attempt in 1..=MAX_ATTEMPTS {
        let candidate: String = (0..length).map(|_| pick(pool, rng)).collect();
        if classes.iter().all(|class| class.is_present(&candidate)) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Generated password after {} attempts", _attempt);
            return Ok(candidate);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::error!("Password generation exhausted after {} attempts", MAX_ATTEMPTS);
    Err(GeneratorError::GenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Generates a password of exactly `config.length` characters.
///
/// Every character comes from a selected class and every selected class
/// occurs at least once.
///
/// # Errors
///
/// - `InvalidConfiguration` if no class is selected, the length is zero, or
///   the length is smaller than the number of selected classes
/// - `GenerationExhausted` if the rejection strategy hits [`MAX_ATTEMPTS`]
pub fn generate_password<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    let classes = config.selected_classes();
    if classes.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(
            "at least one character class must be selected".to_string(),
        ));
    }
    if config.length == 0 {
        return Err(GeneratorError::InvalidConfiguration(
            "length must be positive".to_string(),
        ));
    }
    if config.length < classes.len() {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "length {} cannot hold {} required character classes",
            config.length,
            classes.len()
        )));
    }

    let pool: Vec<char> = classes
        .iter()
        .flat_map(|class| class.charset().chars())
        .collect();

    let password = match config.strategy {
        Strategy::Construction => construct(&classes, &pool, config.length, rng),
        Strategy::Rejection => reject(&classes, &pool, config.length, rng)?,
    };
    Ok(SecretString::new(password.into()))
}

/// [`generate_password`] with the thread-local RNG.
pub fn generate_password_default(config: &GeneratorConfig) -> Result<SecretString, GeneratorError> {
    generate_password(config, &mut rand::thread_rng())
}
