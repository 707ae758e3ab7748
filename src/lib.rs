//! Password strength meter library
//!
//! Scores passwords with a small set of heuristics (length, character
//! classes, repetition, known sequences, common-password list), looks them
//! up in a breach corpus, and generates random passwords that satisfy a
//! character-class policy.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Extra common-password file merged with the built-in list
//! - `PWD_BREACH_API_URL`: Range endpoint base
//!   (default: `https://api.pwnedpasswords.com/range/`)
//! - `PWD_BREACH_TIMEOUT_SECS`: Breach lookup timeout (default: 5)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{
//!     evaluate_password_strength, generate_password_default, Analyzer, GeneratorConfig,
//! };
//! use secrecy::SecretString;
//!
//! // Built-in common list, no breach lookup. `Analyzer::from_env()` adds both.
//! let analyzer = Analyzer::offline();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&analyzer, &password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&analyzer, &password);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Rating: {:?}", evaluation.rating());
//!
//! let generated = generate_password_default(&GeneratorConfig::default())
//!     .expect("at least one class selected");
//! ```

// Internal modules
mod analyzer;
mod blacklist;
mod breach;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use analyzer::Analyzer;
pub use blacklist::{blacklist_path, BlacklistError, CommonPasswords, BLACKLIST_PATH_ENV};
pub use breach::{
    lookup_breach_count, parse_range_response, range_key, BreachChecker, LookupError,
    NoBreachCheck, PwnedPasswords,
};
pub use evaluator::{evaluate_password_strength, feedback, score};
pub use generator::{
    generate_password, generate_password_default, GeneratorConfig, GeneratorError, Strategy,
    MAX_ATTEMPTS,
};
pub use sections::{
    has_digit, has_known_sequence, has_lowercase, has_repeating_run, has_special, has_uppercase,
    KNOWN_SEQUENCES, SPECIAL_CHARACTERS,
};
pub use types::{PasswordAttributes, PasswordEvaluation, Rating, ScoreResult, MAX_SCORE};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
