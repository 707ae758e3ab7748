//! Common password list
//!
//! Built-in denylist, optionally extended from an external file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra common-password file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "password123", "qwerty", "12345678", "111111",
    "abc123", "password1", "123123", "admin", "welcome", "letmein",
    "monkey", "sunshine", "master", "hello", "freedom", "whatever",
    "qazwsx", "trustno1", "dragon", "baseball", "superman", "passw0rd",
    "p@ssw0rd", "p@ssword",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of passwords considered too common to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonPasswords {
    /// The built-in list only.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_COMMON_PASSWORDS
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }

    /// Built-in list, extended from `PWD_BLACKLIST_PATH` when it is set.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set and the file:
    /// - does not exist
    /// - cannot be read
    /// - is empty
    pub fn from_env() -> Result<Self, BlacklistError> {
        let mut list = Self::builtin();
        if let Some(path) = blacklist_path() {
            list.extend_from_path(path)?;
        }
        Ok(list)
    }

    /// Adds every non-blank line of `path` to the list.
    ///
    /// Returns the number of entries read from the file.
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let loaded: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        let count = loaded.len();
        self.entries.extend(loaded);

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist extended: {} passwords from {:?}", count, path);

        Ok(count)
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }
}

/// Returns the extra blacklist path from `PWD_BLACKLIST_PATH`, if set.
pub fn blacklist_path() -> Option<PathBuf> {
    std::env::var(BLACKLIST_PATH_ENV).ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_builtin_contains_password() {
        let list = CommonPasswords::builtin();
        assert!(list.contains("password"));
        assert!(list.contains("PASSWORD"));
        assert!(list.contains("P@ssw0rd"));
    }

    #[test]
    fn test_builtin_rejects_uncommon() {
        let list = CommonPasswords::builtin();
        assert!(!list.contains("veryuncommonpassword987"));
        assert!(!list.contains("password "));
    }

    #[test]
    #[serial]
    fn test_blacklist_path_unset() {
        remove_env(BLACKLIST_PATH_ENV);
        assert_eq!(blacklist_path(), None);
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        assert_eq!(blacklist_path(), Some(PathBuf::from(custom_path)));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_without_file_is_builtin() {
        remove_env(BLACKLIST_PATH_ENV);
        let list = CommonPasswords::from_env().expect("builtin list");
        assert_eq!(list, CommonPasswords::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        match CommonPasswords::from_env() {
            Err(BlacklistError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_merges_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Hunter2").expect("Failed to write");
        writeln!(temp_file, "  correcthorse  ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env(BLACKLIST_PATH_ENV, path);

        let list = CommonPasswords::from_env().expect("list with file");
        assert!(list.contains("hunter2"));
        assert!(list.contains("CorrectHorse"));
        assert!(list.contains("password"));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    fn test_extend_from_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write blank content");

        let mut list = CommonPasswords::builtin();
        let result = list.extend_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
        assert_eq!(list, CommonPasswords::builtin());
    }

    #[test]
    fn test_extend_returns_count() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "alpha1").expect("Failed to write");
        writeln!(temp_file, "ALPHA1").expect("Failed to write");
        writeln!(temp_file, "beta2").expect("Failed to write");

        let mut list = CommonPasswords::from_iter(["gamma"]);
        let count = list.extend_from_path(temp_file.path()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(list.len(), 3);
    }
}
