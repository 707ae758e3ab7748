//! Breach lookup
//!
//! k-anonymity range query: only the first five hex characters of the
//! password's SHA-1 leave the process, the suffix is matched locally.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use std::fmt;
use std::sync::{mpsc, OnceLock};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Length of the hash prefix sent to the range endpoint.
pub const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Breach lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Breach lookup returned HTTP {0}")]
    Status(u16),
    #[error("Malformed range record: {0:?}")]
    Malformed(String),
    #[error("Breach lookup worker unavailable or timed out")]
    Unavailable,
}

/// Source of breach counts.
///
/// Implementations resolve every failure to `None`; `Some(0)` means the
/// password was confirmed absent.
pub trait BreachChecker: Send + Sync {
    fn breach_count(&self, password: &SecretString) -> Option<u64>;
}

impl<F> BreachChecker for F
where
    F: Fn(&SecretString) -> Option<u64> + Send + Sync,
{
    fn breach_count(&self, password: &SecretString) -> Option<u64> {
        self(password)
    }
}

/// Checker that never performs a lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBreachCheck;

impl BreachChecker for NoBreachCheck {
    fn breach_count(&self, _password: &SecretString) -> Option<u64> {
        None
    }
}

/// Queries `checker` for `password`.
pub fn lookup_breach_count(checker: &dyn BreachChecker, password: &SecretString) -> Option<u64> {
    checker.breach_count(password)
}

/// Uppercase SHA-1 of the password bytes, split into (prefix, suffix).
pub fn range_key(password: &str) -> (String, String) {
    let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
    let suffix = digest[PREFIX_LEN..].to_string();
    let mut prefix = digest;
    prefix.truncate(PREFIX_LEN);
    (prefix, suffix)
}

/// Finds `suffix` in a range response body of `SUFFIX:COUNT` lines.
///
/// Returns `Ok(0)` when no record matches.
pub fn parse_range_response(body: &str, suffix: &str) -> Result<u64, LookupError> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (hash, count) = line
            .split_once(':')
            .ok_or_else(|| LookupError::Malformed(line.to_string()))?;

        if hash.trim().eq_ignore_ascii_case(suffix) {
            return count
                .trim()
                .parse::<u64>()
                .map_err(|_| LookupError::Malformed(line.to_string()));
        }
    }
    Ok(0)
}

/// Extra wait on top of the request timeout before giving up on the worker.
const WORKER_GRACE: Duration = Duration::from_secs(1);

/// One range request handed to the lookup worker.
struct RangeRequest {
    url: String,
    timeout: Duration,
    reply: mpsc::Sender<Result<String, LookupError>>,
}

/// Client for the Have I Been Pwned range API.
///
/// The blocking HTTP client lives on a dedicated worker thread, started on
/// the first lookup and shared by every later one. It is built, used and
/// dropped there, so lookups are safe from inside an async runtime.
pub struct PwnedPasswords {
    base_url: String,
    timeout: Duration,
    worker: OnceLock<mpsc::Sender<RangeRequest>>,
}

impl fmt::Debug for PwnedPasswords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PwnedPasswords")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("worker_started", &self.worker.get().is_some())
            .finish()
    }
}

impl Clone for PwnedPasswords {
    /// The clone gets its own worker.
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            worker: OnceLock::new(),
        }
    }
}

impl Default for PwnedPasswords {
    fn default() -> Self {
        Self::new()
    }
}

impl PwnedPasswords {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.pwnedpasswords.com/range/";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Environment variable overriding the endpoint base.
    pub const BASE_URL_ENV: &'static str = "PWD_BREACH_API_URL";
    /// Environment variable overriding the timeout, in whole seconds.
    pub const TIMEOUT_ENV: &'static str = "PWD_BREACH_TIMEOUT_SECS";

    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            worker: OnceLock::new(),
        }
    }

    /// Defaults, overridden by `PWD_BREACH_API_URL` and `PWD_BREACH_TIMEOUT_SECS`.
    ///
    /// Unparseable or zero timeouts are ignored.
    pub fn from_env() -> Self {
        let mut client = Self::new();
        if let Ok(url) = std::env::var(Self::BASE_URL_ENV) {
            client.base_url = url;
        }
        if let Some(secs) = std::env::var(Self::TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&s| s > 0)
        {
            client.timeout = Duration::from_secs(secs);
        }
        client
    }

    /// The prefix is appended to this URL verbatim.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Single attempt, no retries.
    pub fn fetch_count(&self, password: &SecretString) -> Result<u64, LookupError> {
        let (prefix, suffix) = range_key(password.expose_secret());

        let (reply, response) = mpsc::channel();
        let request = RangeRequest {
            url: format!("{}{}", self.base_url, prefix),
            timeout: self.timeout,
            reply,
        };
        self.worker
            .get_or_init(spawn_worker)
            .send(request)
            .map_err(|_| LookupError::Unavailable)?;

        let body = response
            .recv_timeout(self.timeout.saturating_add(WORKER_GRACE))
            .map_err(|_| LookupError::Unavailable)??;
        parse_range_response(&body, &suffix)
    }
}

/// Starts the thread that owns the blocking client.
///
/// If the thread cannot be spawned the receiver is dropped with it, and
/// every request fails as `Unavailable`.
fn spawn_worker() -> mpsc::Sender<RangeRequest> {
    let (tx, rx) = mpsc::channel::<RangeRequest>();
    let spawned = thread::Builder::new()
        .name("pwd-meter-breach".to_string())
        .spawn(move || {
            let client = reqwest::blocking::Client::builder().build();
            for request in rx {
                let result = match &client {
                    Ok(client) => fetch_body(client, &request.url, request.timeout),
                    Err(_) => Err(LookupError::Unavailable),
                };
                let _ = request.reply.send(result);
            }
        });
    if let Err(_e) = spawned {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to start breach lookup worker: {}", _e);
    }
    tx
}

fn fetch_body(
    client: &reqwest::blocking::Client,
    url: &str,
    timeout: Duration,
) -> Result<String, LookupError> {
    let response = client.get(url).timeout(timeout).send()?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(LookupError::Status(status.as_u16()));
    }

    Ok(response.text()?)
}

impl BreachChecker for PwnedPasswords {
    fn breach_count(&self, password: &SecretString) -> Option<u64> {
        match self.fetch_count(password) {
            Ok(count) => Some(count),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach lookup failed: {}", _e);
                None
            }
        }
    }
}
