use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{calendar_api_error, DashResult};

/// Storage key under which the dashboard session keeps its bearer token
pub const AUTH_TOKEN_KEY: &str = "token";

/// Environment variable consulted before the on-disk store
const AUTH_TOKEN_ENV: &str = "CALDESK_TOKEN";

/// Looks up the session bearer token for API requests.
///
/// The token is owned by the external session layer; this store only reads
/// it, first from the process environment (session scope) and then from a
/// file named after the storage key in the config directory (local scope).
#[derive(Debug, Clone)]
pub struct TokenStore {
    storage_dir: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new("config")
    }
}

impl TokenStore {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    /// Get the bearer token, or an error if no session is present
    pub fn auth_token(&self) -> DashResult<String> {
        if let Ok(token) = env::var(AUTH_TOKEN_ENV) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                return Ok(token);
            }
        }

        let path = self.storage_dir.join(AUTH_TOKEN_KEY);
        if let Ok(contents) = fs::read_to_string(&path) {
            let token = contents.trim().to_string();
            if !token.is_empty() {
                return Ok(token);
            }
        }

        Err(calendar_api_error(
            "No auth token available. Please sign in again.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_an_error() {
        let store = TokenStore::new("/nonexistent/storage");
        // Only valid when CALDESK_TOKEN is not set in the test environment
        if env::var(AUTH_TOKEN_ENV).is_err() {
            assert!(store.auth_token().is_err());
        }
    }

    #[test]
    fn test_token_read_from_file() {
        let dir = std::env::temp_dir().join("caldesk-token-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(AUTH_TOKEN_KEY), "abc123\n").unwrap();

        let store = TokenStore::new(&dir);
        if env::var(AUTH_TOKEN_ENV).is_err() {
            assert_eq!(store.auth_token().unwrap(), "abc123");
        }

        fs::remove_dir_all(&dir).ok();
    }
}
