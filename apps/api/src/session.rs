//! Session token carried by clients. Opaque and never validated; the server
//! only records it on request spans for log correlation.

use std::fmt;

use chrono::Utc;
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// `session_<unix millis>_<9 lowercase alphanumerics>`
    pub fn generate() -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(RANDOM_SUFFIX_LEN)
            .collect();
        SessionId(format!("session_{}_{suffix}", Utc::now().timestamp_millis()))
    }

    /// Uses the client's token when one was sent, otherwise mints a new one.
    pub fn resolve(provided: Option<String>) -> Self {
        match provided {
            Some(token) if !token.trim().is_empty() => SessionId(token),
            _ => SessionId::generate(),
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
