//! Request DTOs for the cache server API

use serde::Deserialize;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}
