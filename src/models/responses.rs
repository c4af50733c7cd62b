//! Response DTOs for the cache server API

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// Whether the key was already present
    pub updated: bool,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, updated: bool) -> Self {
        let key = key.into();
        let verb = if updated { "updated" } else { "set" };
        Self {
            message: format!("Key '{}' {} successfully", key, verb),
            key,
            updated,
        }
    }
}

/// Response body for the CLEAR operation (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn new() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
