//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, GetResponse, HealthResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lock-guarded LRU cache of string keys and values
    pub cache: SharedCache<String, String>,
}

impl AppState {
    /// Creates a new AppState around an existing shared cache.
    pub fn new(cache: SharedCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(SharedCache::new(config.capacity)?))
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let updated = state.cache.set(req.key.clone(), req.value).await;
    debug!(key = %req.key, updated, "Set key");

    Ok(Json(SetResponse::new(req.key, updated)))
}

/// Handler for GET /get/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(key.as_str()).await {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear().await;
    Json(ClearResponse::new())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(capacity: usize) -> AppState {
        AppState::new(SharedCache::new(capacity).unwrap())
    }

    fn set_request(key: &str, value: &str) -> Json<SetRequest> {
        Json(SetRequest {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state(100);

        let response = set_handler(State(state.clone()), set_request("test_key", "test_value"))
            .await
            .unwrap();
        assert!(!response.updated);

        let response = get_handler(State(state.clone()), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_set_existing_key_reports_update() {
        let state = test_state(100);

        let _response = set_handler(State(state.clone()), set_request("k", "v1"))
            .await
            .unwrap();
        let response = set_handler(State(state.clone()), set_request("k", "v2"))
            .await
            .unwrap();

        assert!(response.updated);
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state(100);

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert_eq!(
            result.err(),
            Some(CacheError::NotFound("nonexistent".to_string()))
        );
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state(100);

        let _response = set_handler(State(state.clone()), set_request("to_clear", "value"))
            .await
            .unwrap();
        let response = clear_handler(State(state.clone())).await;
        assert!(response.message.contains("cleared"));

        let result = get_handler(State(state), Path("to_clear".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state(2);

        for key in ["a", "b", "c"] {
            let _response = set_handler(State(state.clone()), set_request(key, "v"))
                .await
                .unwrap();
        }

        let response = stats_handler(State(state)).await;
        assert_eq!(response.evictions, 1);
        assert_eq!(response.total_entries, 2);
        assert_eq!(response.capacity, 2);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let state = test_state(100);

        let result = set_handler(State(state), set_request("", "value")).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_state_from_config_with_max_capacity() {
        let config = Config {
            capacity: usize::MAX,
            ..Config::default()
        };
        let state = AppState::from_config(&config).unwrap();

        let response = set_handler(State(state.clone()), set_request("k", "v"))
            .await
            .unwrap();
        assert!(!response.updated);
        assert_eq!(state.cache.capacity().await, usize::MAX);
    }

    #[test]
    fn test_state_from_config_rejects_zero_capacity() {
        let config = Config {
            capacity: 0,
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(CacheError::InvalidCapacity(0))
        ));
    }
}
