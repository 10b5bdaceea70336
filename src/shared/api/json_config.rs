// src/shared/api/json_config.rs
use actix_web::{
    error::InternalError,
    web::{JsonConfig, PathConfig, QueryConfig},
};

use crate::shared::api::ApiResponse;

const MAX_JSON_PAYLOAD: usize = 64 * 1024;

/// Malformed JSON bodies become the standard error envelope instead of
/// actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!("Rejected JSON payload: {}", message);
            InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}

/// Non-UUID ids in the path are a 400, not a routing miss.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("INVALID_PATH", &message))
            .into()
    })
}
