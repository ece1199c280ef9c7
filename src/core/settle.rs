// src/core/settle.rs
//! "Settle, then default" - the single place where failures are absorbed

use std::future::Future;

use super::error::ApiResult;
use crate::app_log;

/// Await `call`; on failure log it and yield `fallback` instead.
pub async fn settle_or<T, F>(label: &str, call: F, fallback: T) -> T
where
    F: Future<Output = ApiResult<T>>,
{
    match call.await {
        Ok(value) => value,
        Err(e) => {
            app_log!(warn, "{} unavailable, using default: {}", label, e);
            fallback
        }
    }
}

pub async fn settle_or_default<T, F>(label: &str, call: F) -> T
where
    F: Future<Output = ApiResult<T>>,
    T: Default,
{
    settle_or(label, call, T::default()).await
}
