//! Typed clients for the hiring and code-review dashboard backends.
//!
//! Every call goes through [`crate::core::ServiceClient`], which accepts both the
//! `{ success, data, error }` envelope and raw payloads. Resource clients are
//! borrowed from an [`ApiClients`] bundle built once from configuration.

pub mod cli;
pub mod clients;
pub mod core;
pub mod environment;
pub mod files;
pub mod types;
pub mod utils;

pub use clients::ApiClients;
pub use crate::core::{ApiError, ApiResult};
pub use environment::EnvironmentConfig;

/// Level-dispatching logging macro over `tracing`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
