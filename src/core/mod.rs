// src/core/mod.rs
//! Request execution, envelope handling and error types shared by all clients

pub mod envelope;
pub mod error;
pub mod service_client;
pub mod settle;

pub use envelope::ApiEnvelope;
pub use error::{ApiError, ApiResult, FALLBACK_ERROR_MESSAGE};
pub use service_client::{FilePart, RequestBody, RequestDescriptor, ServiceClient};
pub use settle::{settle_or, settle_or_default};
