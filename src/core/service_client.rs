// src/core/service_client.rs
//! Base request executor - every backend call goes through `ServiceClient`

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::envelope::ApiEnvelope;
use super::error::{ApiError, ApiResult};
use crate::app_log;

const JSON_CONTENT_TYPE: &str = "application/json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One file of a multipart upload
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FilePart>),
}

impl RequestBody {
    fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// Everything needed to issue one call. Built per call, consumed by the executor.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add the parameter only when a value is present
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidRequest(format!("Unserializable body: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, parts: Vec<FilePart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }
}

/// HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: HeaderMap::new(),
        })
    }

    /// Header sent on every request unless the call overrides it
    pub fn with_default_header(mut self, name: &str, value: &str) -> ApiResult<Self> {
        let (name, value) = parse_header(name, value)?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the call and decode the (possibly enveloped) JSON payload as `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestDescriptor) -> ApiResult<T> {
        let payload = self.execute_value(request).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Issue the call and return the unwrapped payload without typing it
    pub async fn execute_value(&self, request: RequestDescriptor) -> ApiResult<Value> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;

        let value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&body)?
        };

        let payload = ApiEnvelope::classify(value).into_payload();
        if let Err(ApiError::Application { message }) = &payload {
            app_log!(warn, "Service reported failure: {}", message);
        }
        payload
    }

    /// For calls whose payload the caller does not need (update, delete)
    pub async fn execute_empty(&self, request: RequestDescriptor) -> ApiResult<()> {
        self.execute_value(request).await.map(|_| ())
    }

    /// Binary download: status is checked, body is returned untouched
    pub async fn execute_bytes(&self, request: RequestDescriptor) -> ApiResult<Vec<u8>> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        app_log!(trace, "Received {} bytes", body.len());
        Ok(body.to_vec())
    }

    async fn send(&self, request: RequestDescriptor) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, request.path);
        let headers = self.merged_headers(&request)?;

        app_log!(debug, "{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        };

        let response = builder.send().await.map_err(|e| {
            app_log!(error, "Request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        app_log!(trace, "Response status: {}", status);

        if !status.is_success() {
            app_log!(warn, "{} {} returned {}", request.method, url, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response)
    }

    fn merged_headers(&self, request: &RequestDescriptor) -> ApiResult<HeaderMap> {
        let mut headers = self.default_headers.clone();

        // reqwest writes the multipart content type itself, boundary included
        if request.body.is_multipart() {
            headers.remove(CONTENT_TYPE);
        } else {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        for (name, value) in &request.headers {
            let (name, value) = parse_header(name, value)?;
            if request.body.is_multipart() && name == CONTENT_TYPE {
                continue;
            }
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

fn parse_header(name: &str, value: &str) -> ApiResult<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid header name: {}", name)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid value for header {}", name)))?;
    Ok((header_name, header_value))
}

fn build_form(parts: Vec<FilePart>) -> ApiResult<Form> {
    let mut form = Form::new();
    for file in parts {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|_| {
                ApiError::InvalidRequest(format!("Invalid content type: {}", file.content_type))
            })?;
        form = form.part(file.field, part);
    }
    Ok(form)
}
