// src/files.rs
//! Files exchanged with the CV service: uploads in, CSV exports out

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::FilePart;
use crate::utils;

/// Multipart field name the upload endpoint expects, once per file
pub const UPLOAD_FIELD: &str = "files";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a PDF or DOCX from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?
            .to_string();

        let content_type = utils::content_type_for(&file_name)?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::new(file_name, content_type, bytes))
    }

    pub(crate) fn into_part(self) -> FilePart {
        FilePart {
            field: UPLOAD_FIELD.to_string(),
            file_name: self.file_name,
            content_type: self.content_type,
            bytes: self.bytes,
        }
    }
}

/// Opaque CSV payload returned by the export endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCsv {
    bytes: Vec<u8>,
}

impl ExportedCsv {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn headers(&self) -> Result<Vec<String>> {
        let mut reader = csv::Reader::from_reader(self.bytes.as_slice());
        let headers = reader.headers().context("Failed to read CSV header")?;
        Ok(headers.iter().map(str::to_string).collect())
    }

    /// Data records, header excluded
    pub fn rows(&self) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::Reader::from_reader(self.bytes.as_slice());
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Failed to parse CSV record")?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    pub async fn write_to(&self, path: &Path) -> Result<()> {
        utils::write_file_bytes(path, &self.bytes).await
    }
}
