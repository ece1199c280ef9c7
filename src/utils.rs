// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Replace each whitespace run with `_`, then lowercase. Edges are not trimmed.
pub fn snake_case_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    out
}

/// Default file name of a candidate export for a job
pub fn export_file_name(job_title: &str) -> String {
    format!("candidates_{}.csv", snake_case_title(job_title))
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Content type of an uploadable CV; only PDF and DOCX are accepted
pub fn content_type_for(filename: &str) -> Result<&'static str> {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => Ok(PDF_CONTENT_TYPE),
        Some("docx") => Ok(DOCX_CONTENT_TYPE),
        Some(ext) => anyhow::bail!("Unsupported file extension: {}. Allowed: pdf, docx", ext),
        None => anyhow::bail!("File has no extension: {}", filename),
    }
}

/// Write bytes, creating parent directories first
pub async fn write_file_bytes(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
