//! Resume download

use std::path::{Path, PathBuf};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{CACHE_CONTROL, CONTENT_DISPOSITION};
use serde_json::Value;
use tracing::{debug, info};

use super::PortfolioClient;
use crate::{ApiError, ApiResult};

/// Path of the resume file
pub const RESUME_PATH: &str = "/api/resume/download";

/// Filename used when neither the server nor the caller name the file
pub const DEFAULT_RESUME_NAME: &str = "resume.pdf";

/// Tooltip of a resume button while no resume is uploaded
pub const RESUME_UNAVAILABLE: &str = "Resume not available yet.";

/// Alert for a disabled resume button that carries no tooltip
pub const RESUME_UNAVAILABLE_LONG: &str =
    "My resume isn’t available right now. Please upload one from the Admin Dashboard to enable downloads.";

/// Alert for a failed download whose error has no message
pub const RESUME_DOWNLOAD_FAILED: &str =
    "Sorry—something went wrong while downloading the resume. Please try again.";

static FILENAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)filename\*=UTF-8''([^;]+)|filename="?([^";]+)"?"#)
        .expect("filename pattern is valid")
});

/// A downloaded file held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// Write the file into `dir` and return its path
    ///
    /// Only the last path component of the filename is used.
    pub async fn save_to(&self, dir: &Path) -> ApiResult<PathBuf> {
        let name = Path::new(&self.filename)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_RESUME_NAME.into());

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(name);
        tokio::fs::write(&path, &self.bytes).await?;

        info!("Saved {} bytes to {:?}", self.bytes.len(), path);
        Ok(path)
    }
}

/// Extract a filename from a `content-disposition` header value
///
/// The RFC 5987 `filename*=UTF-8''` form and the plain `filename=` form are
/// both accepted, whichever appears first. The name is percent-decoded; a
/// name that does not decode to UTF-8 is returned as-is.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let captures = FILENAME_PATTERN.captures(header)?;
    let raw = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())?;

    let decoded = percent_encoding::percent_decode_str(raw)
        .decode_utf8()
        .map(|name| name.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    (!decoded.is_empty()).then_some(decoded)
}

/// User-facing message for a failed download
///
/// Uses the `error` string of a JSON body when there is one.
pub fn download_error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| match value.get("error") {
            Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Download failed ({})", status))
}

impl PortfolioClient {
    /// Download the resume
    ///
    /// `preferred_name` is used when the response does not name the file.
    pub async fn download_resume(&self, preferred_name: &str) -> ApiResult<ResumeFile> {
        let url = self.url(RESUME_PATH)?;
        debug!("Downloading: {}", url);

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: download_error_message(status.as_u16(), &body),
            });
        }

        let header_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition);

        let filename = header_name
            .or_else(|| (!preferred_name.is_empty()).then(|| preferred_name.to_string()))
            .unwrap_or_else(|| DEFAULT_RESUME_NAME.to_string());

        let bytes = response.bytes().await?.to_vec();
        Ok(ResumeFile { filename, bytes })
    }
}
