//! Represents the file served at the root path.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Metadata about the served asset. The bytes themselves stay on disk and are
/// streamed per request.
#[derive(Clone, Debug)]
pub struct Asset {
    /// Location of the file, as configured.
    pub path: PathBuf,

    /// Content type (MIME type) inferred from the file extension.
    pub content_type: String,

    /// Size in bytes.
    pub size_bytes: u64,

    /// Filesystem modification time, when the platform reports one.
    pub last_modified: Option<DateTime<Utc>>,
}

impl Asset {
    /// `Last-Modified` header value in IMF-fixdate form.
    pub fn http_last_modified(&self) -> Option<String> {
        self.last_modified
            .map(|ts| ts.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
    }
}
