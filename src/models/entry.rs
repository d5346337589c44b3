//! Contents-API records and this service's own response bodies.
//!
//! - `ContentEntry`: one record from `GET {repo}/contents/{path}`, relayed
//!   as-is by the listing endpoints
//! - `EntryType`: the `type` tag on an entry
//! - `CountResponse`: body of the aggregate count endpoint

use serde::{Deserialize, Serialize};

/// Extensions recognized as images, matched case-insensitively against the
/// last dot-separated segment of a file name.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    /// Anything else the API may return (symlink, submodule).
    #[serde(other)]
    Other,
}

impl ContentEntry {
    /// True for file entries whose name carries one of [`IMAGE_EXTENSIONS`].
    pub fn is_image(&self) -> bool {
        self.entry_type == EntryType::File
            && self
                .name
                .rsplit_once('.')
                .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}
