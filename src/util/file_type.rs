//! Upload file-type checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the server's allow-lists so the page can reject a file before
//! uploading it. The server check stays authoritative.

#[cfg(test)]
#[path = "file_type_test.rs"]
mod file_type_test;

use serde::{Deserialize, Serialize};

const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mov", "wmv", "flv", "mkv"];
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Name and MIME type of a picked file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(rename = "type", default)]
    pub mime: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self { name: name.into(), mime: mime.into() }
    }

    /// Lower-cased text after the last `.`, or the whole name without one.
    #[must_use]
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Accepted MIME fragments and extensions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllowedTypes {
    pub mime_types: Vec<String>,
    pub extensions: Vec<String>,
}

impl AllowedTypes {
    /// Video uploads accepted by the server.
    #[must_use]
    pub fn videos() -> Self {
        Self {
            mime_types: vec!["video/".to_owned()],
            extensions: VIDEO_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }

    /// Image uploads accepted by the server.
    #[must_use]
    pub fn images() -> Self {
        Self {
            mime_types: vec!["image/".to_owned()],
            extensions: IMAGE_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

/// `true` if the file's MIME type contains an allowed fragment or its
/// extension is allowed.
#[must_use]
pub fn validate_file_type(file: &FileDescriptor, allowed: &AllowedTypes) -> bool {
    let mime = file.mime.to_lowercase();
    if allowed
        .mime_types
        .iter()
        .any(|fragment| mime.contains(fragment.as_str()))
    {
        return true;
    }
    let extension = file.extension();
    allowed.extensions.iter().any(|e| *e == extension)
}
