/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the network layer and the UI layer.

use std::path::{Path, PathBuf};

use iced::widget::image;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user-selected image, validated and fully read into memory
///
/// Only created for paths whose guessed media type is `image/*`.
/// Replaced wholesale when the user picks another file.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    /// Full path to the source file
    pub path: PathBuf,
    /// Filename only (e.g., "DSC_0001.jpg"), sent as the upload filename
    pub file_name: String,
    /// Guessed media type (e.g., "image/jpeg"), sent with the upload
    pub mime: String,
    /// Raw file contents, transmitted verbatim on analyze
    pub bytes: Vec<u8>,
    /// Decoded preview for display only, never transmitted
    pub preview: image::Handle,
}

impl SelectedImage {
    /// Build a SelectedImage from an already-validated path and its bytes
    pub fn new(path: PathBuf, mime: String, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        // The preview handle keeps its own copy of the bytes; dropping the
        // SelectedImage releases both
        let preview = image::Handle::from_bytes(bytes.clone());

        SelectedImage {
            path,
            file_name,
            mime,
            bytes,
            preview,
        }
    }
}

/// Guess the media type of a path, returning it only for images
///
/// This is the selection validity check: anything that does not look like
/// `image/*` is rejected before a single byte is read.
pub fn image_mime(path: &Path) -> Option<String> {
    let guess = mime_guess::from_path(path).first()?;

    if guess.type_() == mime::IMAGE {
        Some(guess.essence_str().to_string())
    } else {
        None
    }
}

/// The analysis service's response body
///
/// Field names follow the wire format (camelCase). Both mappings keep the
/// service's key order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Natural-language description of the image
    pub description: String,
    /// Nested prompt structure, displayed as formatted JSON
    pub json_prompt: Map<String, Value>,
    /// Cartoon-style prompt text
    pub toon_prompt: String,
    /// Flat field → value prompt breakdown; its tab is hidden when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_prompt: Option<Map<String, Value>>,
    /// Cinematic prompt text
    pub cinematic_prompt: String,
    /// Semantic failure reported by the service; a result carrying this
    /// is never displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
