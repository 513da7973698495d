/// Upload session state machine
///
/// The Session owns the selected image and the single outstanding analysis
/// request: which of the four statuses the exchange is in, the result or
/// error it produced, and the request generation that pairs a completion
/// with the submit that issued it.

use super::data::{AnalysisResult, SelectedImage};

/// Banner message for a selection that is not an image
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid image file";
/// Banner message for an analyze attempt without a selection
pub const NO_FILE_MESSAGE: &str = "Please select an image first";

/// Where the upload-and-analyze exchange currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No request issued for the current selection
    Idle,
    /// Exactly one request is in flight
    Loading,
    /// The last request produced a displayable result
    Succeeded,
    /// The last request failed; the banner explains why
    Failed,
}

/// The interaction state for one upload session
///
/// All transitions go through the methods below, which keep the invariants:
/// Succeeded holds a result and no error, Failed holds an error and no
/// result, Loading holds no error (a result from an earlier exchange stays
/// usable while the next one is in flight).
#[derive(Debug)]
pub struct Session {
    status: Status,
    image: Option<SelectedImage>,
    result: Option<AnalysisResult>,
    error: Option<String>,
    /// Bumped on every submit and every accepted selection; completions
    /// carrying an older value are discarded
    request_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Session {
            status: Status::Idle,
            image: None,
            result: None,
            error: None,
            request_seq: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Whether the analyze trigger should be enabled
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && self.status != Status::Loading
    }

    /// A picked file was rejected by the media-type check
    ///
    /// Only the banner changes: the existing selection, result and status
    /// all stay as they are.
    pub fn invalid_selection(&mut self) {
        self.error = Some(INVALID_FILE_MESSAGE.to_string());
    }

    /// A picked file passed validation and its bytes are in
    ///
    /// Replaces any previous selection, clears the previous result and
    /// banner, and returns the session to Idle. Bumping the generation here
    /// makes a response still in flight for the old selection stale.
    pub fn image_selected(&mut self, image: SelectedImage) {
        self.image = Some(image);
        self.result = None;
        self.error = None;
        self.status = Status::Idle;
        self.request_seq += 1;
    }

    /// Reading a validated file's bytes failed
    pub fn load_failed(&mut self, message: String) {
        self.error = Some(format!("Failed to read image: {}", message));
    }

    /// Start the upload-and-analyze exchange
    ///
    /// Returns the request generation and the image to upload, or None when
    /// no request should be issued: either nothing is selected (banner set)
    /// or one is already in flight (no-op).
    pub fn begin_analysis(&mut self) -> Option<(u64, SelectedImage)> {
        if self.status == Status::Loading {
            return None;
        }

        let Some(image) = self.image.clone() else {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return None;
        };

        self.status = Status::Loading;
        self.error = None;
        self.request_seq += 1;

        Some((self.request_seq, image))
    }

    /// Record the outcome of an exchange
    ///
    /// A completion whose generation no longer matches belongs to a
    /// superseded request and is dropped without touching any state.
    pub fn finish_analysis(&mut self, seq: u64, outcome: Result<AnalysisResult, String>) {
        if seq != self.request_seq {
            return;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.status = Status::Succeeded;
            }
            Err(message) => {
                self.result = None;
                self.error = Some(format!("Error analyzing image: {}", message));
                self.status = Status::Failed;
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
