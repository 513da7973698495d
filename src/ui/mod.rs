/// UI module
///
/// View helpers for the two halves of the screen:
/// - Image picker, analyze trigger and error banner (upload.rs)
/// - Result tabs with copy affordances (results.rs)

pub mod results;
pub mod upload;
