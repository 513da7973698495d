/// Analysis endpoint client
///
/// Uploads the selected image as multipart form data and decodes the JSON
/// result body. The exchange is a single POST: no authentication, no retry,
/// no polling. Every failure is terminal to the current attempt and the
/// caller decides when to try again.

use reqwest::multipart;
use serde_json::Value;
use thiserror::Error;

use crate::state::data::{AnalysisResult, SelectedImage};

/// Fixed URL of the analysis service
pub const ANALYZE_URL: &str =
    "https://image-prompt-generator-68as.onrender.com/api/v1/analyze/image";

/// Everything that can go wrong between submit and a displayable result
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The HTTP exchange itself failed (connection, timeout, unreadable body)
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status; the body is not parsed
    #[error("Failed to analyze image")]
    BadStatus(reqwest::StatusCode),
    /// Transport-level success, but the body does not have the result shape
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The service reported it could not produce an analysis
    #[error("{0}")]
    Service(String),
}

/// Upload an image to the analysis service and decode the result
pub async fn analyze_image(
    client: &reqwest::Client,
    image: SelectedImage,
) -> Result<AnalysisResult, AnalyzeError> {
    analyze_image_at(client, ANALYZE_URL, image).await
}

/// Same exchange against an explicit URL
async fn analyze_image_at(
    client: &reqwest::Client,
    url: &str,
    image: SelectedImage,
) -> Result<AnalysisResult, AnalyzeError> {
    // Exactly one part, named "image", carrying the raw file bytes
    let part = multipart::Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.mime)?;
    let form = multipart::Form::new().part("image", part);

    let response = client.post(url).multipart(form).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AnalyzeError::BadStatus(status));
    }

    let body: Value = response.json().await?;

    // A transport-successful body can still carry a semantic failure;
    // such a body must never reach the tabs
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Err(AnalyzeError::Service(message.to_string()));
    }

    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::path::PathBuf;

    const ANALYZE_PATH: &str = "/api/v1/analyze/image";

    const SUCCESS_BODY: &str = r#"{
        "description": "a cat",
        "jsonPrompt": {"subject": "cat"},
        "toonPrompt": "cartoon cat",
        "cinematicPrompt": "cinematic cat shot"
    }"#;

    fn sample_image() -> SelectedImage {
        SelectedImage::new(
            PathBuf::from("/photos/cat.jpg"),
            "image/jpeg".to_string(),
            b"fake-jpeg-bytes".to_vec(),
        )
    }

    async fn call(server: &Server, image: SelectedImage) -> Result<AnalysisResult, AnalyzeError> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", server.url(), ANALYZE_PATH);
        analyze_image_at(&client, &url, image).await
    }

    #[tokio::test]
    async fn test_upload_sends_one_image_part_with_the_file_bytes() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", ANALYZE_PATH)
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("name=\"image\"".to_string()),
                Matcher::Regex("filename=\"cat.jpg\"".to_string()),
                Matcher::Regex("fake-jpeg-bytes".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SUCCESS_BODY)
            .create_async()
            .await;

        let result = call(&server, sample_image()).await.unwrap();

        assert_eq!(result.description, "a cat");
        assert!(result.detailed_prompt.is_none());
        // Exactly one request reached the endpoint
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_body_is_a_semantic_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", ANALYZE_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "unsupported image"}"#)
            .create_async()
            .await;

        let outcome = call(&server, sample_image()).await;

        match outcome {
            Err(AnalyzeError::Service(message)) => assert_eq!(message, "unsupported image"),
            other => panic!("expected a semantic failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_generic_transport_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", ANALYZE_PATH)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let outcome = call(&server, sample_image()).await;

        match outcome {
            Err(err @ AnalyzeError::BadStatus(_)) => {
                // The body is not surfaced, only the generic message
                assert_eq!(err.to_string(), "Failed to analyze image");
            }
            other => panic!("expected a status failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_transport_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", ANALYZE_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("this is not json")
            .create_async()
            .await;

        let outcome = call(&server, sample_image()).await;
        assert!(matches!(outcome, Err(AnalyzeError::Http(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_body_is_a_decode_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", ANALYZE_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"description": 42}"#)
            .create_async()
            .await;

        let outcome = call(&server, sample_image()).await;
        assert!(matches!(outcome, Err(AnalyzeError::Decode(_))));
    }
}
