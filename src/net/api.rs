//! REST helpers for the prediction service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. The request is a
//! multipart POST carrying the selected file. No retry and no timeout; a
//! failed request is terminal and the user retries manually.
//!
//! Endpoint construction is kept in plain helpers so the native test suite
//! covers it without a browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::Prediction;
#[cfg(any(test, feature = "csr"))]
use super::types::AnalysisKind;

/// Multipart field name the prediction service expects for the image.
pub const UPLOAD_FIELD: &str = "file";

#[cfg(any(test, feature = "csr"))]
fn predict_endpoint(base: &str, kind: AnalysisKind) -> String {
    format!("{base}/predict/{}", kind.slug())
}

/// Send the selected image to the prediction service and parse the response
/// for `kind`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the request cannot be built or sent,
/// [`ApiError::Status`] when the server answers with a non-success HTTP
/// status, and [`ApiError::Decode`] when the body does not match the
/// expected payload shape.
#[cfg(feature = "csr")]
pub async fn classify(
    base: &str,
    kind: AnalysisKind,
    file: &web_sys::File,
) -> Result<Prediction, ApiError> {
    use super::types::{SoilPrediction, VegetationPrediction};

    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not construct form data".to_owned()))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file to form data".to_owned()))?;

    let url = predict_endpoint(base, kind);
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    match kind {
        AnalysisKind::Vegetation => {
            let body: VegetationPrediction = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(Prediction::Vegetation(body))
        }
        AnalysisKind::Soil => {
            let body: SoilPrediction = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(Prediction::Soil(body))
        }
    }
}
