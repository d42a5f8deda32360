//! Awaitable data-URL file reads for the local preview.
//!
//! The browser's `FileReader` is callback-based; this wraps it (via
//! `gloo-file`) into an awaitable operation returning a typed result, so the
//! preview flow reads as a straight-line async function.

#[cfg(test)]
#[path = "file_read_test.rs"]
mod file_read_test;

/// Error returned by [`read_as_data_url`].
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    /// The browser reported a failure before the file was fully read.
    #[error("file read failed: {0}")]
    Read(String),
}

/// Read the selected file's contents as a `data:` URL suitable for an
/// `<img src>` attribute.
///
/// Single-shot: there is no cancellation, and a new selection simply starts
/// a new read.
///
/// # Errors
///
/// Returns [`FileReadError::Read`] when the underlying reader aborts or
/// errors.
#[cfg(feature = "csr")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, FileReadError> {
    let file = gloo_file::File::from(file.clone());
    gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| FileReadError::Read(e.to_string()))
}
