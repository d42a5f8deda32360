//! Prediction-service address resolution.
//!
//! The service defaults to the local loopback address the backend runs on
//! during development. Deployments can point elsewhere without rebuilding by
//! setting a `data-api-base` attribute on the document root element; the
//! value is read once at mount and shared through context.

#[cfg(test)]
#[path = "api_base_test.rs"]
mod api_base_test;

/// Default prediction-service address.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Resolved base URL of the prediction service, provided via context at
/// mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(pub String);

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_owned())
    }
}

impl ApiBase {
    /// Read the override attribute from the document, falling back to the
    /// default address. Outside a browser this always returns the default.
    #[must_use]
    pub fn resolve() -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    if let Some(base) = el.get_attribute("data-api-base") {
                        return Self::from_attribute(&base);
                    }
                }
            }
        }
        Self::default()
    }

    /// Normalize an attribute value: trim whitespace and trailing slashes,
    /// treat an empty value as unset.
    #[cfg(any(test, feature = "csr"))]
    fn from_attribute(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_owned())
        }
    }
}
