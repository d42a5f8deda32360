//! Wire-schema DTOs for the prediction service.
//!
//! The service is an opaque HTTP collaborator; these types mirror its JSON
//! response bodies. Extra fields (it also sends a `status` string) are
//! ignored on deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Which analysis tool a request belongs to.
///
/// The slug doubles as the endpoint path suffix and the element id prefix
/// of the corresponding panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Vegetation coverage estimation.
    Vegetation,
    /// Soil type classification.
    Soil,
}

impl AnalysisKind {
    /// Path suffix of the prediction endpoint.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Vegetation => "vegetation",
            Self::Soil => "soil",
        }
    }

    /// Human-readable tool name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Vegetation => "Vegetation Coverage",
            Self::Soil => "Soil Type",
        }
    }
}

/// Response payload of `POST /predict/vegetation`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VegetationPrediction {
    /// Percentage of the image classified as vegetation, in `[0, 100]`.
    pub coverage: f64,
}

/// Response payload of `POST /predict/soil`.
///
/// When the model detects nothing, the service reports `label: "Unknown"`
/// with a confidence of `0` rather than an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilPrediction {
    /// Categorical soil-type label.
    pub label: String,
    /// Model certainty for the label, in `[0, 1]`.
    pub confidence: f64,
}

/// A parsed prediction from either endpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum Prediction {
    Vegetation(VegetationPrediction),
    Soil(SoilPrediction),
}
