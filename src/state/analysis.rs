//! Classification request lifecycle and result presentation.
//!
//! DESIGN
//! ======
//! Each analysis panel owns one `AnalysisPhase` signal. Completions write the
//! signal directly, so two in-flight requests race and the last writer wins,
//! mirroring the single result line they both render into. There is no
//! cancellation and no timeout.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::types::Prediction;

const LOADING_TEXT: &str = "⏳ Processing with AI Model... Please wait.";
const FAILURE_TEXT: &str = "❌ Error connecting to AI Server. Make sure the backend is running.";

/// Lifecycle of one classification request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisPhase {
    /// No request has been made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The service returned a parsed prediction.
    Complete(Prediction),
    /// The request failed (transport, status, or decode).
    Failed,
}

impl AnalysisPhase {
    /// The result line for this phase, or `None` while idle.
    #[must_use]
    pub fn status_line(&self) -> Option<StatusLine> {
        match self {
            Self::Idle => None,
            Self::Loading => Some(StatusLine {
                text: LOADING_TEXT.to_owned(),
                tone: StatusTone::Pending,
            }),
            Self::Complete(prediction) => Some(StatusLine {
                text: success_text(prediction),
                tone: StatusTone::Success,
            }),
            Self::Failed => Some(StatusLine {
                text: FAILURE_TEXT.to_owned(),
                tone: StatusTone::Failure,
            }),
        }
    }
}

/// Visual tone of the result line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Request in flight; neutral text color.
    Pending,
    /// Prediction rendered; success color.
    Success,
    /// Request failed; failure color.
    Failure,
}

impl StatusTone {
    /// CSS modifier class for the result line.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "analysis-result--pending",
            Self::Success => "analysis-result--success",
            Self::Failure => "analysis-result--failure",
        }
    }
}

/// A rendered result line: text plus tone.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

/// Success copy per prediction kind. Coverage renders the way the service
/// reports it (whole numbers without a trailing `.0`); confidence renders as
/// a percentage rounded to two decimals.
fn success_text(prediction: &Prediction) -> String {
    match prediction {
        Prediction::Vegetation(p) => {
            format!("✅ Analysis Complete: {}% Vegetation Detected", p.coverage)
        }
        Prediction::Soil(p) => {
            format!("✅ Detected Soil: {} ({:.2}%)", p.label, p.confidence * 100.0)
        }
    }
}
