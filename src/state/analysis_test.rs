use super::*;
use crate::net::types::{SoilPrediction, VegetationPrediction};

fn vegetation(coverage: f64) -> AnalysisPhase {
    AnalysisPhase::Complete(Prediction::Vegetation(VegetationPrediction { coverage }))
}

fn soil(label: &str, confidence: f64) -> AnalysisPhase {
    AnalysisPhase::Complete(Prediction::Soil(SoilPrediction {
        label: label.to_owned(),
        confidence,
    }))
}

// =============================================================
// Phase -> result line
// =============================================================

#[test]
fn idle_renders_nothing() {
    assert_eq!(AnalysisPhase::Idle.status_line(), None);
}

#[test]
fn default_phase_is_idle() {
    assert_eq!(AnalysisPhase::default(), AnalysisPhase::Idle);
}

#[test]
fn loading_renders_pending_message() {
    let line = AnalysisPhase::Loading.status_line().expect("line");
    assert_eq!(line.text, "⏳ Processing with AI Model... Please wait.");
    assert_eq!(line.tone, StatusTone::Pending);
}

#[test]
fn whole_number_coverage_renders_without_decimals() {
    let line = vegetation(73.0).status_line().expect("line");
    assert_eq!(line.text, "✅ Analysis Complete: 73% Vegetation Detected");
    assert_eq!(line.tone, StatusTone::Success);
}

#[test]
fn fractional_coverage_keeps_its_decimals() {
    let line = vegetation(41.27).status_line().expect("line");
    assert_eq!(line.text, "✅ Analysis Complete: 41.27% Vegetation Detected");
}

#[test]
fn soil_label_renders_with_two_decimal_confidence() {
    let line = soil("Clay", 0.8567).status_line().expect("line");
    assert_eq!(line.text, "✅ Detected Soil: Clay (85.67%)");
    assert_eq!(line.tone, StatusTone::Success);
}

#[test]
fn undetected_soil_renders_through_the_success_path() {
    let line = soil("Unknown", 0.0).status_line().expect("line");
    assert_eq!(line.text, "✅ Detected Soil: Unknown (0.00%)");
    assert_eq!(line.tone, StatusTone::Success);
}

#[test]
fn failure_renders_fixed_error_message() {
    let line = AnalysisPhase::Failed.status_line().expect("line");
    assert_eq!(
        line.text,
        "❌ Error connecting to AI Server. Make sure the backend is running."
    );
    assert_eq!(line.tone, StatusTone::Failure);
}

// =============================================================
// Tones
// =============================================================

#[test]
fn tones_map_to_distinct_css_classes() {
    assert_eq!(StatusTone::Pending.css_class(), "analysis-result--pending");
    assert_eq!(StatusTone::Success.css_class(), "analysis-result--success");
    assert_eq!(StatusTone::Failure.css_class(), "analysis-result--failure");
}
