use super::*;

#[test]
fn predict_endpoint_appends_kind_slug() {
    assert_eq!(
        predict_endpoint("http://127.0.0.1:5000", AnalysisKind::Vegetation),
        "http://127.0.0.1:5000/predict/vegetation"
    );
    assert_eq!(
        predict_endpoint("http://127.0.0.1:5000", AnalysisKind::Soil),
        "http://127.0.0.1:5000/predict/soil"
    );
}

#[test]
fn predict_endpoint_respects_injected_base() {
    assert_eq!(
        predict_endpoint("https://fields.example.com", AnalysisKind::Soil),
        "https://fields.example.com/predict/soil"
    );
}

#[test]
fn upload_field_matches_service_contract() {
    assert_eq!(UPLOAD_FIELD, "file");
}
