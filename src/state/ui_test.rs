use super::*;

// =============================================================
// Page ids
// =============================================================

#[test]
fn page_ids_round_trip() {
    for page in [Page::Home, Page::Vegetation, Page::Soil] {
        assert_eq!(Page::from_id(page.id()), Some(page));
    }
}

#[test]
fn from_id_rejects_unknown_identifiers() {
    assert_eq!(Page::from_id("results"), None);
    assert_eq!(Page::from_id(""), None);
    assert_eq!(Page::from_id("Vegetation"), None);
}

#[test]
fn page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

// =============================================================
// UiState::show_page
// =============================================================

#[test]
fn show_page_activates_matching_section() {
    let mut state = UiState::default();
    state.show_page("soil");
    assert_eq!(state.active_page, Page::Soil);
    state.show_page("vegetation");
    assert_eq!(state.active_page, Page::Vegetation);
}

#[test]
fn show_page_with_unknown_id_is_a_silent_no_op() {
    let mut state = UiState::default();
    state.show_page("soil");
    state.show_page("does-not-exist");
    assert_eq!(state.active_page, Page::Soil);
}

#[test]
fn ui_state_default_active_page_is_home() {
    assert_eq!(UiState::default().active_page, Page::Home);
}
