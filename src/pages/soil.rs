//! Soil type analysis page.

use leptos::prelude::*;

use crate::components::analysis_panel::AnalysisPanel;
use crate::net::types::AnalysisKind;

#[component]
pub fn SoilPage() -> impl IntoView {
    view! {
        <div class="tool-page">
            <h1 class="tool-page__title">"Soil Type"</h1>
            <p class="tool-page__subtitle">
                "Upload a close-up soil photo to classify its dominant type."
            </p>
            <AnalysisPanel kind=AnalysisKind::Soil />
        </div>
    }
}
