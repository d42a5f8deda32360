//! Vegetation coverage analysis page.

use leptos::prelude::*;

use crate::components::analysis_panel::AnalysisPanel;
use crate::net::types::AnalysisKind;

#[component]
pub fn VegetationPage() -> impl IntoView {
    view! {
        <div class="tool-page">
            <h1 class="tool-page__title">"Vegetation Coverage"</h1>
            <p class="tool-page__subtitle">
                "Upload an aerial or field photo to estimate what share of it is vegetation."
            </p>
            <AnalysisPanel kind=AnalysisKind::Vegetation />
        </div>
    }
}
