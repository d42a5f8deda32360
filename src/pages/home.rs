//! Landing page introducing the two analysis tools.

use leptos::prelude::*;

use crate::state::ui::{Page, UiState};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move |page: Page| move |_| ui.update(|state| state.show_page(page.id()));

    view! {
        <div class="home">
            <h1 class="home__title">"AgriLens"</h1>
            <p class="home__subtitle">
                "Upload a field photo and let the analysis models do the rest."
            </p>
            <div class="home__cards">
                <button class="home-card" on:click=open(Page::Vegetation)>
                    <h2 class="home-card__title">"Vegetation Coverage"</h2>
                    <p class="home-card__body">
                        "Estimate how much of the image is covered by vegetation."
                    </p>
                </button>
                <button class="home-card" on:click=open(Page::Soil)>
                    <h2 class="home-card__title">"Soil Type"</h2>
                    <p class="home-card__body">
                        "Classify the dominant soil type with a confidence score."
                    </p>
                </button>
            </div>
        </div>
    }
}
