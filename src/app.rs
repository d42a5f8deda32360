//! Root component: provides shared context and renders the page sections.
//!
//! DESIGN
//! ======
//! All shared state is created here and handed down through Leptos context,
//! so nothing reaches into the document at module scope. Every page section
//! stays mounted; visibility is driven by `UiState` through the `page` /
//! `page--active` class pair.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::pages::home::HomePage;
use crate::pages::soil::SoilPage;
use crate::pages::vegetation::VegetationPage;
use crate::state::ui::{Page, UiState};
use crate::util::api_base::ApiBase;

/// Application root. Mounted once onto the document body.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(ApiBase::resolve());

    let page_class = move |page: Page| {
        if ui.get().active_page == page {
            "page page--active"
        } else {
            "page"
        }
    };

    view! {
        <NavBar />
        <main class="content">
            <section class=move || page_class(Page::Home)>
                <HomePage />
            </section>
            <section class=move || page_class(Page::Vegetation)>
                <VegetationPage />
            </section>
            <section class=move || page_class(Page::Soil)>
                <SoilPage />
            </section>
        </main>
    }
}
