//! Top navigation for switching between page sections.

use leptos::prelude::*;

use crate::state::ui::{Page, UiState};

/// Navigation bar with one link per page section.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let link_class = move |page: Page| {
        if ui.get().active_page == page {
            "nav-bar__link nav-bar__link--active"
        } else {
            "nav-bar__link"
        }
    };

    let nav_link = move |page: Page| {
        view! {
            <button
                class=move || link_class(page)
                on:click=move |_| ui.update(|state| state.show_page(page.id()))
            >
                {page.nav_title()}
            </button>
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"AgriLens"</span>
            {nav_link(Page::Home)}
            {nav_link(Page::Vegetation)}
            {nav_link(Page::Soil)}
        </nav>
    }
}
