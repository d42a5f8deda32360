//! Upload, preview, and classification panel shared by the analysis pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! One panel instance per analysis kind. The selected file stays owned by
//! the browser's input control and is read through a `NodeRef` at submit
//! time; the preview and the result line render from component-local
//! signals. Two quickly-triggered requests race and the later completion
//! wins the result line.

#[cfg(test)]
#[path = "analysis_panel_test.rs"]
mod analysis_panel_test;

use leptos::prelude::*;

use crate::net::types::AnalysisKind;
use crate::state::analysis::{AnalysisPhase, StatusTone};
use crate::util::api_base::ApiBase;

#[cfg(any(test, feature = "csr"))]
const MISSING_FILE_ALERT: &str = "Please upload an image first!";

/// Upload/preview/submit surface for one analysis tool.
#[component]
pub fn AnalysisPanel(kind: AnalysisKind) -> impl IntoView {
    let api_base = expect_context::<ApiBase>();
    let phase = RwSignal::new(AnalysisPhase::Idle);
    let preview_url = RwSignal::new(None::<String>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Preview is driven by the change event alone; no network is involved.
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|el| el.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file_read::read_as_data_url(&file).await {
                    Ok(url) => preview_url.set(Some(url)),
                    Err(e) => log::warn!("preview read failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &ev;
        }
    };

    let on_classify = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(file) = selected_file(input_ref) else {
                alert_missing_file();
                return;
            };
            phase.set(AnalysisPhase::Loading);
            let base = api_base.0.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::classify(&base, kind, &file).await {
                    Ok(prediction) => phase.set(AnalysisPhase::Complete(prediction)),
                    Err(e) => {
                        log::error!("{} classification failed: {e}", kind.slug());
                        phase.set(AnalysisPhase::Failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &api_base;
        }
    };

    view! {
        <div class="analysis-panel">
            <label class="analysis-panel__label" for=format!("{}-input", kind.slug())>
                "Upload an image"
            </label>
            <input
                id=format!("{}-input", kind.slug())
                node_ref=input_ref
                class="analysis-panel__input"
                type="file"
                accept="image/*"
                on:change=on_file_change
            />
            {move || {
                preview_url.get().map(|url| {
                    view! {
                        <img
                            class="analysis-panel__preview"
                            alt="Selected image preview"
                            src=url
                        />
                    }
                })
            }}
            <button class="analysis-panel__submit" on:click=on_classify>
                {submit_label(kind)}
            </button>
            {move || {
                phase.get().status_line().map(|line| {
                    view! { <p class=result_line_class(line.tone)>{line.text}</p> }
                })
            }}
        </div>
    }
}

fn submit_label(kind: AnalysisKind) -> String {
    format!("Analyze {}", kind.display_name())
}

fn result_line_class(tone: StatusTone) -> String {
    format!("analysis-result {}", tone.css_class())
}

/// The file currently held by the panel's input control, if any.
#[cfg(feature = "csr")]
fn selected_file(input_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input_ref
        .get()
        .and_then(|el| el.files())
        .and_then(|files| files.get(0))
}

#[cfg(feature = "csr")]
fn alert_missing_file() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(MISSING_FILE_ALERT);
    }
}
