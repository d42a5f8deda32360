//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the interaction surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod analysis_panel;
pub mod nav_bar;
