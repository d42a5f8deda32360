//! Shared client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` tracks which page section is active; `analysis` tracks the lifecycle
//! of one classification request and how its result line renders.

pub mod analysis;
pub mod ui;
