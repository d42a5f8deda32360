//! Networking modules for the prediction-service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the classification requests, `types` defines the wire schema,
//! and `error` is the typed failure taxonomy the async calls return.

pub mod api;
pub mod error;
pub mod types;
