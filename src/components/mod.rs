//! Leptos UI components.

pub mod fx;
