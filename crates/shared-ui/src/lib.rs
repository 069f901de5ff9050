//! Styled Dioxus components for the hospital console. Each component ships
//! its own stylesheet next to its source.

pub mod components;

pub use components::*;
