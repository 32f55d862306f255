//! Stroop Library
//!
//! A Stroop effect demo: a color word drawn in a (usually different) ink color
//! that re-rolls both on click. The view is rendered on the server for the
//! first paint and hydrated in the browser from the same initial state.
//!
//! - [`names`] picks random color names.
//! - [`view`] holds the stateful [`view::StroopView`].
//! - `web` (feature `web`) serves the pages.
//! - `client` (feature `hydrate`) is the WebAssembly hydration entry point.

// Module declarations
#[cfg(feature = "hydrate")]
pub mod client;
pub mod component;
pub mod config;
pub mod constants;
pub mod markup;
pub mod names;
pub mod view;
#[cfg(feature = "web")]
pub mod web;

pub use component::Component;
pub use names::{pick_random_color_name, ColorName, NameProvider, COLOR_NAMES};
pub use view::{DisplayState, StroopProps, StroopView};
