//! Gated page: paywall or unlocked content, decided once per render.

pub mod controller;

pub use controller::{GatedPageController, GatedView, PageLoad};
