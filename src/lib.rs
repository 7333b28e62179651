//! # webapp-ui
//!
//! Browser utility layer for the Upload-Post web app, compiled to WASM with
//! the `hydrate` feature and natively for tests.
//!
//! This crate contains the toast notification center, timer-driven helpers
//! (debounce/throttle), and the small pure helpers page scripts rely on. With
//! `hydrate` enabled, the same helpers are exported to JavaScript and installed
//! on `window.AppUtils` via `bindings`.

pub mod app_utils;
#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod notifications;
pub mod timing;
pub mod util;
