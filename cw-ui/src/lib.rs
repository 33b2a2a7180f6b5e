//! Shared Dioxus components and browser bridge for the CoastalWatch dashboard.
//!
//! This crate provides:
//! - `js_bridge`: wrappers for browser calls (timers, geolocation, alerts) via `js_sys`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `charts`: SVG string builders for the analytics charts
//! - `components`: reusable RSX components (map, alert overlay, badges, ...)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod state;
