//! Terminal client for the FlickPick movie recommendation service.
//!
//! Wires a debounced type-ahead search box, a recommendation results pane,
//! and a startup dataset dashboard to the backend's three GET endpoints.

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod normalize;
pub mod tui;
