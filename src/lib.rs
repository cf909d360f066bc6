//! Terminal storefront client.
//!
//! A TUI over a remote product catalog with a local basket and a
//! two-step checkout. The design center is a synchronous event bus:
//! input translates keys into events, handlers mutate the central
//! state, and the view layer re-renders from immutable view models
//! each frame.

pub mod api;
pub mod app;
pub mod config;
pub mod events;
pub mod input;
pub mod models;
pub mod state;
pub mod terminal;
pub mod ui;
