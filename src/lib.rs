//! Billing portal front end.
//!
//! Session, gateway and report logic compile on every target so they can be
//! tested natively. The Yew views and hooks only exist on `wasm32`.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
