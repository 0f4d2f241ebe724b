//! Personal portfolio site.
//!
//! The client is a Leptos CSR app ([`App`]); the `tubone-prerender` binary
//! renders the same routes into static documents with [`Renderer`](crate::core::Renderer).

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod pages;
#[cfg(not(target_arch = "wasm32"))]
pub mod prerender;
pub mod utils;

pub use app::App;
