//! Utility modules for browser and logging operations.
//!
//! Provides:
//! - [`dom`] - Window, history, title and storage access
//! - [`log`] - Logging facade (browser console on wasm32, `tracing` natively)

pub mod dom;
pub mod log;
