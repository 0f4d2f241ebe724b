//! Core application logic, independent of the browser.
//!
//! - [`announcer`] - Route-change live region state
//! - [`boundary`] - Catch and error handlers
//! - [`document`] - Document shell rendering
//! - [`outcome`] - Route outcome classification
//! - [`routes`] - Route table and path normalization
//! - [`scroll`] - Scroll position memory

pub mod announcer;
pub mod boundary;
pub mod document;
pub mod error;
pub mod outcome;
pub mod routes;
pub mod scroll;

pub use announcer::Announcer;
pub use boundary::{catch_boundary, error_boundary, render_outcome};
pub use document::{DocumentShell, Renderer};
pub use error::{ConfigError, PrerenderError, RenderError};
pub use outcome::{ExpectedStatus, RouteOutcome};
pub use routes::{Route, resolve};
pub use scroll::{NavigationKind, ScrollPositions};
