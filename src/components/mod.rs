//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`document`] - Client document shell (announcer, scroll restoration)
//! - [`announcer`] - Route-change live region
//! - [`layout`] - Header, navigation and footer
//! - [`content`] - Structured page content
//! - [`scroll`] - Scroll restoration

pub mod announcer;
pub mod content;
pub mod document;
pub mod layout;
pub mod router;
pub mod scroll;

pub use document::Document;
pub use router::{AppRouter, LocationContext};
