//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Block`], [`Inline`] - Structured page content
//! - [`Page`], [`PageMeta`], [`LinkDescriptor`], [`Screen`] - What the document shell wraps
//! - [`CaughtRouteFailure`], [`UnhandledError`] - Inputs of the boundary handlers

mod content;
mod failure;
mod page;

pub use content::{Block, Inline};
pub use failure::{CaughtRouteFailure, UnhandledError};
pub use page::{LinkDescriptor, Page, PageMeta, Screen};
