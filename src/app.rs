//! Root application module.
//!
//! Contains the main App component and the [`SiteContext`] definition.

use leptos::prelude::*;

use crate::components::{AppRouter, Document, LocationContext};
use crate::config::SiteConfig;

/// Site configuration shared with every component.
///
/// Accessed from any child component using `use_context::<SiteContext>()`.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }
}

/// Root application component.
///
/// This component:
/// - Provides the [`SiteContext`] and the [`LocationContext`]
/// - Wraps routed content in the client [`Document`], which owns the
///   page's single route announcer
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(SiteContext::new(config));
    LocationContext::install();

    view! {
        <Document>
            <AppRouter />
        </Document>
    }
}
