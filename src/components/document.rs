//! Client side of the document shell.
//!
//! The envelope itself is prerendered (see [`crate::core::document`]); once
//! the client takes over, this component wraps the routed content and owns
//! the single announcer and scroll restoration of the page.

use leptos::prelude::*;

use crate::components::announcer::RouteAnnouncer;
use crate::components::scroll::ScrollRestoration;

#[component]
pub fn Document(children: Children) -> impl IntoView {
    view! {
        {children()}
        <RouteAnnouncer />
        <ScrollRestoration />
    }
}
