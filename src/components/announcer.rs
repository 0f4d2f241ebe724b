//! Route-change announcer.
//!
//! Screen readers announce the live region's text whenever it changes, so
//! client-side navigations are reported even though no page load happens.
//! State transitions live in [`Announcer`]; this component only wires them
//! to the reactive runtime.

use leptos::prelude::*;

use crate::components::router::LocationContext;
use crate::config::ROUTE_REGION_ID;
use crate::core::Announcer;
use crate::core::announcer::{LIVE_REGION_POLITENESS, VISUALLY_HIDDEN_STYLE};
use crate::utils::dom;

/// Visually hidden live region announcing route changes.
///
/// Renders nothing until effects run, i.e. until the client runtime owns
/// the page. Mount once per document.
#[component]
pub fn RouteAnnouncer() -> impl IntoView {
    let location = use_context::<LocationContext>().expect("LocationContext must be provided");
    let announcer = RwSignal::new(Announcer::new());

    // Effects only run once mounted in the browser
    Effect::new(move || announcer.update(Announcer::hydrate));

    Effect::new(move || {
        let path = location.pathname().get();
        announcer.update(|a| {
            a.observe(&path, dom::document_title);
        });
    });

    move || {
        announcer
            .with(|a| a.live_region().map(|region| region.message.to_string()))
            .map(|message| {
                view! {
                    <div
                        id=ROUTE_REGION_ID
                        aria-live=LIVE_REGION_POLITENESS
                        aria-atomic="true"
                        style=VISUALLY_HIDDEN_STYLE
                    >
                        {message}
                    </div>
                }
            })
    }
}
