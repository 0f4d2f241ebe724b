//! Scroll restoration across client-side navigations.

use leptos::prelude::*;

use crate::components::router::LocationContext;
use crate::utils::dom;

/// Applies the scroll offset decided by the last navigation.
///
/// Pushes land at the top, back/forward restores the saved offset.
#[component]
pub fn ScrollRestoration() -> impl IntoView {
    let location = use_context::<LocationContext>().expect("LocationContext must be provided");

    Effect::new(move || dom::set_manual_scroll_restoration());

    Effect::new(move || {
        location.pathname().track();
        if let Some(offset) = location.take_scroll_target() {
            dom::scroll_to(offset);
        }
    });
}
