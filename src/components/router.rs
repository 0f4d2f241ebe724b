//! Application router component.
//!
//! Handles path-based routing over the History API. Uses native `popstate`
//! events instead of leptos_router so the location source stays explicit.
//!
//! # Architecture
//!
//! - **[`LocationContext`] is the source of truth**: components read the
//!   current pathname from it, never from `window.location`
//! - **Title before location**: `document.title` is updated before the path
//!   signal changes, so effects observing the path read the new title
//! - **Boundaries**: expected route failures render in place; escalated
//!   failures surface through the `ErrorBoundary` fallback

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::content::Content;
use crate::components::layout::Layout;
use crate::config::SCROLL_STORAGE_KEY;
use crate::core::routes::{is_internal_href, normalize_path};
use crate::core::{
    NavigationKind, RouteOutcome, ScrollPositions, error_boundary, render_outcome, resolve,
};
use crate::models::{Screen, UnhandledError};
use crate::utils::dom;

// ============================================================================
// Location Context
// ============================================================================

/// Current location and navigation entry points.
///
/// `Copy` because every field is a reactive handle.
#[derive(Clone, Copy)]
pub struct LocationContext {
    path: RwSignal<String>,
    pathname: Memo<String>,
    scroll: StoredValue<ScrollPositions>,
}

impl LocationContext {
    pub fn new(initial_path: &str) -> Self {
        let path = RwSignal::new(normalize_path(initial_path));
        let saved = dom::read_session(SCROLL_STORAGE_KEY)
            .map(|json| ScrollPositions::from_json(&json))
            .unwrap_or_default();
        Self {
            path,
            pathname: Memo::new(move |_| path.get()),
            scroll: StoredValue::new(saved),
        }
    }

    /// Create the context from the browser location, provide it, and
    /// listen for back/forward navigation and page unload.
    pub fn install() -> Self {
        let location = Self::new(&dom::current_pathname());
        apply_title(&location.path.get_untracked());
        provide_context(location);

        #[cfg(target_arch = "wasm32")]
        {
            listen("popstate", move || location.on_popstate());
            // Reloads restore from sessionStorage, so the page being left saves too
            listen("pagehide", move || location.remember_scroll());
        }

        location
    }

    /// Current normalized pathname. Only notifies on actual changes.
    pub fn pathname(&self) -> Memo<String> {
        self.pathname
    }

    /// Navigate to `to` with a new history entry.
    pub fn navigate(&self, to: &str) {
        let to = normalize_path(to);
        if self.path.with_untracked(|current| *current == to) {
            return;
        }
        self.remember_scroll();
        dom::push_path(&to);
        self.commit(to, NavigationKind::Push);
    }

    /// Scroll offset the current page should move to, if navigation decided one.
    pub fn take_scroll_target(&self) -> Option<f64> {
        let mut target = None;
        self.scroll
            .update_value(|scroll| target = scroll.take_pending());
        target
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn on_popstate(&self) {
        self.remember_scroll();
        self.commit(normalize_path(&dom::current_pathname()), NavigationKind::Pop);
    }

    fn remember_scroll(&self) {
        let current = self.path.get_untracked();
        let offset = dom::scroll_y();
        self.scroll.update_value(|scroll| scroll.save(&current, offset));
        let json = self.scroll.with_value(ScrollPositions::to_json);
        dom::write_session(SCROLL_STORAGE_KEY, &json);
    }

    fn commit(&self, path: String, kind: NavigationKind) {
        apply_title(&path);
        self.scroll.update_value(|scroll| scroll.prepare(&path, kind));
        self.path.set(path);
    }
}

#[cfg(target_arch = "wasm32")]
fn listen(event: &str, handler: impl Fn() + 'static) {
    use wasm_bindgen::JsCast;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);

    if let Some(window) = dom::window()
        && window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
    {
        crate::utils::log::warn(&format!("failed to listen for {event} events"));
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

fn apply_title(path: &str) {
    if let Some(title) = resolve(path).document_title() {
        dom::set_document_title(&title);
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/` → Home
/// - `/about` → About
/// - anything else → 404 catch page
#[component]
pub fn AppRouter() -> impl IntoView {
    let location = use_context::<LocationContext>().expect("LocationContext must be provided");

    view! {
        <ErrorBoundary fallback=|errors| move || {
            let message = errors
                .get()
                .into_iter()
                .next()
                .map(|(_, error)| error.to_string())
                .unwrap_or_default();
            error_view(UnhandledError::new(message))
        }>
            {move || route_view(&location.pathname().get())}
        </ErrorBoundary>
    }
}

fn route_view(path: &str) -> Result<AnyView, UnhandledError> {
    match resolve(path) {
        RouteOutcome::EscalatedFailure(error) => Err(error),
        outcome => Ok(view! { <ScreenView screen=render_outcome(outcome) /> }.into_any()),
    }
}

fn error_view(error: UnhandledError) -> impl IntoView {
    let screen = error_boundary(&error);
    if let Some(title) = screen.document_title() {
        dom::set_document_title(title);
    }
    view! { <ScreenView screen=screen /> }
}

/// A screen inside the site layout.
#[component]
pub fn ScreenView(screen: Screen) -> impl IntoView {
    view! {
        <Layout>
            <Content page=screen.page />
        </Layout>
    }
}

// ============================================================================
// Links
// ============================================================================

/// Anchor that routes root-relative hrefs client-side.
///
/// Modified clicks (new tab, download, ...) keep the browser default.
#[component]
pub fn SiteLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_default();
    if !is_internal_href(&href) {
        return view! { <a href=href title=title class=class>{children()}</a> }.into_any();
    }

    let location = use_context::<LocationContext>().expect("LocationContext must be provided");
    let target = href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.meta_key()
            || ev.ctrl_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        location.navigate(&target);
    };

    view! { <a href=href title=title class=class on:click=on_click>{children()}</a> }.into_any()
}
