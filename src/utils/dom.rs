//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{ScrollRestoration, Storage, Window};

use crate::config::HOME_PATH;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Read a sessionStorage entry.
pub fn read_session(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}

/// Write a sessionStorage entry. Quota errors are ignored.
pub fn write_session(key: &str, value: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(key, value);
    }
}

// =============================================================================
// Document
// =============================================================================

/// Current `document.title`, empty when unavailable.
pub fn document_title() -> String {
    window()
        .and_then(|w| w.document())
        .map(|d| d.title())
        .unwrap_or_default()
}

pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current `location.pathname`.
pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| HOME_PATH.to_string())
}

/// Push a new history entry for `path` without reloading.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// Vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to(offset: f64) {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, offset);
    }
}

/// Take scroll restoration away from the browser.
pub fn set_manual_scroll_restoration() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }
}
