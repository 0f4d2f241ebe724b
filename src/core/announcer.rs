//! Route-change announcements for assistive technology.
//!
//! [`Announcer`] is the state behind the visually hidden live region the
//! client mounts once per document. It renders nothing until the client
//! runtime has taken over ([`Announcer::hydrate`]), swallows the location
//! present at mount, and afterwards replaces its message on every path
//! change.

use crate::config::{HOME_LABEL, HOME_PATH};

/// `aria-live` politeness of the region.
pub const LIVE_REGION_POLITENESS: &str = "assertive";

/// Hidden from sight but still read by screen readers (never `display:none`).
pub const VISUALLY_HIDDEN_STYLE: &str = "border:0;clip-path:inset(100%);clip:rect(0 0 0 0);\
height:1px;margin:-1px;overflow:hidden;padding:0;position:absolute;width:1px;\
white-space:nowrap;word-wrap:normal";

/// State of the route-change live region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcer {
    hydrated: bool,
    is_first_render: bool,
    pending_message: String,
    /// Path seen by the last observation; repeats are ignored.
    last_path: Option<String>,
}

/// What the live region renders once hydrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveRegion<'a> {
    pub message: &'a str,
}

impl Announcer {
    pub fn new() -> Self {
        Self {
            hydrated: false,
            is_first_render: true,
            pending_message: String::new(),
            last_path: None,
        }
    }

    /// Mark the client runtime as active. Idempotent.
    pub fn hydrate(&mut self) {
        self.hydrated = true;
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Observe the current location.
    ///
    /// Returns the new message when this observation produced one. The first
    /// observation and unchanged paths produce nothing. `document_title` is
    /// only called for non-home paths.
    pub fn observe(
        &mut self,
        path: &str,
        document_title: impl FnOnce() -> String,
    ) -> Option<&str> {
        if self.last_path.as_deref() == Some(path) {
            return None;
        }
        self.last_path = Some(path.to_string());

        if self.is_first_render {
            self.is_first_render = false;
            return None;
        }

        self.pending_message = if path == HOME_PATH {
            announcement(HOME_LABEL)
        } else {
            announcement(&document_title())
        };
        Some(&self.pending_message)
    }

    /// Latest message, empty until the first navigation.
    pub fn message(&self) -> &str {
        &self.pending_message
    }

    /// Region to render, `None` before hydration.
    pub fn live_region(&self) -> Option<LiveRegion<'_>> {
        self.hydrated.then_some(LiveRegion {
            message: &self.pending_message,
        })
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new()
    }
}

/// Announcement text for a page label.
pub fn announcement(page_label: &str) -> String {
    format!("Navigated to {page_label}")
}
