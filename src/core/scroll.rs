//! Scroll position memory for client-side navigation.
//!
//! Positions are keyed by path. Leaving a page saves its offset; pushing a
//! new entry scrolls to the top; going back or forward restores the saved
//! offset of the destination.

use std::collections::HashMap;

/// How the location changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// New history entry (link click).
    Push,
    /// Back/forward traversal.
    Pop,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollPositions {
    positions: HashMap<String, f64>,
    pending: Option<f64>,
}

impl ScrollPositions {
    /// Restore positions previously written by [`ScrollPositions::to_json`].
    ///
    /// Malformed input yields an empty memory.
    pub fn from_json(json: &str) -> Self {
        Self {
            positions: serde_json::from_str(json).unwrap_or_default(),
            pending: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.positions).unwrap_or_default()
    }

    /// Remember the offset of the page being left.
    pub fn save(&mut self, path: &str, offset: f64) {
        if offset.is_finite() {
            self.positions.insert(path.to_string(), offset.max(0.0));
        }
    }

    pub fn position(&self, path: &str) -> Option<f64> {
        self.positions.get(path).copied()
    }

    /// Decide where the destination page should scroll to.
    pub fn prepare(&mut self, path: &str, kind: NavigationKind) {
        self.pending = Some(match kind {
            NavigationKind::Push => 0.0,
            NavigationKind::Pop => self.position(path).unwrap_or(0.0),
        });
    }

    /// Take the offset decided by the last [`ScrollPositions::prepare`].
    pub fn take_pending(&mut self) -> Option<f64> {
        self.pending.take()
    }
}
