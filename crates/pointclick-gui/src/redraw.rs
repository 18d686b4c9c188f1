//! Shared "GUI needs redraw" flag.
//!
//! Widgets never redraw synchronously; they raise this flag and the rendering
//! pass clears it once it has repainted the GUIs.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag telling the rendering pass that GUIs must be repainted.
///
/// Clones share the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    /// Creates a cleared flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the GUIs as needing a redraw.
    pub fn request(&self) {
        self.0.set(true);
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = RedrawFlag::new();
        let other = flag.clone();

        assert!(!flag.is_requested());
        other.request();
        assert!(flag.is_requested());
        assert!(flag.take());
        assert!(!other.is_requested());
        assert!(!flag.take());
    }
}
