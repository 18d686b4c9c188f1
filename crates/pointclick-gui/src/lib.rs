//! # PointClick GUI
//!
//! Inventory user interface for the PointClick engine.
//!
//! This crate provides:
//! - Windowing arithmetic mapping a flat item list onto a visible grid
//! - The inventory window control and its script binding
//! - The legacy modal inventory screen (layout, look/use state machine,
//!   frame loop)
//! - Screen lifecycle tracking (reentrancy, deferred room changes)
//! - Collaborator traits the host engine implements

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod host;
pub mod inventory_screen;
pub mod inventory_window;
pub mod lifecycle;
pub mod redraw;
pub mod script_api;
pub mod sprites;
pub mod windowing;

#[cfg(test)]
pub(crate) mod testing;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::host::*;
    pub use crate::inventory_screen::*;
    pub use crate::inventory_window::*;
    pub use crate::lifecycle::*;
    pub use crate::redraw::*;
    pub use crate::script_api::*;
    pub use crate::sprites::*;
    pub use crate::windowing::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use pointclick_common::{CharacterId, Size};

    #[test]
    fn test_widget_and_screen_share_redraw_flag() {
        let mut host = testing::ScriptedHost::with_items(3);
        let redraw = RedrawFlag::new();
        let mut window = InventoryWindow::new(Size::new(80, 44), redraw.clone());

        window.set_owner(Some(CharacterId::new(1)));
        assert!(redraw.take());

        // Cancelled screen leaves the flag alone
        let result = open_inventory_screen(
            &mut host,
            &ScreenLifecycle::new(),
            &redraw,
            &ScreenConfig::default(),
            Size::new(320, 200),
        );
        assert_eq!(result, Ok(-1));
        assert!(!redraw.is_requested());
    }
}
