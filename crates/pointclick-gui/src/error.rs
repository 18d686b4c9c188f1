//! Error types for the GUI crate.

use thiserror::Error;

/// Errors from inventory window widget mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuiError {
    /// Cell dimension was zero or negative
    #[error("invalid inventory cell {dimension}: {value} (must be positive)")]
    InvalidCellSize {
        /// Which dimension was rejected ("width" or "height")
        dimension: &'static str,
        /// The rejected value
        value: i32,
    },
}

/// Result type for widget operations.
pub type GuiResult<T> = Result<T, GuiError>;

/// Errors from the legacy inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// Displayable items do not match the reported inventory count.
    ///
    /// This means the inventory state is corrupt and cannot be shown.
    #[error("inconsistent inventory calculations: counted {counted} displayable items, inventory reports {reported}")]
    InconsistentInventory {
        /// Items with a display name
        counted: usize,
        /// Items the inventory reports
        reported: usize,
    },

    /// The screen is already open
    #[error("inventory screen is already open (depth {depth})")]
    AlreadyOpen {
        /// Current nesting depth
        depth: u32,
    },
}

impl ScreenError {
    /// Whether the error means engine state is corrupt and the process must stop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InconsistentInventory { .. })
    }
}

/// Result type for inventory screen operations.
pub type ScreenResult<T> = Result<T, ScreenError>;
