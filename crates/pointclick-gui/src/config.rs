//! Legacy inventory screen configuration.
//!
//! All layout constants of the built-in inventory screen. Pixel values are
//! given at 1x and multiplied by `pixel_scale` when laid out, except the
//! arrow button size which is always in real pixels.

use pointclick_common::{MessageId, SpriteId};
use serde::{Deserialize, Serialize};

/// Layout and resource settings for the legacy inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Multiplier applied to fixed pixel sizes (1 = low-res games)
    pub pixel_scale: i32,
    /// Height of the button row at the bottom of the window
    pub button_area_height: i32,
    /// Vertical space kept free around the window
    pub margin: i32,
    /// Padding added around each item picture
    pub cell_padding: i32,
    /// Inset of the item bar from the window edge
    pub border: i32,
    /// Minimum window width
    pub min_window_width: i32,
    /// Side of the square scroll arrow buttons (unscaled)
    pub arrow_button_size: i32,
    /// Items per row; the legacy layout always used 4
    pub icons_per_row: usize,
    /// "Look" button picture
    pub look_button_sprite: SpriteId,
    /// "Select" button picture
    pub select_button_sprite: SpriteId,
    /// "OK" button picture
    pub ok_button_sprite: SpriteId,
    /// Substitute for missing pictures
    pub fallback_sprite: SpriteId,
    /// Message shown when there is nothing to select
    pub empty_inventory_message: MessageId,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            pixel_scale: 1,
            button_area_height: 30,
            margin: 20,
            cell_padding: 4,
            border: 2,
            min_window_width: 105,
            arrow_button_size: 11,
            icons_per_row: 4,
            look_button_sprite: SpriteId::new(2041),
            select_button_sprite: SpriteId::new(2042),
            ok_button_sprite: SpriteId::new(2043),
            fallback_sprite: SpriteId::new(0),
            empty_inventory_message: MessageId::new(996),
        }
    }
}

impl ScreenConfig {
    /// Scales a fixed 1x pixel size.
    #[must_use]
    pub const fn fixed(&self, pixels: i32) -> i32 {
        pixels * self.pixel_scale
    }

    /// Clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.pixel_scale = self.pixel_scale.clamp(1, 8);
        self.button_area_height = self.button_area_height.clamp(1, 200);
        self.margin = self.margin.clamp(0, 200);
        self.cell_padding = self.cell_padding.clamp(0, 64);
        self.border = self.border.clamp(0, 32);
        self.min_window_width = self.min_window_width.clamp(1, 4096);
        self.arrow_button_size = self.arrow_button_size.clamp(3, 64);
        self.icons_per_row = self.icons_per_row.clamp(1, 16);
    }
}
