//! Script-facing binding for inventory window controls.
//!
//! Scripts use plain integers: item numbers with `-1` for "no item", and
//! character numbers with `-1` for "the player". The handle borrows one
//! window plus read access to inventories for the duration of a call and
//! exposes nothing else of the widget.

use pointclick_common::{CharacterId, ItemId};

use crate::error::GuiResult;
use crate::host::CharacterInventories;
use crate::inventory_window::InventoryWindow;

/// Scoped script access to one inventory window.
pub struct InvWindowScript<'a, P: CharacterInventories + ?Sized> {
    window: &'a mut InventoryWindow,
    inventories: &'a P,
}

impl<'a, P: CharacterInventories + ?Sized> InvWindowScript<'a, P> {
    /// Binds a window for one script call.
    pub fn new(window: &'a mut InventoryWindow, inventories: &'a P) -> Self {
        Self {
            window,
            inventories,
        }
    }

    /// Cell width in pixels.
    pub fn item_width(&self) -> i32 {
        self.window.cell_width()
    }

    /// Sets the cell width in pixels.
    pub fn set_item_width(&mut self, width: i32) -> GuiResult<()> {
        self.window.set_cell_width(width)
    }

    /// Cell height in pixels.
    pub fn item_height(&self) -> i32 {
        self.window.cell_height()
    }

    /// Sets the cell height in pixels.
    pub fn set_item_height(&mut self, height: i32) -> GuiResult<()> {
        self.window.set_cell_height(height)
    }

    /// Index of the first visible item.
    pub fn top_item(&self) -> i32 {
        to_script_count(self.window.top_index())
    }

    /// Scrolls to `index`; negative values mean the top.
    pub fn set_top_item(&mut self, index: i32) {
        let index = usize::try_from(index).unwrap_or(0);
        self.window.set_top_index(index, self.inventories);
    }

    /// Items shown per row.
    pub fn items_per_row(&self) -> i32 {
        to_script_count(self.window.items_per_row())
    }

    /// Visible rows.
    pub fn row_count(&self) -> i32 {
        to_script_count(self.window.row_count())
    }

    /// Items held by the bound character.
    pub fn item_count(&self) -> i32 {
        to_script_count(self.window.item_count(self.inventories))
    }

    /// Item at `index`, or `-1` when out of range.
    pub fn item_at_index(&self, index: i32) -> i32 {
        let item = usize::try_from(index)
            .ok()
            .and_then(|index| self.window.item_at(index, self.inventories));
        ItemId::to_script(item)
    }

    /// Bound character number, or `-1` for the player.
    ///
    /// A character numbered above `i32::MAX` also reads as `-1`.
    pub fn character_to_use(&self) -> i32 {
        self.window
            .owner()
            .and_then(|character| i32::try_from(character.raw()).ok())
            .unwrap_or(-1)
    }

    /// Binds a character number; negative values mean the player.
    pub fn set_character_to_use(&mut self, character: i32) {
        let owner = u32::try_from(character).ok().map(CharacterId::new);
        self.window.set_owner(owner);
    }

    /// Scrolls up one row.
    pub fn scroll_up(&mut self) {
        self.window.scroll_up();
    }

    /// Scrolls down one row.
    pub fn scroll_down(&mut self) {
        self.window.scroll_down(self.inventories);
    }
}

fn to_script_count(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
