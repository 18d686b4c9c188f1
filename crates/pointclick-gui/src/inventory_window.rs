//! Inventory window GUI control.
//!
//! An inventory window shows a scrollable grid of the items held by one
//! character. It is owned by a GUI, driven by script calls and queried by
//! the GUI pass for pointer hits. Mutations raise the shared [`RedrawFlag`]
//! instead of repainting.

use pointclick_common::{CharacterId, ItemId, Point, Size};
use tracing::debug;

use crate::error::{GuiError, GuiResult};
use crate::host::CharacterInventories;
use crate::redraw::RedrawFlag;
use crate::windowing::GridWindow;

/// Default cell width for new inventory windows.
pub const DEFAULT_CELL_WIDTH: i32 = 40;

/// Default cell height for new inventory windows.
pub const DEFAULT_CELL_HEIGHT: i32 = 22;

/// A scrollable grid of one character's inventory items.
#[derive(Debug, Clone)]
pub struct InventoryWindow {
    /// Character shown; `None` = the current player
    owner: Option<CharacterId>,
    /// Control size in pixels
    size: Size,
    /// Size of one item slot
    cell: Size,
    /// First visible item index
    top_index: usize,
    /// Derived from `size` and `cell`
    items_per_row: usize,
    /// Derived from `size` and `cell`
    row_count: usize,
    redraw: RedrawFlag,
}

impl InventoryWindow {
    /// Creates an inventory window of the given pixel size with default cells.
    #[must_use]
    pub fn new(size: Size, redraw: RedrawFlag) -> Self {
        let mut window = Self {
            owner: None,
            size,
            cell: Size::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT),
            top_index: 0,
            items_per_row: 1,
            row_count: 1,
            redraw,
        };
        window.recalculate_cells();
        window
    }

    /// Bound character, `None` meaning the player.
    #[must_use]
    pub const fn owner(&self) -> Option<CharacterId> {
        self.owner
    }

    /// Rebinds the window to another character and scrolls back to the top.
    pub fn set_owner(&mut self, owner: Option<CharacterId>) {
        self.owner = owner;
        self.top_index = 0;
        self.redraw.request();
    }

    /// The character whose items are actually shown.
    pub fn displayed_character<P: CharacterInventories + ?Sized>(&self, inventories: &P) -> CharacterId {
        self.owner.unwrap_or_else(|| inventories.player())
    }

    /// Control size in pixels.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Resizes the control and recomputes the grid.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.recalculate_cells();
        self.redraw.request();
    }

    /// Cell width in pixels.
    #[must_use]
    pub const fn cell_width(&self) -> i32 {
        self.cell.width
    }

    /// Cell height in pixels.
    #[must_use]
    pub const fn cell_height(&self) -> i32 {
        self.cell.height
    }

    /// Sets the cell width and recomputes the grid.
    pub fn set_cell_width(&mut self, width: i32) -> GuiResult<()> {
        if width <= 0 {
            return Err(GuiError::InvalidCellSize {
                dimension: "width",
                value: width,
            });
        }
        self.cell.width = width;
        self.recalculate_cells();
        self.redraw.request();
        Ok(())
    }

    /// Sets the cell height and recomputes the grid.
    pub fn set_cell_height(&mut self, height: i32) -> GuiResult<()> {
        if height <= 0 {
            return Err(GuiError::InvalidCellSize {
                dimension: "height",
                value: height,
            });
        }
        self.cell.height = height;
        self.recalculate_cells();
        self.redraw.request();
        Ok(())
    }

    /// Items shown per row.
    #[must_use]
    pub const fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// First visible item index.
    #[must_use]
    pub const fn top_index(&self) -> usize {
        self.top_index
    }

    /// Scrolls so `index` is the first visible item, clamped to the item list.
    pub fn set_top_index<P: CharacterInventories + ?Sized>(&mut self, index: usize, inventories: &P) {
        let last = self.item_count(inventories).saturating_sub(1);
        let index = index.min(last);
        if self.top_index != index {
            self.top_index = index;
            self.redraw.request();
        }
    }

    /// Scrolls up one row, stopping at the top.
    pub fn scroll_up(&mut self) {
        if self.top_index == 0 {
            return;
        }
        self.top_index = self.top_index.saturating_sub(self.items_per_row);
        debug!(top_index = self.top_index, "Inventory window scrolled up");
        self.redraw.request();
    }

    /// Scrolls down one row unless the last item is already visible.
    pub fn scroll_down<P: CharacterInventories + ?Sized>(&mut self, inventories: &P) {
        if self.grid().reaches_end(self.item_count(inventories)) {
            return;
        }
        self.top_index += self.items_per_row;
        debug!(top_index = self.top_index, "Inventory window scrolled down");
        self.redraw.request();
    }

    /// Number of items held by the displayed character.
    pub fn item_count<P: CharacterInventories + ?Sized>(&self, inventories: &P) -> usize {
        inventories
            .inventory_order(self.displayed_character(inventories))
            .len()
    }

    /// Item at `index` in the displayed character's inventory.
    pub fn item_at<P: CharacterInventories + ?Sized>(&self, index: usize, inventories: &P) -> Option<ItemId> {
        inventories
            .inventory_order(self.displayed_character(inventories))
            .get(index)
            .copied()
    }

    /// The visible window onto the item list.
    #[must_use]
    pub fn grid(&self) -> GridWindow {
        GridWindow::new(self.items_per_row, self.row_count, self.top_index)
    }

    /// Item under a pointer offset relative to the control's top-left corner.
    pub fn item_under_offset<P: CharacterInventories + ?Sized>(
        &self,
        offset: Point,
        inventories: &P,
    ) -> Option<ItemId> {
        let index = self
            .grid()
            .index_at(offset, self.cell, self.item_count(inventories))?;
        self.item_at(index, inventories)
    }

    fn recalculate_cells(&mut self) {
        self.items_per_row = (self.size.width / self.cell.width).max(1) as usize;
        self.row_count = (self.size.height / self.cell.height).max(1) as usize;
    }
}
