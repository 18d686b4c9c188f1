//! Windowed grid index arithmetic.
//!
//! Both the inventory window widget and the legacy inventory screen show a
//! scrolled window onto a linear item list, laid out row-major with a fixed
//! number of items per row. [`GridWindow`] maps between a linear item index
//! and its `(row, column)` cell inside that window, and from a pixel offset
//! inside the grid area back to an item index.
//!
//! ```text
//!   items: 0 1 2 3 | 4 5 6 7 | 8 9 . .      items_per_row = 4
//!                  ^ top_index = 4          visible_rows  = 2
//!                  └── window: [4, 12)
//! ```

use pointclick_common::{Point, Rect, Size};

/// A cell position relative to the top-left of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Row, 0 = first visible row
    pub row: usize,
    /// Column within the row
    pub column: usize,
}

/// A scrolled window onto a row-major item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridWindow {
    items_per_row: usize,
    visible_rows: usize,
    top_index: usize,
}

impl GridWindow {
    /// Creates a window. `items_per_row` is raised to at least 1.
    #[must_use]
    pub fn new(items_per_row: usize, visible_rows: usize, top_index: usize) -> Self {
        Self {
            items_per_row: items_per_row.max(1),
            visible_rows,
            top_index,
        }
    }

    /// Items per row.
    #[must_use]
    pub const fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// First visible item index.
    #[must_use]
    pub const fn top_index(&self) -> usize {
        self.top_index
    }

    /// Number of slots in the window.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.items_per_row * self.visible_rows
    }

    /// One past the last index the window can show.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.top_index + self.capacity()
    }

    /// Whether the window reaches (or passes) the end of a list of `item_count` items.
    #[must_use]
    pub const fn reaches_end(&self, item_count: usize) -> bool {
        self.end() >= item_count
    }

    /// Whether `index` falls inside the window.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.top_index && index < self.end()
    }

    /// Maps a linear index to its cell in the window, or `None` if not visible.
    #[must_use]
    pub fn cell_of(&self, index: usize) -> Option<GridCell> {
        if !self.contains(index) {
            return None;
        }
        let relative = index - self.top_index;
        Some(GridCell {
            row: relative / self.items_per_row,
            column: relative % self.items_per_row,
        })
    }

    /// Pixel rectangle of `index` given the grid origin and cell size.
    #[must_use]
    pub fn cell_rect(&self, index: usize, origin: Point, cell: Size) -> Option<Rect> {
        self.cell_of(index).map(|c| {
            Rect::new(
                origin.x + c.column as i32 * cell.width,
                origin.y + c.row as i32 * cell.height,
                cell.width,
                cell.height,
            )
        })
    }

    /// Maps a pixel offset from the grid origin to a linear item index.
    ///
    /// Returns `None` for negative offsets, offsets past the last column or
    /// visible row, and indices outside `[0, item_count)`.
    #[must_use]
    pub fn index_at(&self, offset: Point, cell: Size, item_count: usize) -> Option<usize> {
        if offset.x < 0 || offset.y < 0 || cell.width <= 0 || cell.height <= 0 {
            return None;
        }
        let column = (offset.x / cell.width) as usize;
        if column >= self.items_per_row {
            return None;
        }
        let row = (offset.y / cell.height) as usize;
        if row >= self.visible_rows {
            return None;
        }
        let index = self.top_index + row * self.items_per_row + column;
        (index < item_count).then_some(index)
    }
}
