//! Window geometry of the legacy inventory screen.

use pointclick_common::{Point, Rect, Size};

use crate::config::ScreenConfig;
use crate::windowing::GridWindow;

/// Clickable regions of the button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenButton {
    /// Switch to look mode
    Look,
    /// Back to arrow mode, dropping the held item
    Select,
    /// Close the screen with the held item
    Ok,
    /// Scroll up one row
    ScrollUp,
    /// Scroll down one row
    ScrollDown,
}

/// Computed layout for one redraw of the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Whole window
    pub window: Rect,
    /// Dark bar holding the item pictures
    pub item_bar: Rect,
    /// Size of one item cell (largest picture plus padding)
    pub cell: Size,
    /// Items per row
    pub items_per_row: usize,
    /// Items that fit in the bar at once
    pub visible_count: usize,
    /// Top of the button row
    pub button_row_y: i32,
    /// Look, select and OK buttons, in that order
    pub buttons: [Rect; 3],
    /// Scroll up button
    pub up_arrow: Rect,
    /// Scroll down button
    pub down_arrow: Rect,
    /// Whether the up arrow is shown
    pub show_up: bool,
    /// Whether the down arrow is shown
    pub show_down: bool,
    top_item: usize,
    item_count: usize,
    arrow_hit_height: i32,
}

impl ScreenLayout {
    /// Lays out the window for `item_count` items whose largest picture is
    /// `largest_sprite`, centred in `viewport`.
    #[must_use]
    pub fn compute(
        config: &ScreenConfig,
        viewport: Size,
        largest_sprite: Size,
        item_count: usize,
        top_item: usize,
        button_width: i32,
    ) -> Self {
        let per_row = config.icons_per_row.max(1);
        let padding = config.fixed(config.cell_padding);
        let border = config.fixed(config.border);
        let button_area = config.fixed(config.button_area_height);
        let arrow = config.arrow_button_size;

        let cell = largest_sprite.padded(padding).max(Size::new(1, 1));
        let max_item_area = viewport.height - button_area - config.fixed(config.margin);
        let fitting_rows = (max_item_area / cell.height).max(1) as usize;
        let needed_rows = item_count.div_ceil(per_row);
        let shown_rows = needed_rows.min(fitting_rows);

        let height = cell.height * shown_rows as i32 + padding + button_area;
        let width = (cell.width * per_row as i32 + padding).max(config.fixed(config.min_window_width));
        let window = Rect::new(
            viewport.width / 2 - width / 2,
            viewport.height / 2 - height / 2,
            width,
            height,
        );

        let button_row_y = window.bottom() - button_area;
        let item_bar = Rect::new(
            window.x + border,
            window.y + border,
            window.width - 2 * border,
            button_row_y - 1 - (window.y + border),
        );

        let button_y = button_row_y + config.fixed(2);
        let button_height = button_area - config.fixed(2);
        let buttons = [0, 1, 2].map(|i| {
            Rect::new(
                window.x + 2 + i * (button_width + 1),
                button_y,
                button_width,
                button_height,
            )
        });

        let arrow_x = window.right() - arrow;
        let up_arrow = Rect::new(arrow_x, button_row_y + config.fixed(2), arrow, arrow);
        let down_arrow = Rect::new(arrow_x, button_row_y + config.fixed(4) + arrow, arrow, arrow);

        let visible_count = fitting_rows * per_row;
        Self {
            window,
            item_bar,
            cell,
            items_per_row: per_row,
            visible_count,
            button_row_y,
            buttons,
            up_arrow,
            down_arrow,
            show_up: top_item > 0,
            show_down: top_item + visible_count < item_count,
            top_item,
            item_count,
            arrow_hit_height: config.fixed(4) + 2 * arrow,
        }
    }

    /// The visible window onto the item list.
    #[must_use]
    pub fn grid(&self) -> GridWindow {
        GridWindow::new(
            self.items_per_row,
            self.visible_count / self.items_per_row,
            self.top_item,
        )
    }

    /// Top-left of the first cell, one pixel inside the item bar.
    #[must_use]
    pub const fn grid_origin(&self) -> Point {
        Point::new(self.item_bar.x + 1, self.item_bar.y + 1)
    }

    /// Screen rectangle of a visible item cell.
    #[must_use]
    pub fn item_cell(&self, index: usize) -> Option<Rect> {
        self.grid().cell_rect(index, self.grid_origin(), self.cell)
    }

    /// Index of the item under `pointer`, if any.
    #[must_use]
    pub fn item_at(&self, pointer: Point) -> Option<usize> {
        if pointer.y >= self.button_row_y {
            return None;
        }
        self.grid()
            .index_at(pointer.offset_from(self.grid_origin()), self.cell, self.item_count)
    }

    /// Button row region under `pointer`, if any.
    ///
    /// Arrow regions are reported even when the arrow is hidden; the caller
    /// decides whether scrolling is possible.
    #[must_use]
    pub fn button_at(&self, pointer: Point) -> Option<ScreenButton> {
        if !self.window.contains(pointer) || pointer.y < self.button_row_y {
            return None;
        }
        if pointer.x >= self.up_arrow.x {
            if pointer.y < self.up_arrow.bottom() {
                return Some(ScreenButton::ScrollUp);
            }
            if pointer.y < self.button_row_y + self.arrow_hit_height {
                return Some(ScreenButton::ScrollDown);
            }
            return None;
        }
        let offset = pointer.x - self.window.x - 2;
        if offset < 0 {
            return None;
        }
        // Buttons are drawn one pixel apart; each gap pixel belongs to the button on its left
        match offset / (self.buttons[0].width + 1) {
            0 => Some(ScreenButton::Look),
            1 => Some(ScreenButton::Select),
            2 => Some(ScreenButton::Ok),
            _ => None,
        }
    }
}
