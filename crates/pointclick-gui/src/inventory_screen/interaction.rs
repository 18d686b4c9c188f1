//! Per-frame input handling and the look/use mode state machine.

use pointclick_common::{ItemId, Point};
use tracing::debug;

use super::{Flow, InventoryScreen, RedrawOutcome, ScreenButton};
use crate::error::ScreenResult;
use crate::host::{InteractionMode, ItemEvent, MouseButton, ScreenHost};

impl InventoryScreen {
    /// Runs one frame: key check, frame tick, hover tracking and at most one
    /// mouse click.
    pub(super) fn step<H: ScreenHost + ?Sized>(&mut self, host: &mut H) -> ScreenResult<Flow> {
        if host.key_pressed() {
            debug!("Inventory screen cancelled by keypress");
            return Ok(Flow::Finished(None));
        }

        host.next_frame();

        let pointer = host.pointer_position();
        let Some(layout) = self.layout.as_ref() else {
            return Ok(Flow::Closed);
        };
        let hovered = layout.item_at(pointer);

        match host.take_button() {
            Some(MouseButton::Left) => self.left_click(host, pointer, hovered),
            Some(MouseButton::Right) => {
                let next = match self.mode {
                    InteractionMode::Arrow => InteractionMode::Look,
                    InteractionMode::Look | InteractionMode::Use => InteractionMode::Arrow,
                };
                self.switch_mode(host, next);
                Ok(Flow::Continue)
            },
            None => {
                if hovered != self.hovered {
                    self.redraw_hover(host, hovered);
                }
                Ok(Flow::Continue)
            },
        }
    }

    fn left_click<H: ScreenHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer: Point,
        hovered: Option<usize>,
    ) -> ScreenResult<Flow> {
        let Some(layout) = self.layout.as_ref() else {
            return Ok(Flow::Closed);
        };
        if !layout.window.contains(pointer) {
            return Ok(Flow::Continue);
        }

        if pointer.y < layout.button_row_y {
            return match hovered {
                Some(index) => self.click_item(host, self.items[index].item),
                None => Ok(Flow::Continue),
            };
        }

        let per_row = layout.items_per_row;
        let visible = layout.visible_count;
        match layout.button_at(pointer) {
            Some(ScreenButton::ScrollUp) if self.top_item > 0 => {
                self.top_item = self.top_item.saturating_sub(per_row);
                debug!(top_item = self.top_item, "Inventory screen scrolled up");
                self.redraw_flow(host)
            },
            Some(ScreenButton::ScrollDown) if self.top_item + visible < self.items.len() => {
                self.top_item += per_row;
                debug!(top_item = self.top_item, "Inventory screen scrolled down");
                self.redraw_flow(host)
            },
            Some(ScreenButton::Look) => {
                self.switch_mode(host, InteractionMode::Look);
                Ok(Flow::Continue)
            },
            Some(ScreenButton::Select) => {
                self.switch_mode(host, InteractionMode::Arrow);
                Ok(Flow::Continue)
            },
            Some(ScreenButton::Ok) => Ok(Flow::Finished(self.pending)),
            Some(ScreenButton::ScrollUp | ScreenButton::ScrollDown) | None => Ok(Flow::Continue),
        }
    }

    fn click_item<H: ScreenHost + ?Sized>(&mut self, host: &mut H, item: ItemId) -> ScreenResult<Flow> {
        match (self.mode, self.pending) {
            (InteractionMode::Look, _) => {
                debug!(item = item.raw(), "Looking at inventory item");
                host.dispatch_item_event(ItemEvent::Look { item });
                host.update_game_once();
                self.mode = InteractionMode::Arrow;
                self.redraw_flow(host)
            },
            (InteractionMode::Use, Some(active)) => {
                debug!(active = active.raw(), target = item.raw(), "Using inventory item on item");
                let player = host.player();
                let previous = host.active_item(player);
                host.set_active_item(player, Some(active));
                host.dispatch_item_event(ItemEvent::UseOn {
                    active,
                    target: item,
                });
                // Keep whatever active item the handler chose.
                if host.active_item(player) == Some(active) {
                    host.set_active_item(player, previous);
                }
                host.update_game_once();

                if host.held_count(player, active) == 0 {
                    debug!(item = active.raw(), "Active item used up");
                    self.pending = None;
                    self.mode = InteractionMode::Arrow;
                    host.set_cursor(InteractionMode::Arrow);
                }
                self.redraw_flow(host)
            },
            (InteractionMode::Arrow | InteractionMode::Use, _) => {
                debug!(item = item.raw(), "Picked up inventory item");
                self.pending = Some(item);
                self.mode = InteractionMode::Use;
                host.set_inventory_cursor(item);
                host.set_cursor(InteractionMode::Use);
                Ok(Flow::Continue)
            },
        }
    }

    /// Switches mode from a button or right click, dropping any held item.
    fn switch_mode<H: ScreenHost + ?Sized>(&mut self, host: &mut H, mode: InteractionMode) {
        debug!(from = ?self.mode, to = ?mode, "Inventory screen mode changed");
        self.mode = mode;
        self.pending = None;
        host.set_cursor(mode);
    }

    fn redraw_hover<H: ScreenHost + ?Sized>(&mut self, host: &mut H, hovered: Option<usize>) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let erase = self.hovered.and_then(|index| layout.item_cell(index));
        let draw = hovered.and_then(|index| layout.item_cell(index));
        host.highlight(erase, draw);
        self.hovered = hovered;
    }

    fn redraw_flow<H: ScreenHost + ?Sized>(&mut self, host: &mut H) -> ScreenResult<Flow> {
        Ok(match self.redraw(host)? {
            RedrawOutcome::Shown => Flow::Continue,
            RedrawOutcome::Closed => Flow::Closed,
        })
    }
}
