//! Legacy built-in inventory screen.
//!
//! A self-driving modal window listing the player's whole inventory, four
//! items per row, with look / select / OK buttons and scroll arrows. It owns
//! the frame loop until the player closes it or presses a key.
//!
//! # Flow
//!
//! ```text
//! open ──▶ prepare ──▶ redraw ──▶ ┌─ step (one frame) ─┐ ──▶ close
//!                        ▲        └────────┬───────────┘
//!                        └── after events / scrolling
//! ```
//!
//! A redraw may close the screen on its own: when the inventory is empty,
//! or when a script requested a room change while the screen was open.

mod interaction;
mod layout;


pub use layout::{ScreenButton, ScreenLayout};

use pointclick_common::{ItemId, Point, Size, SpriteId};
use tracing::{debug, error, info, warn};

use crate::config::ScreenConfig;
use crate::error::{ScreenError, ScreenResult};
use crate::host::{InteractionMode, ScreenFrame, ScreenHost, SpritePlacement};
use crate::lifecycle::ScreenLifecycle;
use crate::redraw::RedrawFlag;
use crate::sprites::{resolve_sprite, ButtonSprites};

/// An item shown on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayItem {
    /// Item type
    pub item: ItemId,
    /// Picture drawn for it
    pub sprite: SpriteId,
    /// Picture size
    pub size: Size,
}

/// Whether a redraw left the screen open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RedrawOutcome {
    Shown,
    Closed,
}

/// What the frame loop does after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Screen closed itself during a redraw
    Closed,
    /// Player finished; run the close sequence
    Finished(Option<ItemId>),
}

/// State of one open inventory screen.
#[derive(Debug)]
pub struct InventoryScreen {
    config: ScreenConfig,
    viewport: Size,
    lifecycle: ScreenLifecycle,
    buttons: ButtonSprites,
    mode: InteractionMode,
    pending: Option<ItemId>,
    top_item: usize,
    hovered: Option<usize>,
    items: Vec<DisplayItem>,
    layout: Option<ScreenLayout>,
}

impl InventoryScreen {
    /// Prepares a screen for `viewport`, resolving the button graphics.
    pub fn prepare<H: ScreenHost + ?Sized>(
        host: &H,
        lifecycle: ScreenLifecycle,
        config: ScreenConfig,
        viewport: Size,
    ) -> Self {
        let buttons = ButtonSprites::resolve(
            host,
            config.look_button_sprite,
            config.select_button_sprite,
            config.ok_button_sprite,
            config.fallback_sprite,
        );
        Self {
            config,
            viewport,
            lifecycle,
            buttons,
            mode: InteractionMode::Arrow,
            pending: None,
            top_item: 0,
            hovered: None,
            items: Vec::new(),
            layout: None,
        }
    }

    /// Current interaction mode.
    #[must_use]
    pub const fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Item held for "use on", if any.
    #[must_use]
    pub const fn pending_item(&self) -> Option<ItemId> {
        self.pending
    }

    /// First visible item index.
    #[must_use]
    pub const fn top_item(&self) -> usize {
        self.top_item
    }

    /// Index of the highlighted item, if any.
    #[must_use]
    pub const fn hovered_item(&self) -> Option<usize> {
        self.hovered
    }

    /// Items shown, in inventory order.
    #[must_use]
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Layout from the last redraw.
    #[must_use]
    pub const fn layout(&self) -> Option<&ScreenLayout> {
        self.layout.as_ref()
    }

    /// Button graphics in use.
    #[must_use]
    pub const fn buttons(&self) -> &ButtonSprites {
        &self.buttons
    }

    /// Runs the screen until the player closes it.
    ///
    /// Returns the item chosen with OK, or `None` when cancelled, when the
    /// inventory is empty, or when a room change closed the screen.
    pub fn run<H: ScreenHost + ?Sized>(mut self, host: &mut H) -> ScreenResult<Option<ItemId>> {
        if self.redraw(host)? == RedrawOutcome::Closed {
            self.clear(host);
            return Ok(None);
        }
        loop {
            match self.step(host)? {
                Flow::Continue => {},
                Flow::Closed => {
                    self.clear(host);
                    return Ok(None);
                },
                Flow::Finished(selection) => {
                    host.clear_input_buffer();
                    self.clear(host);
                    return Ok(selection);
                },
            }
        }
    }

    /// Re-reads the inventory and lays out and paints the whole screen.
    fn redraw<H: ScreenHost + ?Sized>(&mut self, host: &mut H) -> ScreenResult<RedrawOutcome> {
        let player = host.player();
        let order = host.inventory_order(player).to_vec();
        if order.is_empty() {
            info!("Inventory screen: nothing to select");
            host.display_message(self.config.empty_inventory_message);
            return Ok(RedrawOutcome::Closed);
        }

        if let Some(room) = self.lifecycle.take_room_change() {
            info!(room = room.raw(), "Inventory screen closing for room change");
            host.change_room(room);
            return Ok(RedrawOutcome::Closed);
        }

        self.items.clear();
        let mut largest = Size::ZERO;
        for &item in &order {
            if host.item_name(item).is_empty() {
                continue;
            }
            let requested = host.item_sprite(item);
            let resolved = resolve_sprite(&*host, requested, self.config.fallback_sprite);
            if resolved.fell_back {
                warn!(
                    item = item.raw(),
                    "Inventory item picture {} does not exist, using sprite {} instead",
                    requested.raw(),
                    resolved.sprite.raw()
                );
            }
            largest = largest.max(resolved.size);
            self.items.push(DisplayItem {
                item,
                sprite: resolved.sprite,
                size: resolved.size,
            });
        }

        if self.items.len() != order.len() {
            error!(
                counted = self.items.len(),
                reported = order.len(),
                "Inconsistent inventory calculations"
            );
            return Err(ScreenError::InconsistentInventory {
                counted: self.items.len(),
                reported: order.len(),
            });
        }

        // Items may have been lost since the last pass.
        let per_row = self.config.icons_per_row.max(1);
        while self.top_item > 0 && self.top_item >= self.items.len() {
            self.top_item = self.top_item.saturating_sub(per_row);
        }

        let layout = ScreenLayout::compute(
            &self.config,
            self.viewport,
            largest,
            self.items.len(),
            self.top_item,
            self.buttons.button_width(),
        );
        host.present(&self.frame(&layout));
        host.set_cursor(self.mode);
        self.layout = Some(layout);
        self.hovered = None;
        debug!(
            items = self.items.len(),
            top_item = self.top_item,
            mode = ?self.mode,
            "Inventory screen redrawn"
        );
        Ok(RedrawOutcome::Shown)
    }

    fn frame(&self, layout: &ScreenLayout) -> ScreenFrame {
        let items = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, shown)| {
                let cell = layout.item_cell(index)?;
                Some(SpritePlacement {
                    sprite: shown.sprite,
                    position: Point::new(
                        cell.x + cell.width / 2 - shown.size.width / 2,
                        cell.y + cell.height / 2 - shown.size.height / 2,
                    ),
                })
            })
            .collect();

        let [look, select, ok] = layout.buttons;
        ScreenFrame {
            window: layout.window,
            item_bar: layout.item_bar,
            items,
            buttons: [
                SpritePlacement {
                    sprite: self.buttons.look.sprite,
                    position: look.origin(),
                },
                SpritePlacement {
                    sprite: self.buttons.select.sprite,
                    position: select.origin(),
                },
                SpritePlacement {
                    sprite: self.buttons.ok.sprite,
                    position: ok.origin(),
                },
            ],
            up_arrow: layout.show_up.then_some(layout.up_arrow),
            down_arrow: layout.show_down.then_some(layout.down_arrow),
        }
    }

    fn clear<H: ScreenHost + ?Sized>(&self, host: &mut H) {
        host.clear();
        host.set_default_cursor();
    }
}

/// Opens the inventory screen and runs it to completion.
///
/// Refused with [`ScreenError::AlreadyOpen`] while another inventory screen
/// is open.
pub fn run_inventory_screen<H: ScreenHost + ?Sized>(
    host: &mut H,
    lifecycle: &ScreenLifecycle,
    config: &ScreenConfig,
    viewport: Size,
) -> ScreenResult<Option<ItemId>> {
    let _session = lifecycle.enter()?;
    info!("Inventory screen opened");
    let screen = InventoryScreen::prepare(&*host, lifecycle.clone(), config.clone(), viewport);
    let selection = screen.run(host)?;
    info!(selection = ?selection.map(ItemId::raw), "Inventory screen closed");
    Ok(selection)
}

/// Script entry point: runs the inventory screen and makes the chosen item
/// the player's active item.
///
/// Returns the chosen item number, or `-1` when nothing was chosen or the
/// screen was already open. Fatal inventory errors are passed on.
pub fn open_inventory_screen<H: ScreenHost + ?Sized>(
    host: &mut H,
    lifecycle: &ScreenLifecycle,
    redraw: &RedrawFlag,
    config: &ScreenConfig,
    viewport: Size,
) -> ScreenResult<i32> {
    let selection = match run_inventory_screen(host, lifecycle, config, viewport) {
        Ok(selection) => selection,
        Err(ScreenError::AlreadyOpen { .. }) => return Ok(-1),
        Err(e) => return Err(e),
    };
    if let Some(item) = selection {
        let player = host.player();
        host.set_active_item(player, Some(item));
        redraw.request();
        host.set_cursor(InteractionMode::Use);
    }
    Ok(ItemId::to_script(selection))
}
