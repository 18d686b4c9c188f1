//! Collaborator traits the GUI core calls into.
//!
//! Rendering, sprite storage, input polling, frame pacing, message boxes and
//! the script event system all live outside this crate. The inventory window
//! only needs [`CharacterInventories`]; the legacy inventory screen needs the
//! full [`ScreenHost`] bundle.

use pointclick_common::{CharacterId, ItemId, MessageId, Point, Rect, RoomId, Size, SpriteId};
use serde::{Deserialize, Serialize};

/// Mouse buttons the inventory screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
}

/// Interaction mode, also used as the mouse cursor shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Plain pointer; clicking an item picks it up
    #[default]
    Arrow,
    /// Next item click looks at the item
    Look,
    /// An item is held; next item click uses it on another
    Use,
}

/// Item interaction raised by the inventory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemEvent {
    /// Look at an item
    Look {
        /// Item looked at
        item: ItemId,
    },
    /// Use the active item on another item
    UseOn {
        /// Item being used (the active item)
        active: ItemId,
        /// Item it is used on
        target: ItemId,
    },
}

impl ItemEvent {
    /// The item the event was raised on.
    #[must_use]
    pub const fn target(&self) -> ItemId {
        match *self {
            Self::Look { item } => item,
            Self::UseOn { target, .. } => target,
        }
    }
}

/// Read and limited write access to character inventories.
pub trait CharacterInventories {
    /// The current player character.
    fn player(&self) -> CharacterId;

    /// Ordered list of item types the character holds (one entry per type).
    fn inventory_order(&self, character: CharacterId) -> &[ItemId];

    /// How many of `item` the character holds.
    fn held_count(&self, character: CharacterId, item: ItemId) -> u32;

    /// Display name of an item type. Items with an empty name are hidden
    /// from the legacy inventory screen.
    fn item_name(&self, item: ItemId) -> &str;

    /// Inventory picture of an item type.
    fn item_sprite(&self, item: ItemId) -> SpriteId;

    /// The character's active (cursor) item.
    fn active_item(&self, character: CharacterId) -> Option<ItemId>;

    /// Sets the character's active item.
    fn set_active_item(&mut self, character: CharacterId, item: Option<ItemId>);
}

/// Sprite dimension lookup.
pub trait SpriteMetrics {
    /// Size of a sprite, or `None` when the sprite does not exist.
    fn sprite_size(&self, sprite: SpriteId) -> Option<Size>;
}

/// Pointer and keyboard state.
pub trait PointerInput {
    /// Current pointer position in screen coordinates.
    fn pointer_position(&self) -> Point;

    /// Takes the button clicked since the last call, if any.
    fn take_button(&mut self) -> Option<MouseButton>;

    /// Whether a key was pressed (consumes the key).
    fn key_pressed(&mut self) -> bool;

    /// Discards any buffered key and button presses.
    fn clear_input_buffer(&mut self);
}

/// Mouse cursor control.
pub trait CursorControl {
    /// Shows the cursor for an interaction mode.
    fn set_cursor(&mut self, mode: InteractionMode);

    /// Switches the use cursor graphic to the given item.
    fn set_inventory_cursor(&mut self, item: ItemId);

    /// Restores the game's default cursor.
    fn set_default_cursor(&mut self);
}

/// Frame pacing. Each call blocks until the next game frame.
pub trait FramePacer {
    /// Advances one frame tick, servicing audio and refreshing the screen.
    fn next_frame(&mut self);

    /// Runs one game update so script side effects reach the screen.
    fn update_game_once(&mut self) {}
}

/// Script event dispatch for inventory items.
///
/// Dispatch is synchronous and may change inventories or request a room
/// change through [`crate::ScreenLifecycle::request_room_change`].
pub trait ItemEventDispatcher {
    /// Runs the script handler for an item event.
    fn dispatch_item_event(&mut self, event: ItemEvent);
}

/// Room (scene) control.
pub trait SceneControl {
    /// Switches to another room.
    fn change_room(&mut self, room: RoomId);
}

/// Blocking message box display.
pub trait MessageDisplay {
    /// Shows a message and waits until the player dismisses it.
    fn display_message(&mut self, message: MessageId);
}

/// A sprite placed on the inventory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpritePlacement {
    /// Sprite to draw
    pub sprite: SpriteId,
    /// Top-left corner on screen
    pub position: Point,
}

/// Everything the renderer needs to paint the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenFrame {
    /// Window background
    pub window: Rect,
    /// Item bar inside the window
    pub item_bar: Rect,
    /// Visible item pictures
    pub items: Vec<SpritePlacement>,
    /// Look, select and OK buttons, in that order
    pub buttons: [SpritePlacement; 3],
    /// Up arrow, if shown
    pub up_arrow: Option<Rect>,
    /// Down arrow, if shown
    pub down_arrow: Option<Rect>,
}

/// Drawing surface for the legacy inventory screen.
pub trait ScreenSurface {
    /// Paints the whole screen.
    fn present(&mut self, frame: &ScreenFrame);

    /// Erases the previous hover rectangle and draws the new one.
    fn highlight(&mut self, erase: Option<Rect>, draw: Option<Rect>);

    /// Removes the screen.
    fn clear(&mut self);
}

/// Every collaborator the legacy inventory screen needs.
pub trait ScreenHost:
    CharacterInventories
    + SpriteMetrics
    + PointerInput
    + CursorControl
    + FramePacer
    + ItemEventDispatcher
    + SceneControl
    + MessageDisplay
    + ScreenSurface
{
}

impl<T> ScreenHost for T where
    T: CharacterInventories
        + SpriteMetrics
        + PointerInput
        + CursorControl
        + FramePacer
        + ItemEventDispatcher
        + SceneControl
        + MessageDisplay
        + ScreenSurface
{
}
