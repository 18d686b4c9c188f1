//! Scripted host used by the unit tests.
//!
//! Implements every collaborator trait over plain in-memory state and
//! records each call so tests can drive the inventory screen frame by frame.

use std::collections::{HashMap, VecDeque};

use pointclick_common::{CharacterId, ItemId, MessageId, Point, Rect, RoomId, Size, SpriteId};

use crate::host::{
    CharacterInventories, CursorControl, FramePacer, InteractionMode, ItemEvent, ItemEventDispatcher,
    MessageDisplay, MouseButton, PointerInput, SceneControl, ScreenFrame, ScreenSurface, SpriteMetrics,
};
use crate::lifecycle::ScreenLifecycle;

/// Size of every item picture in the default setup.
pub const ITEM_SPRITE_SIZE: Size = Size::new(20, 16);

/// Width of the default button pictures.
pub const BUTTON_WIDTH: i32 = 30;

/// One frame of scripted input.
#[derive(Debug, Clone, Copy)]
pub struct InputFrame {
    pub pointer: Point,
    pub button: Option<MouseButton>,
    pub key: bool,
}

#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub player: CharacterId,
    pub inventories: HashMap<CharacterId, Vec<ItemId>>,
    pub counts: HashMap<(CharacterId, ItemId), u32>,
    pub names: HashMap<ItemId, String>,
    pub item_sprites: HashMap<ItemId, SpriteId>,
    pub sprites: HashMap<SpriteId, Size>,
    pub active: HashMap<CharacterId, ItemId>,

    pub frames: VecDeque<InputFrame>,
    pub pointer: Point,
    button: Option<MouseButton>,

    pub events: Vec<ItemEvent>,
    pub messages: Vec<MessageId>,
    pub rooms: Vec<RoomId>,
    pub cursors: Vec<InteractionMode>,
    pub inventory_cursor: Option<ItemId>,
    pub default_cursor_restored: bool,
    pub presented: Vec<ScreenFrame>,
    pub highlights: Vec<(Option<Rect>, Option<Rect>)>,
    pub cleared: bool,
    pub input_cleared: bool,
    pub frames_run: usize,
    pub game_updates: usize,

    /// Use-on events remove the active item from the player
    pub consume_on_use: bool,
    /// The next dispatched event requests this room change
    pub room_on_event: Option<(ScreenLifecycle, RoomId)>,
    /// Use-on handlers set this as the player's active item
    pub handler_sets_active: Option<ItemId>,
}

impl ScriptedHost {
    /// Player (character 1) holding items `1..=count`, with the built-in
    /// button pictures present.
    pub fn with_items(count: usize) -> Self {
        let mut host = Self {
            player: CharacterId::new(1),
            ..Self::default()
        };
        host.inventories.insert(host.player, Vec::new());
        for id in 1..=count as u32 {
            host.add_item(host.player, ItemId::new(id), &format!("Item {id}"));
        }
        for sprite in [2041, 2042, 2043] {
            host.sprites
                .insert(SpriteId::new(sprite), Size::new(BUTTON_WIDTH, 20));
        }
        host.sprites.insert(SpriteId::new(0), Size::new(8, 8));
        host
    }

    /// Gives items to a character as `(id, name)` pairs.
    pub fn give(&mut self, character: CharacterId, items: &[(u32, &str)]) {
        for &(id, name) in items {
            self.add_item(character, ItemId::new(id), name);
        }
    }

    fn add_item(&mut self, character: CharacterId, item: ItemId, name: &str) {
        self.inventories.entry(character).or_default().push(item);
        self.counts.insert((character, item), 1);
        self.names.insert(item, name.to_string());
        let sprite = SpriteId::new(100 + item.raw());
        self.item_sprites.insert(item, sprite);
        self.sprites.insert(sprite, ITEM_SPRITE_SIZE);
    }

    /// Removes an item type from a character.
    pub fn take_item(&mut self, character: CharacterId, item: ItemId) {
        if let Some(order) = self.inventories.get_mut(&character) {
            order.retain(|&held| held != item);
        }
        self.counts.insert((character, item), 0);
    }

    /// Queues a frame with the pointer at `pointer`.
    pub fn push_frame(&mut self, pointer: Point, button: Option<MouseButton>) {
        self.frames.push_back(InputFrame {
            pointer,
            button,
            key: false,
        });
    }

    /// Queues a frame with a keypress.
    pub fn push_key(&mut self) {
        self.frames.push_back(InputFrame {
            pointer: self.pointer,
            button: None,
            key: true,
        });
    }

    pub fn last_frame(&self) -> &ScreenFrame {
        self.presented.last().expect("screen was never presented")
    }
}

impl CharacterInventories for ScriptedHost {
    fn player(&self) -> CharacterId {
        self.player
    }

    fn inventory_order(&self, character: CharacterId) -> &[ItemId] {
        self.inventories
            .get(&character)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn held_count(&self, character: CharacterId, item: ItemId) -> u32 {
        self.counts.get(&(character, item)).copied().unwrap_or(0)
    }

    fn item_name(&self, item: ItemId) -> &str {
        self.names.get(&item).map_or("", String::as_str)
    }

    fn item_sprite(&self, item: ItemId) -> SpriteId {
        self.item_sprites
            .get(&item)
            .copied()
            .unwrap_or(SpriteId::new(0))
    }

    fn active_item(&self, character: CharacterId) -> Option<ItemId> {
        self.active.get(&character).copied()
    }

    fn set_active_item(&mut self, character: CharacterId, item: Option<ItemId>) {
        match item {
            Some(item) => self.active.insert(character, item),
            None => self.active.remove(&character),
        };
    }
}

impl SpriteMetrics for ScriptedHost {
    fn sprite_size(&self, sprite: SpriteId) -> Option<Size> {
        self.sprites.get(&sprite).copied()
    }
}

impl PointerInput for ScriptedHost {
    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn take_button(&mut self) -> Option<MouseButton> {
        self.button.take()
    }

    fn key_pressed(&mut self) -> bool {
        // Running out of input ends the screen like a keypress.
        let Some(frame) = self.frames.pop_front() else {
            return true;
        };
        self.pointer = frame.pointer;
        self.button = frame.button;
        frame.key
    }

    fn clear_input_buffer(&mut self) {
        self.input_cleared = true;
        self.button = None;
    }
}

impl CursorControl for ScriptedHost {
    fn set_cursor(&mut self, mode: InteractionMode) {
        self.cursors.push(mode);
    }

    fn set_inventory_cursor(&mut self, item: ItemId) {
        self.inventory_cursor = Some(item);
    }

    fn set_default_cursor(&mut self) {
        self.default_cursor_restored = true;
    }
}

impl FramePacer for ScriptedHost {
    fn next_frame(&mut self) {
        self.frames_run += 1;
    }

    fn update_game_once(&mut self) {
        self.game_updates += 1;
    }
}

impl ItemEventDispatcher for ScriptedHost {
    fn dispatch_item_event(&mut self, event: ItemEvent) {
        self.events.push(event);
        if let Some((lifecycle, room)) = self.room_on_event.take() {
            lifecycle.request_room_change(room);
        }
        if let ItemEvent::UseOn { active, .. } = event {
            if let Some(item) = self.handler_sets_active {
                self.active.insert(self.player, item);
            }
            if self.consume_on_use {
                self.take_item(self.player, active);
            }
        }
    }
}

impl SceneControl for ScriptedHost {
    fn change_room(&mut self, room: RoomId) {
        self.rooms.push(room);
    }
}

impl MessageDisplay for ScriptedHost {
    fn display_message(&mut self, message: MessageId) {
        self.messages.push(message);
    }
}

impl ScreenSurface for ScriptedHost {
    fn present(&mut self, frame: &ScreenFrame) {
        self.presented.push(frame.clone());
    }

    fn highlight(&mut self, erase: Option<Rect>, draw: Option<Rect>) {
        self.highlights.push((erase, draw));
    }

    fn clear(&mut self) {
        self.cleared = true;
    }
}
