//! Headless host: game state, recorded input and a logging surface.

use pointclick_common::{CharacterId, ItemId, MessageId, Point, Rect, RoomId, Size, SpriteId};
use pointclick_gui::{
    CharacterInventories, CursorControl, FramePacer, InteractionMode, ItemEvent, ItemEventDispatcher,
    MessageDisplay, MouseButton, PointerInput, SceneControl, ScreenFrame, ScreenLifecycle, ScreenSurface,
    SpriteMetrics,
};
use tracing::{debug, info};

use crate::game_state::GameState;
use crate::session::SessionPlayer;

/// Runs the inventory screen without a display.
#[derive(Debug)]
pub struct HeadlessHost {
    state: GameState,
    input: SessionPlayer,
    lifecycle: ScreenLifecycle,
    room: Option<RoomId>,
    cursor: InteractionMode,
    cursor_item: Option<ItemId>,
    last_frame: Option<ScreenFrame>,
    game_updates: u64,
    transcript: Vec<String>,
}

impl HeadlessHost {
    /// Creates a host. `lifecycle` must be the one the screen is opened with
    /// so room changes requested by item reactions are deferred to it.
    #[must_use]
    pub fn new(state: GameState, input: SessionPlayer, lifecycle: ScreenLifecycle) -> Self {
        Self {
            state,
            input,
            lifecycle,
            room: None,
            cursor: InteractionMode::Arrow,
            cursor_item: None,
            last_frame: None,
            game_updates: 0,
            transcript: Vec::new(),
        }
    }

    /// Game state, including inventories changed by reactions.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current room, once changed.
    #[must_use]
    pub const fn room(&self) -> Option<RoomId> {
        self.room
    }

    /// Cursor currently shown.
    #[must_use]
    pub const fn cursor(&self) -> InteractionMode {
        self.cursor
    }

    /// Last frame the screen presented.
    #[must_use]
    pub const fn last_frame(&self) -> Option<&ScreenFrame> {
        self.last_frame.as_ref()
    }

    /// Frames played.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.input.frame()
    }

    /// Messages and room changes, in order.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    fn note(&mut self, line: String) {
        info!("{line}");
        self.transcript.push(line);
    }
}

impl CharacterInventories for HeadlessHost {
    fn player(&self) -> CharacterId {
        self.state.player()
    }

    fn inventory_order(&self, character: CharacterId) -> &[ItemId] {
        self.state.inventory_order(character)
    }

    fn held_count(&self, character: CharacterId, item: ItemId) -> u32 {
        self.state.held_count(character, item)
    }

    fn item_name(&self, item: ItemId) -> &str {
        self.state.item_name(item)
    }

    fn item_sprite(&self, item: ItemId) -> SpriteId {
        self.state.item_sprite(item)
    }

    fn active_item(&self, character: CharacterId) -> Option<ItemId> {
        self.state.active_item(character)
    }

    fn set_active_item(&mut self, character: CharacterId, item: Option<ItemId>) {
        self.state.set_active_item(character, item);
    }
}

impl SpriteMetrics for HeadlessHost {
    fn sprite_size(&self, sprite: SpriteId) -> Option<Size> {
        self.state.sprite_size(sprite)
    }
}

impl PointerInput for HeadlessHost {
    fn pointer_position(&self) -> Point {
        self.input.pointer()
    }

    fn take_button(&mut self) -> Option<MouseButton> {
        self.input.take_button()
    }

    fn key_pressed(&mut self) -> bool {
        self.input.poll_key()
    }

    fn clear_input_buffer(&mut self) {
        self.input.clear();
    }
}

impl CursorControl for HeadlessHost {
    fn set_cursor(&mut self, mode: InteractionMode) {
        if self.cursor != mode {
            debug!(cursor = ?mode, item = ?self.cursor_item.map(ItemId::raw), "Cursor changed");
        }
        self.cursor = mode;
    }

    fn set_inventory_cursor(&mut self, item: ItemId) {
        self.cursor_item = Some(item);
    }

    fn set_default_cursor(&mut self) {
        self.cursor = InteractionMode::Arrow;
        self.cursor_item = None;
    }
}

impl FramePacer for HeadlessHost {
    fn next_frame(&mut self) {
        self.input.tick();
    }

    fn update_game_once(&mut self) {
        self.game_updates += 1;
    }
}

impl ItemEventDispatcher for HeadlessHost {
    fn dispatch_item_event(&mut self, event: ItemEvent) {
        let Some(reaction) = self.state.reaction(event).cloned() else {
            debug!(item = event.target().raw(), ?event, "No reaction for item event");
            return;
        };
        debug!(item = event.target().raw(), ?event, "Running item reaction");

        if let Some(message) = reaction.message {
            self.display_message(message);
        }
        let player = self.state.player();
        if let (true, ItemEvent::UseOn { active, .. }) = (reaction.consumes, event) {
            self.state.lose_item(player, active, 1);
        }
        if let Some(item) = reaction.gives {
            self.state.add_item(player, item, 1);
        }
        if let Some(room) = reaction.room {
            if !self.lifecycle.request_room_change(room) {
                self.change_room(room);
            }
        }
    }
}

impl SceneControl for HeadlessHost {
    fn change_room(&mut self, room: RoomId) {
        self.room = Some(room);
        self.note(format!("Entered room {}", room.raw()));
    }
}

impl MessageDisplay for HeadlessHost {
    fn display_message(&mut self, message: MessageId) {
        let text = self
            .state
            .message_text(message)
            .map_or_else(|| format!("<message {}>", message.raw()), str::to_string);
        self.note(text);
    }
}

impl ScreenSurface for HeadlessHost {
    fn present(&mut self, frame: &ScreenFrame) {
        debug!(
            window = ?frame.window,
            items = frame.items.len(),
            up = frame.up_arrow.is_some(),
            down = frame.down_arrow.is_some(),
            "Inventory screen painted"
        );
        self.last_frame = Some(frame.clone());
    }

    fn highlight(&mut self, erase: Option<Rect>, draw: Option<Rect>) {
        debug!(?erase, ?draw, "Inventory highlight moved");
    }

    fn clear(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameData;
    use crate::session::{Session, SessionFrame};
    use pointclick_gui::{open_inventory_screen, RedrawFlag, ScreenConfig, ScreenLayout};

    const DATA: &str = r#"
        player = 1

        [[items]]
        id = 1
        name = "Key"
        sprite = 10

        [[items]]
        id = 2
        name = "Chest"
        sprite = 10

        [[items]]
        id = 3
        name = "Coin"
        sprite = 10

        [[sprites]]
        id = 10
        width = 20
        height = 16

        [[characters]]
        id = 1
        items = [{ item = 1 }, { item = 2 }]

        [[interactions]]
        item = 2
        message = 1

        [[interactions]]
        item = 2
        with = 1
        consumes = true
        gives = 3

        [[interactions]]
        item = 3
        room = 4

        [[messages]]
        id = 1
        text = "A locked chest."
    "#;

    const VIEWPORT: Size = Size::new(320, 200);

    fn state() -> GameState {
        let data: GameData = toml::from_str(DATA).expect("Failed to parse game data");
        GameState::new(data).expect("Game data should be valid")
    }

    fn layout(item_count: usize) -> ScreenLayout {
        // Button sprites are missing, so buttons fall back to a 1px width
        ScreenLayout::compute(&ScreenConfig::default(), VIEWPORT, Size::new(20, 16), item_count, 0, 1)
    }

    fn centre(rect: Rect) -> Point {
        Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn click(at: Point, button: MouseButton) -> SessionFrame {
        SessionFrame {
            x: at.x,
            y: at.y,
            button: Some(button),
            key: false,
            repeat: 1,
        }
    }

    /// Replays `frames` through the script entry, returning its result and
    /// whether the GUI was marked for redraw.
    fn run(frames: Vec<SessionFrame>) -> (i32, bool, HeadlessHost) {
        let lifecycle = ScreenLifecycle::new();
        let input = SessionPlayer::new(Session { frames });
        let mut host = HeadlessHost::new(state(), input, lifecycle.clone());
        let redraw = RedrawFlag::new();
        let result = open_inventory_screen(&mut host, &lifecycle, &redraw, &ScreenConfig::default(), VIEWPORT)
            .expect("Screen should not fail");
        (result, redraw.is_requested(), host)
    }

    #[test]
    fn test_use_key_on_chest_gives_coin() {
        let layout = layout(2);
        let key = centre(layout.item_cell(0).expect("visible"));
        let chest = centre(layout.item_cell(1).expect("visible"));

        let (result, redraw, host) = run(vec![click(key, MouseButton::Left), click(chest, MouseButton::Left)]);

        assert_eq!(result, -1);
        assert!(!redraw);
        let player = host.state().player();
        assert_eq!(host.state().inventory_order(player), &[ItemId::new(2), ItemId::new(3)]);
        assert_eq!(host.cursor(), InteractionMode::Arrow);
        assert!(host.last_frame().is_none());
    }

    #[test]
    fn test_look_shows_message() {
        let layout = layout(2);
        let chest = centre(layout.item_cell(1).expect("visible"));

        let (_, _, host) = run(vec![click(chest, MouseButton::Right), click(chest, MouseButton::Left)]);

        assert_eq!(host.transcript(), &["A locked chest.".to_string()]);
    }

    #[test]
    fn test_room_change_is_deferred_until_redraw() {
        let mut state = state();
        let player = state.player();
        state.add_item(player, ItemId::new(3), 1);
        let layout = layout(3);
        let coin = centre(layout.item_cell(2).expect("visible"));
        let lifecycle = ScreenLifecycle::new();
        let input = SessionPlayer::new(Session {
            frames: vec![click(coin, MouseButton::Right), click(coin, MouseButton::Left)],
        });
        let mut host = HeadlessHost::new(state, input, lifecycle.clone());

        let result = open_inventory_screen(
            &mut host,
            &lifecycle,
            &RedrawFlag::new(),
            &ScreenConfig::default(),
            VIEWPORT,
        );

        assert_eq!(result, Ok(-1));
        assert_eq!(host.room(), Some(RoomId::new(4)));
        assert_eq!(host.transcript(), &["Entered room 4".to_string()]);
    }

    #[test]
    fn test_selection_becomes_active_item() {
        let layout = layout(2);
        let key = centre(layout.item_cell(0).expect("visible"));
        let ok = centre(layout.buttons[2]);

        let (result, redraw, host) = run(vec![click(key, MouseButton::Left), click(ok, MouseButton::Left)]);

        assert_eq!(result, 1);
        assert!(redraw);
        let player = host.state().player();
        assert_eq!(host.state().active_item(player), Some(ItemId::new(1)));
        assert_eq!(host.cursor(), InteractionMode::Use);
    }

    #[test]
    fn test_room_change_outside_screen_is_immediate() {
        let mut host = HeadlessHost::new(state(), SessionPlayer::default(), ScreenLifecycle::new());
        host.dispatch_item_event(ItemEvent::Look { item: ItemId::new(3) });
        assert_eq!(host.room(), Some(RoomId::new(4)));
    }
}
