//! Game data and live inventory state.
//!
//! Game data is a TOML document listing item types, sprite sizes, what each
//! character carries and how items react to being looked at or used on each
//! other. [`GameState`] is the mutable runtime view built from it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pointclick_common::{CharacterId, ItemId, MessageId, PointClickError, PointClickResult, RoomId, Size, SpriteId};
use pointclick_gui::{CharacterInventories, ItemEvent, SpriteMetrics};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// An inventory item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    /// Item number (starts at 1)
    pub id: ItemId,
    /// Display name; unnamed items are hidden from the inventory screen
    #[serde(default)]
    pub name: String,
    /// Inventory picture
    pub sprite: SpriteId,
}

/// Size of one sprite in the sprite cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteDef {
    /// Sprite number
    pub id: SpriteId,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

/// A stack of items carried by a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    /// Item type
    pub item: ItemId,
    /// How many are carried
    #[serde(default = "one")]
    pub count: u32,
}

const fn one() -> u32 {
    1
}

/// A character and the items it starts with, in inventory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDef {
    /// Character number
    pub id: CharacterId,
    /// Starting inventory
    #[serde(default)]
    pub items: Vec<HeldItem>,
}

/// Reaction to looking at an item or using one item on another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Item clicked
    pub item: ItemId,
    /// Item used on it; absent for look reactions
    #[serde(default)]
    pub with: Option<ItemId>,
    /// Message shown
    #[serde(default)]
    pub message: Option<MessageId>,
    /// Whether the used item is lost
    #[serde(default)]
    pub consumes: bool,
    /// Item given to the player
    #[serde(default)]
    pub gives: Option<ItemId>,
    /// Room to change to
    #[serde(default)]
    pub room: Option<RoomId>,
}

impl Interaction {
    /// Whether this reaction handles `event`.
    #[must_use]
    pub fn matches(&self, event: ItemEvent) -> bool {
        match event {
            ItemEvent::Look { item } => self.item == item && self.with.is_none(),
            ItemEvent::UseOn { active, target } => self.item == target && self.with == Some(active),
        }
    }
}

/// A game message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message number
    pub id: MessageId,
    /// Text shown
    pub text: String,
}

/// Game data file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    /// Player character
    pub player: CharacterId,
    /// Item types
    pub items: Vec<ItemDef>,
    /// Sprite sizes
    pub sprites: Vec<SpriteDef>,
    /// Characters and their starting inventories
    pub characters: Vec<CharacterDef>,
    /// Item reactions
    pub interactions: Vec<Interaction>,
    /// Message texts
    pub messages: Vec<MessageDef>,
}

impl GameData {
    /// Loads game data from a TOML file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> PointClickResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let data: Self = toml::from_str(&contents).map_err(|e| PointClickError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(
            items = data.items.len(),
            characters = data.characters.len(),
            "Loaded game data from {}",
            path.display()
        );
        Ok(data)
    }
}

/// Live inventories and lookup tables built from [`GameData`].
#[derive(Debug, Clone)]
pub struct GameState {
    player: CharacterId,
    items: HashMap<ItemId, ItemDef>,
    sprites: HashMap<SpriteId, Size>,
    inventories: HashMap<CharacterId, Vec<ItemId>>,
    counts: HashMap<(CharacterId, ItemId), u32>,
    active: HashMap<CharacterId, ItemId>,
    interactions: Vec<Interaction>,
    messages: HashMap<MessageId, String>,
}

impl GameState {
    /// Builds the runtime state, rejecting references to unknown items.
    pub fn new(data: GameData) -> PointClickResult<Self> {
        let items: HashMap<_, _> = data.items.into_iter().map(|def| (def.id, def)).collect();
        let known = |item: ItemId| {
            if items.contains_key(&item) {
                Ok(())
            } else {
                Err(PointClickError::InvalidData(format!("unknown item {}", item.raw())))
            }
        };

        for interaction in &data.interactions {
            known(interaction.item)?;
            if let Some(with) = interaction.with {
                known(with)?;
            }
            if let Some(gives) = interaction.gives {
                known(gives)?;
            }
        }

        let mut state = Self {
            player: data.player,
            items: HashMap::new(),
            sprites: data
                .sprites
                .iter()
                .map(|def| (def.id, Size::new(def.width, def.height)))
                .collect(),
            inventories: HashMap::new(),
            counts: HashMap::new(),
            active: HashMap::new(),
            interactions: data.interactions,
            messages: data
                .messages
                .into_iter()
                .map(|def| (def.id, def.text))
                .collect(),
        };
        for character in data.characters {
            state.inventories.entry(character.id).or_default();
            for held in character.items {
                known(held.item)?;
                state.add_item(character.id, held.item, held.count);
            }
        }
        state.items = items;
        Ok(state)
    }

    /// Adds `count` of an item, appending new item types to the end.
    pub fn add_item(&mut self, character: CharacterId, item: ItemId, count: u32) {
        if count == 0 {
            return;
        }
        let held = self.counts.entry((character, item)).or_insert(0);
        if *held == 0 {
            self.inventories.entry(character).or_default().push(item);
        }
        *held += count;
        debug!(character = character.raw(), item = item.raw(), count = *held, "Item added");
    }

    /// Removes `count` of an item; the type leaves the list at zero.
    pub fn lose_item(&mut self, character: CharacterId, item: ItemId, count: u32) {
        let Some(held) = self.counts.get_mut(&(character, item)) else {
            return;
        };
        *held = held.saturating_sub(count);
        debug!(character = character.raw(), item = item.raw(), count = *held, "Item lost");
        if *held == 0 {
            if let Some(order) = self.inventories.get_mut(&character) {
                order.retain(|&other| other != item);
            }
            if self.active.get(&character) == Some(&item) {
                self.active.remove(&character);
            }
        }
    }

    /// Reaction for an item event, if the game defines one.
    #[must_use]
    pub fn reaction(&self, event: ItemEvent) -> Option<&Interaction> {
        self.interactions.iter().find(|reaction| reaction.matches(event))
    }

    /// Text of a message, if defined.
    #[must_use]
    pub fn message_text(&self, message: MessageId) -> Option<&str> {
        self.messages.get(&message).map(String::as_str)
    }
}

impl CharacterInventories for GameState {
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
        self.items.get(&item).map_or("", |def| def.name.as_str())
    }

    fn item_sprite(&self, item: ItemId) -> SpriteId {
        self.items
            .get(&item)
            .map_or(SpriteId::new(0), |def| def.sprite)
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

impl SpriteMetrics for GameState {
    fn sprite_size(&self, sprite: SpriteId) -> Option<Size> {
        self.sprites.get(&sprite).copied()
    }
}
