//! Sprite resolution with fallback.

use pointclick_common::{Size, SpriteId};
use tracing::warn;

use crate::host::SpriteMetrics;

/// Outcome of resolving a sprite id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSprite {
    /// Sprite to use (the requested one, or the fallback)
    pub sprite: SpriteId,
    /// Its size; zero if even the fallback is missing
    pub size: Size,
    /// Whether the fallback was substituted
    pub fell_back: bool,
}

/// Resolves `sprite`, substituting `fallback` when it does not exist.
///
/// Does not log; callers decide how to word the warning.
pub fn resolve_sprite<M: SpriteMetrics + ?Sized>(
    metrics: &M,
    sprite: SpriteId,
    fallback: SpriteId,
) -> ResolvedSprite {
    match metrics.sprite_size(sprite) {
        Some(size) => ResolvedSprite {
            sprite,
            size,
            fell_back: false,
        },
        None => ResolvedSprite {
            sprite: fallback,
            size: metrics.sprite_size(fallback).unwrap_or(Size::ZERO),
            fell_back: true,
        },
    }
}

/// The three built-in button sprites of the legacy inventory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSprites {
    /// "Look" button
    pub look: ResolvedSprite,
    /// "Select" button
    pub select: ResolvedSprite,
    /// "OK" button
    pub ok: ResolvedSprite,
}

impl ButtonSprites {
    /// Resolves the button sprites, warning once if any is missing.
    pub fn resolve<M: SpriteMetrics + ?Sized>(
        metrics: &M,
        look: SpriteId,
        select: SpriteId,
        ok: SpriteId,
        fallback: SpriteId,
    ) -> Self {
        let buttons = Self {
            look: resolve_sprite(metrics, look, fallback),
            select: resolve_sprite(metrics, select, fallback),
            ok: resolve_sprite(metrics, ok, fallback),
        };
        if buttons.any_fell_back() {
            warn!(
                "Inventory screen: one or more button graphics (sprites {}, {}, {}) do not exist, using sprite {} instead",
                look.raw(),
                select.raw(),
                ok.raw(),
                fallback.raw()
            );
        }
        buttons
    }

    /// Whether any button used the fallback sprite.
    #[must_use]
    pub const fn any_fell_back(&self) -> bool {
        self.look.fell_back || self.select.fell_back || self.ok.fell_back
    }

    /// Button width: the select sprite's width, at least 1.
    #[must_use]
    pub fn button_width(&self) -> i32 {
        self.select.size.width.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Sprites(HashMap<SpriteId, Size>);

    impl SpriteMetrics for Sprites {
        fn sprite_size(&self, sprite: SpriteId) -> Option<Size> {
            self.0.get(&sprite).copied()
        }
    }

    fn sprites() -> Sprites {
        let mut map = HashMap::new();
        map.insert(SpriteId::new(0), Size::new(8, 8));
        map.insert(SpriteId::new(2041), Size::new(30, 20));
        map.insert(SpriteId::new(2042), Size::new(32, 20));
        Sprites(map)
    }

    #[test]
    fn test_resolve_existing_sprite() {
        let resolved = resolve_sprite(&sprites(), SpriteId::new(2041), SpriteId::new(0));
        assert!(!resolved.fell_back);
        assert_eq!(resolved.sprite, SpriteId::new(2041));
        assert_eq!(resolved.size, Size::new(30, 20));
    }

    #[test]
    fn test_resolve_missing_sprite_falls_back() {
        let resolved = resolve_sprite(&sprites(), SpriteId::new(77), SpriteId::new(0));
        assert!(resolved.fell_back);
        assert_eq!(resolved.sprite, SpriteId::new(0));
        assert_eq!(resolved.size, Size::new(8, 8));
    }

    #[test]
    fn test_resolve_missing_fallback_is_zero_sized() {
        let resolved = resolve_sprite(&sprites(), SpriteId::new(77), SpriteId::new(99));
        assert!(resolved.fell_back);
        assert_eq!(resolved.size, Size::ZERO);
    }

    #[test]
    fn test_button_sprites_flag_missing_ok_button() {
        let buttons = ButtonSprites::resolve(
            &sprites(),
            SpriteId::new(2041),
            SpriteId::new(2042),
            SpriteId::new(2043),
            SpriteId::new(0),
        );
        assert!(buttons.any_fell_back());
        assert!(buttons.ok.fell_back);
        assert_eq!(buttons.ok.sprite, SpriteId::new(0));
        assert_eq!(buttons.button_width(), 32);
    }
}
