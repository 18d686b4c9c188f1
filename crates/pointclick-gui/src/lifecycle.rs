//! Inventory screen lifecycle: reentrancy guard and deferred room changes.

use std::cell::Cell;
use std::rc::Rc;

use pointclick_common::RoomId;
use tracing::{debug, warn};

use crate::error::{ScreenError, ScreenResult};

#[derive(Debug, Default)]
struct LifecycleState {
    depth: Cell<u32>,
    pending_room: Cell<Option<RoomId>>,
}

/// Tracks whether the inventory screen is open.
///
/// Only one inventory screen may be open at a time. Clones share state, so
/// the script layer can hold one to request room changes while the screen
/// runs.
#[derive(Debug, Clone, Default)]
pub struct ScreenLifecycle {
    state: Rc<LifecycleState>,
}

impl ScreenLifecycle {
    /// Creates a lifecycle with no screen open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an inventory screen is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.depth.get() > 0
    }

    /// Current nesting depth (0 or 1).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.state.depth.get()
    }

    /// Marks the screen as open. Refused while another screen is open.
    ///
    /// The returned session closes the screen when dropped.
    pub fn enter(&self) -> ScreenResult<ScreenSession> {
        let depth = self.state.depth.get();
        if depth > 0 {
            warn!("Refusing to open inventory screen: already open");
            return Err(ScreenError::AlreadyOpen { depth });
        }
        self.state.depth.set(depth + 1);
        self.state.pending_room.set(None);
        debug!("Inventory screen entered");
        Ok(ScreenSession {
            lifecycle: self.clone(),
        })
    }

    /// Requests a room change.
    ///
    /// Returns `true` if the change was deferred because the screen is open;
    /// the screen performs it on its next redraw and closes. Returns `false`
    /// if no screen is open and the caller should change rooms itself.
    pub fn request_room_change(&self, room: RoomId) -> bool {
        if !self.is_open() {
            return false;
        }
        debug!(room = room.raw(), "Deferring room change until inventory screen closes");
        self.state.pending_room.set(Some(room));
        true
    }

    /// Takes the pending room change, if any.
    pub fn take_room_change(&self) -> Option<RoomId> {
        self.state.pending_room.take()
    }
}

/// An open inventory screen. Dropping it closes the screen.
#[derive(Debug)]
pub struct ScreenSession {
    lifecycle: ScreenLifecycle,
}

impl Drop for ScreenSession {
    fn drop(&mut self) {
        let state = &self.lifecycle.state;
        state.depth.set(state.depth.get().saturating_sub(1));
        debug!("Inventory screen left");
    }
}
