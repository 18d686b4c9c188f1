//! Recorded input sessions.
//!
//! A session is a list of input frames replayed one per game frame. Running
//! out of frames behaves like a keypress so a replay always ends.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use pointclick_common::{Point, PointClickError, PointClickResult};
use pointclick_gui::MouseButton;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One frame of recorded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFrame {
    /// Pointer X in screen coordinates
    pub x: i32,
    /// Pointer Y in screen coordinates
    pub y: i32,
    /// Button clicked this frame
    #[serde(default)]
    pub button: Option<MouseButton>,
    /// Whether a key was pressed
    #[serde(default)]
    pub key: bool,
    /// How many identical frames this entry stands for
    #[serde(default = "one")]
    pub repeat: u32,
}

const fn one() -> u32 {
    1
}

/// Session file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Frames in playback order
    pub frames: Vec<SessionFrame>,
}

impl Session {
    /// Loads a session from a TOML file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> PointClickResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let session: Self = toml::from_str(&contents).map_err(|e| PointClickError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(frames = session.frames.len(), "Loaded session from {}", path.display());
        Ok(session)
    }
}

/// Plays a session back as pointer and keyboard state.
#[derive(Debug, Default)]
pub struct SessionPlayer {
    frames: VecDeque<SessionFrame>,
    pointer: Point,
    button: Option<MouseButton>,
    frame: u64,
    exhausted: bool,
}

impl SessionPlayer {
    /// Creates a player, expanding repeated frames. A repeated click only
    /// clicks on its first frame.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut frames = VecDeque::new();
        for frame in session.frames {
            for i in 0..frame.repeat.max(1) {
                frames.push_back(if i == 0 {
                    frame
                } else {
                    SessionFrame {
                        button: None,
                        key: false,
                        ..frame
                    }
                });
            }
        }
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Current pointer position.
    #[must_use]
    pub const fn pointer(&self) -> Point {
        self.pointer
    }

    /// Takes this frame's click.
    pub fn take_button(&mut self) -> Option<MouseButton> {
        self.button.take()
    }

    /// Moves to the next recorded frame and reports its keypress.
    pub fn poll_key(&mut self) -> bool {
        let Some(frame) = self.frames.pop_front() else {
            if !self.exhausted {
                warn!("Input session ended, treating as keypress");
                self.exhausted = true;
            }
            return true;
        };
        self.pointer = Point::new(frame.x, frame.y);
        self.button = frame.button;
        frame.key
    }

    /// Drops any click not yet handled.
    pub fn clear(&mut self) {
        self.button = None;
    }

    /// Advances the frame counter.
    pub fn tick(&mut self) {
        self.frame += 1;
        debug!(frame = self.frame, pointer = ?self.pointer, "Frame");
    }

    /// Frames played so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}
