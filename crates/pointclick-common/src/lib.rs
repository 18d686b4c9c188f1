//! # PointClick Common
//!
//! Common types shared by the PointClick engine crates.
//!
//! This crate provides:
//! - ID types (characters, inventory items, sprites, rooms, messages)
//! - Screen-space geometry (points, rectangles)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod geometry;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::ids::*;
}

pub use prelude::*;
