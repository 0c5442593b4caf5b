//! Field of view for dungeon levels.
//!
//! [`Fov`] computes, from an observer position, which cells of a level are
//! visible and which monsters stand on them, using recursive shadowcasting.
//! It implements [`Sight`](delve_core::Sight), so a computed field of view
//! can be handed to a player path search to tell which monsters the player
//! knows about.

mod fov;

pub use fov::{Fov, Sighting};
