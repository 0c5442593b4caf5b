//! **delve-core**: spatial primitives for a grid-based dungeon.
//!
//! This crate provides the types shared by the FOV and path engines:
//! geometry ([`Point`], [`Position`], [`Rect`], [`Area`]), the map
//! capability traits ([`TileView`], [`Occupancy`], [`Sight`]) and simple
//! in-memory implementations of them ([`Level`], [`Recollection`],
//! [`Occupants`]).

pub mod area;
pub mod geom;
pub mod layout;
pub mod level;
pub mod map;

pub use area::Area;
pub use geom::{Point, Position, Rect};
pub use layout::{Layout, LayoutError};
pub use level::{Level, Occupants, Recollection, Trap};
pub use map::{
    MonsterId, Movement, NoOccupants, Occupancy, Occupant, OccupantFlags, Sight, Terrain,
    TileView, TrapKind,
};
