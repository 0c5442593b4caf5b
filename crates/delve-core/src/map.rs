//! The grid map capability consumed by the FOV and path engines.
//!
//! Map knowledge is split in two traits: [`TileView`] answers terrain and
//! trap questions, [`Occupancy`] answers "who stands there". Ground truth
//! and the player's remembered map are two implementations of the same
//! [`TileView`]; the engines never know which one they were handed.

use std::ops::{BitAnd, BitOr};

use crate::geom::{Point, Position, Rect};

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// How a traveller gets around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    #[default]
    Walk,
    Swim,
    Fly,
}

impl Movement {
    /// Whether water is harmless for this kind of movement.
    pub fn crosses_water(self) -> bool {
        matches!(self, Movement::Swim | Movement::Fly)
    }
}

/// Terrain classification of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
    /// A closed door: walkable, but blocks sight.
    Door,
    Water,
    Fire,
    GasCloud,
    Chasm,
    /// Never seen. Only appears in remembered views.
    Unknown,
}

impl Terrain {
    /// Whether light passes through the cell.
    pub fn is_transparent(self) -> bool {
        !matches!(
            self,
            Terrain::Wall | Terrain::Door | Terrain::GasCloud | Terrain::Unknown
        )
    }

    /// Whether a traveller with the given movement may enter the cell.
    pub fn passable_for(self, movement: Movement) -> bool {
        match self {
            Terrain::Wall | Terrain::Unknown => false,
            Terrain::Chasm => movement == Movement::Fly,
            _ => true,
        }
    }

    /// Whether entering the cell is dangerous for the given movement.
    pub fn is_hazard_for(self, movement: Movement) -> bool {
        match self {
            Terrain::Water => !movement.crosses_water(),
            Terrain::Fire | Terrain::GasCloud => true,
            _ => false,
        }
    }
}

/// Kinds of traps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrapKind {
    Teleport,
    TrapDoor,
    Dart,
    Pit,
    Alarm,
}

impl TrapKind {
    /// Traps that carry the victim somewhere else entirely.
    pub fn is_displacing(self) -> bool {
        matches!(self, TrapKind::Teleport | TrapKind::TrapDoor)
    }
}

// ---------------------------------------------------------------------------
// Occupants
// ---------------------------------------------------------------------------

/// Identity of a monster, stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

/// Bitmask of occupant properties relevant to sight and movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantFlags(pub u8);

impl OccupantFlags {
    pub const NONE: Self = Self(0);
    /// Passing for something else (a mimic); never reported as seen.
    pub const DISGUISED: Self = Self(1 << 0);
    /// Only noticed by observers with infravision.
    pub const INVISIBLE: Self = Self(1 << 1);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for OccupantFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for OccupantFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// A monster standing in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id: MonsterId,
    pub flags: OccupantFlags,
}

impl Occupant {
    pub fn new(id: MonsterId, flags: OccupantFlags) -> Self {
        Self { id, flags }
    }

    /// Whether an observer would notice this occupant.
    pub fn noticed(&self, infravision: bool) -> bool {
        if self.flags.contains(OccupantFlags::DISGUISED) {
            return false;
        }
        !self.flags.contains(OccupantFlags::INVISIBLE) || infravision
    }
}

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

/// Terrain and trap knowledge about one level.
pub trait TileView {
    /// Cells of the level. Usually starts at the origin.
    fn bounds(&self) -> Rect;

    /// Index of the level this view describes.
    fn level(&self) -> i32;

    /// Terrain at `p`. Points outside [`bounds`](Self::bounds) read as
    /// [`Terrain::Wall`].
    fn terrain(&self, p: Point) -> Terrain;

    /// The trap known at `p`, if any.
    fn trap(&self, p: Point) -> Option<TrapKind>;

    fn is_transparent(&self, p: Point) -> bool {
        self.terrain(p).is_transparent()
    }

    fn is_passable(&self, p: Point, movement: Movement) -> bool {
        self.terrain(p).passable_for(movement)
    }

    /// Whether `pos` is a valid cell of this level.
    fn contains(&self, pos: Position) -> bool {
        pos.level == self.level() && pos.is_valid(self.bounds())
    }
}

/// Occupant lookup.
pub trait Occupancy {
    /// The monster standing at `pos`, if any.
    fn occupant(&self, pos: Position) -> Option<Occupant>;

    fn is_occupied(&self, pos: Position) -> bool {
        self.occupant(pos).is_some()
    }
}

/// Nobody home.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOccupants;

impl Occupancy for NoOccupants {
    fn occupant(&self, _pos: Position) -> Option<Occupant> {
        None
    }
}

/// What an observer currently sees.
pub trait Sight {
    /// Whether the monster `id` is among the currently seen monsters.
    fn sees(&self, id: MonsterId) -> bool;
}
