//! In-memory map knowledge: the ground-truth [`Level`], the player's
//! [`Recollection`] of it, and the [`Occupants`] registry.

use std::collections::HashMap;

use crate::geom::{Point, Position, Rect};
use crate::map::{Occupancy, Occupant, Terrain, TileView, TrapKind};

/// A trap placed on a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trap {
    pub kind: TrapKind,
    /// Whether anybody has spotted it yet.
    pub discovered: bool,
}

/// Dense terrain storage shared by both views.
#[derive(Debug, Clone)]
struct TerrainGrid {
    cells: Vec<Terrain>,
    bounds: Rect,
}

impl TerrainGrid {
    fn new(width: i32, height: i32, fill: Terrain) -> Self {
        assert!(
            width > 0 && height > 0,
            "level: invalid size {width}x{height}"
        );
        Self {
            cells: vec![fill; (width * height) as usize],
            bounds: Rect::sized(width, height),
        }
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    fn at(&self, p: Point) -> Terrain {
        self.idx(p).map_or(Terrain::Wall, |i| self.cells[i])
    }

    fn set(&mut self, p: Point, t: Terrain) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = t;
        }
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Ground truth for one dungeon level.
#[derive(Debug, Clone)]
pub struct Level {
    depth: i32,
    terrain: TerrainGrid,
    traps: HashMap<Point, Trap>,
}

impl Level {
    /// Create a level of the given size filled with floor.
    pub fn new(depth: i32, width: i32, height: i32) -> Self {
        Self::filled(depth, width, height, Terrain::Floor)
    }

    /// Create a level of the given size filled with `terrain`.
    pub fn filled(depth: i32, width: i32, height: i32, terrain: Terrain) -> Self {
        Self {
            depth,
            terrain: TerrainGrid::new(width, height, terrain),
            traps: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.terrain.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.terrain.bounds.height()
    }

    /// Position (x, y) on this level.
    pub fn pos(&self, x: i32, y: i32) -> Position {
        Position::new(x, y, self.depth)
    }

    /// Set the terrain at `p`. Does nothing if out of bounds.
    pub fn set_terrain(&mut self, p: Point, t: Terrain) {
        self.terrain.set(p, t);
    }

    /// Fill the part of `rect` that lies on the level.
    pub fn fill_rect(&mut self, rect: Rect, t: Terrain) {
        for p in rect.intersect(self.terrain.bounds) {
            self.terrain.set(p, t);
        }
    }

    /// Draw walls around the edge of the level.
    pub fn wall_in(&mut self) {
        let b = self.terrain.bounds;
        for p in b {
            if p.x == b.min.x || p.y == b.min.y || p.x == b.max.x - 1 || p.y == b.max.y - 1 {
                self.terrain.set(p, Terrain::Wall);
            }
        }
    }

    /// Place an undiscovered trap. Out-of-bounds placements are ignored.
    pub fn place_trap(&mut self, p: Point, kind: TrapKind) {
        if self.terrain.bounds.contains(p) {
            self.traps.insert(
                p,
                Trap {
                    kind,
                    discovered: false,
                },
            );
        }
    }

    /// Mark the trap at `p` as discovered. Returns whether there was one.
    pub fn reveal_trap(&mut self, p: Point) -> bool {
        match self.traps.get_mut(&p) {
            Some(t) => {
                t.discovered = true;
                true
            }
            None => false,
        }
    }

    pub fn remove_trap(&mut self, p: Point) -> Option<Trap> {
        self.traps.remove(&p)
    }

    /// The trap at `p` together with its discovery state.
    pub fn trap_info(&self, p: Point) -> Option<Trap> {
        self.traps.get(&p).copied()
    }
}

impl TileView for Level {
    fn bounds(&self) -> Rect {
        self.terrain.bounds
    }

    fn level(&self) -> i32 {
        self.depth
    }

    fn terrain(&self, p: Point) -> Terrain {
        self.terrain.at(p)
    }

    fn trap(&self, p: Point) -> Option<TrapKind> {
        self.traps.get(&p).map(|t| t.kind)
    }
}

// ---------------------------------------------------------------------------
// Recollection
// ---------------------------------------------------------------------------

/// What the player remembers about a level.
///
/// Starts out [`Terrain::Unknown`] everywhere and is only updated by
/// explicit calls to [`remember`](Self::remember), so it can go stale when
/// the level changes out of sight.
#[derive(Debug, Clone)]
pub struct Recollection {
    depth: i32,
    terrain: TerrainGrid,
    traps: HashMap<Point, TrapKind>,
}

impl Recollection {
    /// A blank memory of a level of the given size.
    pub fn new(depth: i32, width: i32, height: i32) -> Self {
        Self {
            depth,
            terrain: TerrainGrid::new(width, height, Terrain::Unknown),
            traps: HashMap::new(),
        }
    }

    /// A blank memory matching the shape of `level`.
    pub fn of(level: &Level) -> Self {
        Self::new(level.depth, level.width(), level.height())
    }

    /// Refresh the memory of `p` from the ground truth.
    ///
    /// Undiscovered traps stay unknown; a trap that is gone is forgotten.
    pub fn remember(&mut self, level: &Level, p: Point) {
        if !self.terrain.bounds.contains(p) {
            return;
        }
        self.terrain.set(p, level.terrain(p));
        match level.trap_info(p) {
            Some(t) if t.discovered => {
                self.traps.insert(p, t.kind);
            }
            Some(_) => {}
            None => {
                self.traps.remove(&p);
            }
        }
    }

    /// Refresh every point in `points`, typically the output of a FOV pass.
    pub fn remember_all(&mut self, level: &Level, points: impl IntoIterator<Item = Point>) {
        for p in points {
            self.remember(level, p);
        }
    }

    /// Overwrite remembered terrain, e.g. from a magic map.
    pub fn set_terrain(&mut self, p: Point, t: Terrain) {
        self.terrain.set(p, t);
    }

    /// Record a trap the player learned about.
    pub fn note_trap(&mut self, p: Point, kind: TrapKind) {
        if self.terrain.bounds.contains(p) {
            self.traps.insert(p, kind);
        }
    }

    /// Whether the cell has ever been seen.
    pub fn is_known(&self, p: Point) -> bool {
        self.terrain.at(p) != Terrain::Unknown
    }
}

impl TileView for Recollection {
    fn bounds(&self) -> Rect {
        self.terrain.bounds
    }

    fn level(&self) -> i32 {
        self.depth
    }

    fn terrain(&self, p: Point) -> Terrain {
        self.terrain.at(p)
    }

    fn trap(&self, p: Point) -> Option<TrapKind> {
        self.traps.get(&p).copied()
    }
}

// ---------------------------------------------------------------------------
// Occupants
// ---------------------------------------------------------------------------

/// Who stands where, across all levels.
#[derive(Debug, Clone, Default)]
pub struct Occupants {
    cells: HashMap<Position, Occupant>,
}

impl Occupants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `occupant` at `pos`, returning whoever was there before.
    pub fn place(&mut self, pos: Position, occupant: Occupant) -> Option<Occupant> {
        self.cells.insert(pos, occupant)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Occupant> {
        self.cells.remove(&pos)
    }

    /// Move whoever stands at `from` to `to`. Returns false if `from` is
    /// empty or `to` is taken.
    pub fn move_to(&mut self, from: Position, to: Position) -> bool {
        if self.cells.contains_key(&to) {
            return false;
        }
        match self.cells.remove(&from) {
            Some(o) => {
                self.cells.insert(to, o);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, pos: Position) -> Option<Occupant> {
        self.cells.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Occupancy for Occupants {
    fn occupant(&self, pos: Position) -> Option<Occupant> {
        self.get(pos)
    }
}
