//! Recursive shadowcasting.
//!
//! The plane around the observer is cut into eight octants. Each octant is
//! scanned row by row moving away from the observer, keeping a window of
//! slopes that is still lit. An opaque cell splits the window: the part
//! before it is scanned further by a recursive call, the part after it
//! continues in the current scan.

use delve_core::{Area, MonsterId, Occupancy, Point, Position, Rect, Sight, TileView};
use delve_paths::manhattan;

/// Per-octant transform from scan coordinates (dx ≤ 0, dy ≤ 0) to map
/// offsets.
#[derive(Debug, Clone, Copy)]
struct Octant {
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
}

impl Octant {
    #[inline]
    fn transform(self, center: Point, dx: i32, dy: i32) -> Point {
        Point::new(
            center.x + dx * self.xx + dy * self.xy,
            center.y + dx * self.yx + dy * self.yy,
        )
    }
}

const OCTANTS: [Octant; 8] = [
    Octant { xx: 1, xy: 0, yx: 0, yy: 1 },
    Octant { xx: 0, xy: 1, yx: 1, yy: 0 },
    Octant { xx: 0, xy: -1, yx: 1, yy: 0 },
    Octant { xx: -1, xy: 0, yx: 0, yy: 1 },
    Octant { xx: -1, xy: 0, yx: 0, yy: -1 },
    Octant { xx: 0, xy: -1, yx: -1, yy: 0 },
    Octant { xx: 0, xy: 1, yx: -1, yy: 0 },
    Octant { xx: 1, xy: 0, yx: 0, yy: -1 },
];

/// What a single computation looks at.
struct Caster<'a, V: ?Sized, O: ?Sized> {
    view: &'a V,
    occupants: &'a O,
    infravision: bool,
}

/// A monster discovered during a computation, with where it was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sighting {
    pub id: MonsterId,
    pub pos: Position,
}

/// Field of view of one observer.
///
/// The engine is bound to the bounds of a level at construction and is
/// meant to be kept around and recomputed every turn. Every
/// [`calculate`](Self::calculate) starts from scratch.
#[derive(Debug, Clone)]
pub struct Fov {
    bounds: Rect,
    visible: Vec<bool>,
    center: Position,
    radius: i32,
    /// Distinct monsters, in discovery order.
    monsters: Vec<Sighting>,
}

impl Fov {
    /// Create an engine for a level with the given bounds. Nothing is
    /// visible and the center is [`Position::INVALID`].
    pub fn new(bounds: Rect) -> Self {
        assert!(!bounds.is_empty(), "fov: empty bounds {bounds}");
        Self {
            bounds,
            visible: vec![false; bounds.len()],
            center: Position::INVALID,
            radius: 0,
            monsters: Vec::new(),
        }
    }

    /// Create an engine sized for `view`.
    pub fn for_view<V: TileView + ?Sized>(view: &V) -> Self {
        Self::new(view.bounds())
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The observer position of the last computation, or
    /// [`Position::INVALID`].
    pub fn center(&self) -> Position {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// How many rows the scan can usefully go: the radius, capped at the
    /// Chebyshev distance from the center to the farthest cell of the map.
    fn reach(&self) -> i32 {
        let c = self.center.point();
        let b = self.bounds;
        let far = (c.x - b.min.x)
            .max(b.max.x - 1 - c.x)
            .max(c.y - b.min.y)
            .max(b.max.y - 1 - c.y);
        self.radius.min(far)
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        let q = p - self.bounds.min;
        (q.y * self.bounds.width() + q.x) as usize
    }

    /// Forget everything: no visible cell, no center, no monster.
    pub fn reset(&mut self) {
        self.visible.fill(false);
        self.center = Position::INVALID;
        self.radius = 0;
        self.monsters.clear();
    }

    /// Recompute the field of view from `origin`.
    ///
    /// A cell is lit when its squared distance to the origin is below
    /// `radius²` and nothing opaque stands in the way. Opaque cells are lit
    /// themselves but hide what lies behind them. Monsters standing on lit
    /// cells are discovered unless they are disguised, or invisible to an
    /// observer without `infravision`. The origin is always visible.
    ///
    /// # Panics
    ///
    /// Panics if `origin` is not a valid position inside the engine bounds,
    /// if `view` has other bounds or describes another level than
    /// `origin`, or if `radius` is negative.
    pub fn calculate<V, O>(
        &mut self,
        view: &V,
        occupants: &O,
        origin: Position,
        radius: i32,
        infravision: bool,
    ) where
        V: TileView + ?Sized,
        O: Occupancy + ?Sized,
    {
        assert!(
            origin.is_valid(self.bounds),
            "fov: origin {origin} outside {}",
            self.bounds
        );
        assert_eq!(
            view.bounds(),
            self.bounds,
            "fov: view bounds do not match the engine"
        );
        assert_eq!(
            origin.level,
            view.level(),
            "fov: origin {origin} is not on level {}",
            view.level()
        );
        assert!(radius >= 0, "fov: negative radius {radius}");

        self.reset();
        self.center = origin;
        self.radius = radius;

        let caster = Caster {
            view,
            occupants,
            infravision,
        };
        for octant in OCTANTS {
            self.cast_light(&caster, octant, 1, 1.0, 0.0);
        }
        self.mark(occupants, origin, infravision, false);

        log::trace!(
            "fov: {} cells and {} monsters visible from {origin} (radius {radius})",
            self.visible_count(),
            self.monsters.len()
        );
    }

    fn cast_light<V, O>(
        &mut self,
        caster: &Caster<'_, V, O>,
        octant: Octant,
        row: i32,
        mut start: f64,
        end: f64,
    ) where
        V: TileView + ?Sized,
        O: Occupancy + ?Sized,
    {
        if start < end {
            return;
        }
        let center = self.center.point();
        let level = self.center.level;
        let radius_sq = i64::from(self.radius) * i64::from(self.radius);
        let reach = self.reach();
        let mut new_start = 0.0;

        for j in row..=reach {
            let dy = -j;
            let mut blocked = false;
            for dx in -j..=0 {
                let p = octant.transform(center, dx, dy);
                if !self.bounds.contains(p) {
                    continue;
                }
                let l_slope = (f64::from(dx) - 0.5) / (f64::from(dy) + 0.5);
                let r_slope = (f64::from(dx) + 0.5) / (f64::from(dy) - 0.5);
                if start < r_slope {
                    continue;
                }
                if end > l_slope {
                    break;
                }

                if Point::new(dx, dy).length_sq() < radius_sq {
                    self.mark(
                        caster.occupants,
                        Position::at(p, level),
                        caster.infravision,
                        true,
                    );
                }

                let opaque = !caster.view.is_transparent(p);
                if blocked {
                    if opaque {
                        new_start = r_slope;
                        continue;
                    }
                    blocked = false;
                    start = new_start;
                } else if opaque && j < reach {
                    blocked = true;
                    self.cast_light(caster, octant, j + 1, start, l_slope);
                    new_start = r_slope;
                }
            }
            if blocked {
                break;
            }
        }
    }

    fn mark<O: Occupancy + ?Sized>(
        &mut self,
        occupants: &O,
        pos: Position,
        infravision: bool,
        check_for_monster: bool,
    ) {
        let i = self.idx(pos.point());
        self.visible[i] = true;
        if !check_for_monster {
            return;
        }
        let Some(occupant) = occupants.occupant(pos) else {
            return;
        };
        if occupant.noticed(infravision) && !self.sees(occupant.id) {
            self.monsters.push(Sighting {
                id: occupant.id,
                pos,
            });
        }
    }

    /// Force the visibility of a single cell.
    ///
    /// When making a cell visible with `check_for_monster`, a monster
    /// standing there is discovered under the same rules as in
    /// [`calculate`](Self::calculate). Hiding a cell never forgets a monster.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a valid position inside the engine bounds, or
    /// is on another level than the current center.
    pub fn set<O: Occupancy + ?Sized>(
        &mut self,
        occupants: &O,
        pos: Position,
        visible: bool,
        infravision: bool,
        check_for_monster: bool,
    ) {
        self.check(pos);
        if visible {
            self.mark(occupants, pos, infravision, check_for_monster);
        } else {
            let i = self.idx(pos.point());
            self.visible[i] = false;
        }
    }

    fn check(&self, pos: Position) {
        assert!(
            pos.is_valid(self.bounds),
            "fov: {pos} outside {}",
            self.bounds
        );
        assert!(
            self.center.is_invalid() || self.center.same_level(pos),
            "fov: {pos} is not on the level of {}",
            self.center
        );
    }

    /// Whether `pos` was visible in the last computation.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a valid position inside the engine bounds, or
    /// is on another level than the current center.
    pub fn is_visible(&self, pos: Position) -> bool {
        self.check(pos);
        self.visible[self.idx(pos.point())]
    }

    /// Number of visible cells.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    /// Visible cells, row-major.
    pub fn iter_visible(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(p, &v)| v.then_some(p))
    }

    /// Discovered monsters with where they were seen, closest to the
    /// center first (Manhattan distance). Equally distant monsters keep
    /// their discovery order.
    pub fn sightings(&self) -> Vec<Sighting> {
        let center = self.center.point();
        let mut sightings = self.monsters.clone();
        sightings.sort_by_key(|s| manhattan(center, s.pos.point()));
        sightings
    }

    /// Discovered monsters, closest to the center first.
    pub fn visible_monsters(&self) -> Vec<MonsterId> {
        self.sightings().into_iter().map(|s| s.id).collect()
    }

    /// The discovered monster closest to the center.
    pub fn closest_monster(&self) -> Option<MonsterId> {
        let center = self.center.point();
        self.monsters
            .iter()
            .min_by_key(|s| manhattan(center, s.pos.point()))
            .map(|s| s.id)
    }

    /// The part of the map that can be reached by the view: the square of
    /// side `2 * radius + 1` around the center, clipped to the bounds.
    fn extent(&self) -> Rect {
        if self.center.is_invalid() {
            return Rect::default();
        }
        Rect::around(self.center.point(), self.reach()).intersect(self.bounds)
    }

    /// Visible cells around the center, e.g. the cells caught in a blast
    /// that spreads as far as the eye reaches.
    pub fn area(&self) -> Area {
        let mut area = Area::from_rect(self.extent());
        for p in self.extent() {
            if self.visible[self.idx(p)] {
                area.set(p);
            }
        }
        area
    }

    /// Visible cells around the center that block sight in `view`.
    ///
    /// # Panics
    ///
    /// Panics if `view` has other bounds than the engine.
    pub fn obstacle_mask<V: TileView + ?Sized>(&self, view: &V) -> Area {
        assert_eq!(
            view.bounds(),
            self.bounds,
            "fov: view bounds do not match the engine"
        );
        let mut area = Area::from_rect(self.extent());
        for p in self.extent() {
            if self.visible[self.idx(p)] && !view.is_transparent(p) {
                area.set(p);
            }
        }
        area
    }
}

impl Sight for Fov {
    fn sees(&self, id: MonsterId) -> bool {
        self.monsters.iter().any(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::layout::legend;
    use delve_core::{
        Layout, Level, Movement, NoOccupants, Occupant, OccupantFlags, Occupants, Recollection,
        Terrain,
    };
    use delve_paths::{Travel, Traveller, find};
    use rand::{RngExt, SeedableRng};

    fn monster(id: u32) -> Occupant {
        Occupant::new(MonsterId(id), OccupantFlags::NONE)
    }

    fn visible_set(fov: &Fov) -> Vec<Point> {
        fov.iter_visible().collect()
    }

    #[test]
    fn new_engine_sees_nothing() {
        let level = Level::new(0, 10, 10);
        let fov = Fov::for_view(&level);
        assert!(fov.center().is_invalid());
        assert_eq!(fov.visible_count(), 0);
        assert!(!fov.is_visible(level.pos(3, 3)));
        assert_eq!(fov.closest_monster(), None);
        assert!(fov.area().is_empty());
    }

    #[test]
    fn open_room_is_a_disc() {
        let level = Level::new(0, 21, 21);
        let mut fov = Fov::for_view(&level);
        for (origin, radius) in [(Point::new(10, 10), 6), (Point::new(1, 1), 5), (Point::new(10, 3), 9)] {
            fov.calculate(&level, &NoOccupants, Position::at(origin, 0), radius, false);
            let r2 = i64::from(radius * radius);
            for p in level.bounds() {
                let expected = p == origin || (p - origin).length_sq() < r2;
                assert_eq!(
                    fov.is_visible(Position::at(p, 0)),
                    expected,
                    "{p} from {origin} radius {radius}"
                );
            }
        }
    }

    #[test]
    fn zero_radius_sees_only_the_origin() {
        let level = Level::new(0, 5, 5);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(2, 2), 0, false);
        assert_eq!(visible_set(&fov), vec![Point::new(2, 2)]);
    }

    #[test]
    fn a_wall_hides_what_lies_behind() {
        let mut level = Level::new(0, 15, 11);
        level.set_terrain(Point::new(7, 5), Terrain::Wall);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(5, 5), 6, false);
        assert!(fov.is_visible(level.pos(6, 5)));
        assert!(fov.is_visible(level.pos(7, 5)));
        assert!(!fov.is_visible(level.pos(8, 5)));
        assert!(!fov.is_visible(level.pos(9, 5)));
        // Off the shadow line.
        assert!(fov.is_visible(level.pos(9, 2)));
    }

    #[test]
    fn closed_doors_and_gas_block_sight() {
        let level = Layout::new(
            "\
###########
#....+....#
#.........#
#....%....#
###########",
        )
        .unwrap()
        .to_level(0, legend);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(2, 1), 10, false);
        assert!(fov.is_visible(level.pos(5, 1)));
        assert!(!fov.is_visible(level.pos(6, 1)));
        assert!(fov.is_visible(level.pos(8, 2)));

        fov.calculate(&level, &NoOccupants, level.pos(4, 3), 10, false);
        assert!(fov.is_visible(level.pos(5, 3)));
        assert!(!fov.is_visible(level.pos(6, 3)));
    }

    #[test]
    fn calculation_is_deterministic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut level = Level::new(3, 40, 25);
        let mut occupants = Occupants::new();
        for p in level.bounds() {
            match rng.random_range(0..12) {
                0 | 1 => level.set_terrain(p, Terrain::Wall),
                2 => level.set_terrain(p, Terrain::Water),
                3 => {
                    occupants.place(Position::at(p, 3), monster(p.y as u32 * 40 + p.x as u32));
                }
                _ => {}
            }
        }
        let origin = level.pos(20, 12);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, origin, 9, false);
        let first = visible_set(&fov);
        let first_monsters = fov.visible_monsters();
        for _ in 0..3 {
            fov.calculate(&level, &occupants, origin, 9, false);
            assert_eq!(visible_set(&fov), first);
            assert_eq!(fov.visible_monsters(), first_monsters);
        }
        assert!(first.contains(&origin.point()));
    }

    #[test]
    fn monsters_are_reported_once() {
        let level = Level::new(0, 15, 15);
        let mut occupants = Occupants::new();
        // On an axis and on a diagonal: both lie on octant borders.
        occupants.place(level.pos(8, 5), monster(1));
        occupants.place(level.pos(8, 8), monster(2));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(5, 5), 6, false);
        assert_eq!(fov.visible_monsters(), vec![MonsterId(1), MonsterId(2)]);
        assert_eq!(fov.closest_monster(), Some(MonsterId(1)));
        assert_eq!(
            fov.sightings()[1],
            Sighting {
                id: MonsterId(2),
                pos: level.pos(8, 8)
            }
        );
    }

    #[test]
    fn monsters_sorted_by_distance() {
        let level = Level::new(0, 20, 20);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(14, 10), monster(4));
        occupants.place(level.pos(10, 9), monster(1));
        occupants.place(level.pos(7, 12), monster(5));
        occupants.place(level.pos(12, 11), monster(3));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(10, 10), 8, false);
        assert_eq!(
            fov.visible_monsters(),
            vec![MonsterId(1), MonsterId(3), MonsterId(4), MonsterId(5)]
        );
        assert_eq!(fov.closest_monster(), Some(MonsterId(1)));
    }

    #[test]
    fn huge_radius_is_bounded_by_the_map() {
        let mut level = Level::new(0, 10, 10);
        level.set_terrain(Point::new(5, 2), Terrain::Wall);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(5, 5), 10, false);
        let lit: Vec<Point> = fov.iter_visible().collect();

        fov.calculate(&level, &NoOccupants, level.pos(5, 5), 20_000, false);
        assert_eq!(fov.radius(), 20_000);
        assert_eq!(fov.iter_visible().collect::<Vec<_>>(), lit);
        assert!(!fov.is_visible(level.pos(5, 0)));

        let open = Level::new(0, 10, 10);
        fov.calculate(&open, &NoOccupants, open.pos(0, 9), i32::MAX, false);
        let area = fov.area();
        assert_eq!(area.bounds(), open.bounds());
        assert_eq!(area.count(), 100);
        assert!(fov.obstacle_mask(&open).is_empty());
    }

    #[test]
    fn hidden_monsters() {
        let level = Level::new(0, 12, 12);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(6, 4), Occupant::new(MonsterId(1), OccupantFlags::DISGUISED));
        occupants.place(level.pos(4, 6), Occupant::new(MonsterId(2), OccupantFlags::INVISIBLE));
        occupants.place(
            level.pos(7, 7),
            Occupant::new(
                MonsterId(3),
                OccupantFlags::INVISIBLE | OccupantFlags::DISGUISED,
            ),
        );
        let mut fov = Fov::for_view(&level);

        fov.calculate(&level, &occupants, level.pos(5, 5), 6, false);
        assert!(fov.is_visible(level.pos(6, 4)));
        assert!(fov.visible_monsters().is_empty());

        fov.calculate(&level, &occupants, level.pos(5, 5), 6, true);
        assert_eq!(fov.visible_monsters(), vec![MonsterId(2)]);
        assert!(fov.sees(MonsterId(2)));
        assert!(!fov.sees(MonsterId(1)));
    }

    #[test]
    fn monsters_behind_walls_stay_unseen() {
        let level = Layout::new(
            "\
#########
#...#...#
#...#...#
#########",
        )
        .unwrap()
        .to_level(0, legend);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(6, 1), monster(1));
        occupants.place(level.pos(3, 2), monster(2));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(1, 1), 8, false);
        assert_eq!(fov.visible_monsters(), vec![MonsterId(2)]);
    }

    #[test]
    fn the_observer_does_not_discover_itself() {
        let level = Level::new(0, 9, 9);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(4, 4), monster(9));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(4, 4), 4, false);
        assert!(fov.is_visible(level.pos(4, 4)));
        assert!(fov.visible_monsters().is_empty());
    }

    #[test]
    fn recalculation_starts_over() {
        let level = Level::new(0, 20, 20);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(3, 3), monster(1));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(2, 2), 4, false);
        assert!(fov.sees(MonsterId(1)));
        fov.calculate(&level, &occupants, level.pos(15, 15), 4, false);
        assert!(!fov.sees(MonsterId(1)));
        assert!(!fov.is_visible(level.pos(2, 2)));
        assert_eq!(fov.center(), level.pos(15, 15));
        assert_eq!(fov.radius(), 4);
    }

    #[test]
    fn reset_clears_everything() {
        let level = Level::new(1, 10, 10);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(5, 6), monster(1));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(5, 5), 5, false);
        assert!(fov.visible_count() > 0);
        fov.reset();
        assert_eq!(fov.visible_count(), 0);
        assert!(fov.center().is_invalid());
        assert_eq!(fov.visible_monsters(), Vec::new());
        assert_eq!(fov.closest_monster(), None);
    }

    #[test]
    fn set_single_cells() {
        let level = Level::new(0, 10, 10);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(8, 8), monster(1));
        occupants.place(level.pos(1, 8), monster(2));
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, level.pos(1, 1), 2, false);
        assert!(!fov.is_visible(level.pos(8, 8)));

        fov.set(&occupants, level.pos(8, 8), true, false, false);
        assert!(fov.is_visible(level.pos(8, 8)));
        assert!(!fov.sees(MonsterId(1)));

        fov.set(&occupants, level.pos(8, 8), true, false, true);
        assert!(fov.sees(MonsterId(1)));

        fov.set(&occupants, level.pos(8, 8), false, false, true);
        assert!(!fov.is_visible(level.pos(8, 8)));
        assert!(fov.sees(MonsterId(1)));

        // Hiding never discovers.
        fov.set(&occupants, level.pos(1, 8), false, false, true);
        assert!(!fov.sees(MonsterId(2)));
    }

    #[test]
    fn area_matches_visible_cells() {
        let level = Level::new(0, 30, 30);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(2, 15), 5, false);
        let area = fov.area();
        assert_eq!(area.bounds(), Rect::new(0, 10, 8, 21));
        assert_eq!(area.count(), fov.visible_count());
        assert!(area.iter().eq(fov.iter_visible()));
    }

    #[test]
    fn obstacle_mask_holds_visible_walls() {
        let mut level = Level::new(0, 11, 11);
        level.wall_in();
        level.set_terrain(Point::new(5, 3), Terrain::Wall);
        level.set_terrain(Point::new(5, 2), Terrain::Wall);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(5, 5), 6, false);
        let mask = fov.obstacle_mask(&level);
        assert!(mask.get(Point::new(5, 3)));
        assert!(mask.get(Point::new(0, 5)));
        // In the shadow of (5, 3).
        assert!(!mask.get(Point::new(5, 2)));
        assert!(!mask.get(Point::new(5, 5)));
        for p in mask.iter() {
            assert!(fov.is_visible(level.pos(p.x, p.y)));
            assert_eq!(level.terrain(p), Terrain::Wall);
        }
    }

    #[test]
    fn sight_feeds_player_paths() {
        let level = Layout::new("#######\n#.....#\n#######")
            .unwrap()
            .to_level(0, legend);
        let mut memory = Recollection::of(&level);
        let mut occupants = Occupants::new();
        occupants.place(level.pos(3, 1), monster(1));
        let start = level.pos(1, 1);
        let goal = level.pos(5, 1);

        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &occupants, start, 8, false);
        memory.remember_all(&level, fov.iter_visible());
        assert!(fov.sees(MonsterId(1)));

        let travel = Travel::new(&memory, &occupants, Traveller::Player).with_sight(&fov);
        let path = find(&travel, start, goal).unwrap();
        assert_eq!(path.cost(), 14);

        let walker = Travel::new(&level, &occupants, Traveller::Monster(Movement::Walk));
        assert_eq!(find(&walker, start, goal), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn origin_out_of_bounds() {
        let level = Level::new(0, 5, 5);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(5, 2), 3, false);
    }

    #[test]
    #[should_panic(expected = "is not on level")]
    fn origin_on_another_level() {
        let level = Level::new(0, 5, 5);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, Position::new(2, 2, 1), 3, false);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn invalid_query() {
        let level = Level::new(0, 5, 5);
        let fov = Fov::for_view(&level);
        fov.is_visible(Position::INVALID);
    }

    #[test]
    #[should_panic(expected = "not on the level")]
    fn query_on_another_level() {
        let level = Level::new(0, 5, 5);
        let mut fov = Fov::for_view(&level);
        fov.calculate(&level, &NoOccupants, level.pos(2, 2), 3, false);
        fov.is_visible(Position::new(2, 2, 4));
    }
}
