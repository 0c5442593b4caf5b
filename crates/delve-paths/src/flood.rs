use std::collections::VecDeque;

use delve_core::{Area, Occupancy, Point, Position, Rect, TileView};

use crate::PathRange;
use crate::pathrange::UNREACHABLE;
use crate::traits::Pather;
use crate::travel::Travel;

impl PathRange {
    /// Breadth-first flood from `source`, counting every step as 1.
    ///
    /// Returns the cells reachable within `max_dist` steps as an [`Area`]
    /// covering the square of radius `max_dist` around `source`, clipped to
    /// the range. The source itself is always part of the region when it
    /// lies inside the range. Distances stay queryable through
    /// [`flood_at`](Self::flood_at) until the next flood.
    pub fn flood<P: Pather>(&mut self, pather: &P, source: Point, max_dist: i32) -> Area {
        assert!(max_dist >= 0, "flood: negative distance {max_dist}");
        self.flood_map.fill(UNREACHABLE);

        let mut area = Area::from_rect(Rect::around(source, max_dist).intersect(self.rng));
        let Some(si) = self.idx(source) else {
            return area;
        };
        self.flood_map[si] = 0;
        area.set(source);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let nd = self.flood_map[ci] + 1;
            if nd > max_dist {
                continue;
            }
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.flood_map[ni] != UNREACHABLE {
                    continue;
                }
                self.flood_map[ni] = nd;
                queue.push_back(ni);
                area.set(np);
            }
        }

        self.nbuf = nbuf;
        log::trace!(
            "flood: {} cells within {max_dist} of {source}",
            area.count()
        );
        area
    }

    /// Step distance found by the last [`flood`](Self::flood).
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached.
    pub fn flood_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.flood_map[i],
            None => UNREACHABLE,
        }
    }

    /// The closest cell to `pos`, in breadth-first order, whose terrain
    /// lets the traveller in and that nobody occupies. The search crosses
    /// occupied cells, only visits cells inside `within` and the view's
    /// bounds, and `pos` itself is a candidate.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a valid position of the view's level.
    pub fn nearest_free<V, O>(
        &mut self,
        travel: &Travel<'_, V, O>,
        pos: Position,
        within: Rect,
    ) -> Option<Position>
    where
        V: TileView + ?Sized,
        O: Occupancy + ?Sized,
    {
        let view = travel.view();
        assert!(
            view.contains(pos),
            "nearest_free: {pos} is not on level {} within {}",
            view.level(),
            view.bounds()
        );
        let bounds = view.bounds();
        if self.rng != bounds {
            self.set_range(bounds);
        }
        let level = pos.level;
        let is_free = |p: Point| {
            within.contains(p) && !travel.occupants().is_occupied(Position::at(p, level))
        };

        let origin = pos.point();
        if travel.is_passable(origin) && is_free(origin) {
            return Some(pos);
        }

        self.flood_map.fill(UNREACHABLE);
        let si = self.idx(origin)?;
        self.flood_map[si] = 0;
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = None;
        'search: while let Some(ci) = queue.pop_front() {
            let nd = self.flood_map[ci] + 1;
            let cp = self.point(ci);

            nbuf.clear();
            nbuf.extend(
                cp.neighbors_8()
                    .into_iter()
                    .filter(|&q| travel.is_passable(q)),
            );

            for &np in nbuf.iter() {
                if !within.contains(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.flood_map[ni] != UNREACHABLE {
                    continue;
                }
                if is_free(np) {
                    found = Some(Position::at(np, level));
                    break 'search;
                }
                self.flood_map[ni] = nd;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        if found.is_none() {
            log::debug!("nearest_free: nothing free around {pos} within {within}");
        }
        found
    }
}
