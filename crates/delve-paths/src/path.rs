use delve_core::{Occupancy, Position, TileView};

use crate::PathRange;
use crate::travel::Travel;

/// The result of a successful search: the steps from just after the start
/// up to and including the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Position>,
    cost: i32,
}

impl Path {
    pub fn steps(&self) -> &[Position] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether start and goal were the same cell.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of the step costs along the path.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Where to go first.
    pub fn next_step(&self) -> Option<Position> {
        self.steps.first().copied()
    }

    /// The goal, unless the path is empty.
    pub fn last(&self) -> Option<Position> {
        self.steps.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Position> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl PathRange {
    /// Find a cost-minimal path from `start` to `goal` for the traveller
    /// described by `travel`.
    ///
    /// Returns `None` when the two positions are on different levels or
    /// when the goal cannot be reached with the given map knowledge. The
    /// range is rebound to the view's bounds if needed.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `goal` is not a valid position inside the
    /// view's bounds, or if the view describes another level than `start`.
    pub fn find<V, O>(&mut self, travel: &Travel<'_, V, O>, start: Position, goal: Position) -> Option<Path>
    where
        V: TileView + ?Sized,
        O: Occupancy + ?Sized,
    {
        let view = travel.view();
        let bounds = view.bounds();
        assert!(start.is_valid(bounds), "find: invalid start {start}");
        assert!(goal.is_valid(bounds), "find: invalid goal {goal}");
        if !start.same_level(goal) {
            log::debug!("find: no path between levels, {start} to {goal}");
            return None;
        }
        assert_eq!(
            start.level,
            view.level(),
            "find: view of level {} used for a search on level {}",
            view.level(),
            start.level
        );

        if self.rng != bounds {
            self.set_range(bounds);
        }

        let travel = travel.toward(goal.point());
        let Some(nodes) = self.astar_path(&travel, start.point(), goal.point()) else {
            log::debug!(
                "find: no path from {start} to {goal} for {:?} ({} nodes expanded)",
                travel.traveller(),
                self.expanded
            );
            return None;
        };
        let cost = nodes.last().map_or(0, |n| n.cost);
        let steps: Vec<Position> = nodes
            .into_iter()
            .map(|n| Position::at(n.pos, start.level))
            .collect();
        log::trace!(
            "find: {start} to {goal} in {} steps, cost {cost}, {} nodes expanded",
            steps.len(),
            self.expanded
        );
        Some(Path { steps, cost })
    }
}

/// One-shot search with a fresh [`PathRange`]. Prefer keeping a range
/// around when searching the same level repeatedly.
pub fn find<V, O>(travel: &Travel<'_, V, O>, start: Position, goal: Position) -> Option<Path>
where
    V: TileView + ?Sized,
    O: Occupancy + ?Sized,
{
    PathRange::new(travel.view().bounds()).find(travel, start, goal)
}
