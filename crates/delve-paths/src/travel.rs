//! The movement cost model: who is travelling, over which map knowledge.

use delve_core::{Movement, Occupancy, Point, Position, Sight, TileView};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Who a search is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traveller {
    /// The player. Walks, pays for the traps it remembers, and only minds
    /// the monsters it can see.
    Player,
    /// A monster with the given movement. Never steps into a cell another
    /// monster stands on, unless that cell is where it is going.
    Monster(Movement),
}

impl Traveller {
    /// The player if the search starts on the player's position, otherwise
    /// a monster moving with `movement`.
    pub fn identify(start: Position, player: Position, movement: Movement) -> Self {
        if start == player {
            Traveller::Player
        } else {
            Traveller::Monster(movement)
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self == Traveller::Player
    }

    pub fn movement(self) -> Movement {
        match self {
            Traveller::Player => Movement::Walk,
            Traveller::Monster(m) => m,
        }
    }
}

/// Additive step costs.
///
/// Entering a cell costs `step`, plus any penalty that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepCosts {
    pub step: i32,
    /// Known teleport or trap-door trap, player only.
    pub displacing_trap: i32,
    /// Any other known trap, player only.
    pub trap: i32,
    /// A monster stands in the cell.
    pub occupied: i32,
    /// Water, fire, or gas for whoever is harmed by it.
    pub hazard: i32,
}

impl Default for StepCosts {
    fn default() -> Self {
        Self {
            step: 1,
            displacing_trap: 50,
            trap: 10,
            occupied: 10,
            hazard: 50,
        }
    }
}

/// One traveller moving over one view of a level.
///
/// `Travel` borrows the map knowledge for the duration of a query. Player
/// searches are normally handed the player's
/// [`Recollection`](delve_core::Recollection), monster searches the
/// ground-truth [`Level`](delve_core::Level).
pub struct Travel<'a, V: ?Sized, O: ?Sized> {
    view: &'a V,
    occupants: &'a O,
    traveller: Traveller,
    sight: Option<&'a dyn Sight>,
    costs: StepCosts,
    goal: Option<Point>,
}

impl<'a, V, O> Travel<'a, V, O>
where
    V: TileView + ?Sized,
    O: Occupancy + ?Sized,
{
    pub fn new(view: &'a V, occupants: &'a O, traveller: Traveller) -> Self {
        Self {
            view,
            occupants,
            traveller,
            sight: None,
            costs: StepCosts::default(),
            goal: None,
        }
    }

    /// The same travel, heading for `goal`. A monster may end its path on
    /// an occupied goal, paying the occupied cost for it.
    pub fn toward(&self, goal: Point) -> Self {
        Self {
            goal: Some(goal),
            ..*self
        }
    }

    /// What the player currently sees. Without it, a player search ignores
    /// every occupant.
    pub fn with_sight(mut self, sight: &'a dyn Sight) -> Self {
        self.sight = Some(sight);
        self
    }

    pub fn with_costs(mut self, costs: StepCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn view(&self) -> &'a V {
        self.view
    }

    pub fn occupants(&self) -> &'a O {
        self.occupants
    }

    pub fn traveller(&self) -> Traveller {
        self.traveller
    }

    pub fn costs(&self) -> StepCosts {
        self.costs
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    #[inline]
    fn pos(&self, p: Point) -> Position {
        Position::at(p, self.view.level())
    }

    /// Whether the terrain at `p` lets the traveller through, ignoring
    /// occupants.
    pub fn is_passable(&self, p: Point) -> bool {
        self.view.bounds().contains(p) && self.view.is_passable(p, self.traveller.movement())
    }

    /// Whether the traveller may step into `p`.
    pub fn can_enter(&self, p: Point) -> bool {
        if !self.is_passable(p) {
            return false;
        }
        match self.traveller {
            Traveller::Player => true,
            Traveller::Monster(_) => {
                self.goal == Some(p) || !self.occupants.is_occupied(self.pos(p))
            }
        }
    }

    /// Cost of stepping into `p`.
    pub fn step_cost(&self, p: Point) -> i32 {
        let mut cost = self.costs.step;
        if self.traveller.is_player() {
            if let Some(trap) = self.view.trap(p) {
                cost += if trap.is_displacing() {
                    self.costs.displacing_trap
                } else {
                    self.costs.trap
                };
            }
        }
        if let Some(o) = self.occupants.occupant(self.pos(p)) {
            let minded = match self.traveller {
                Traveller::Player => self.sight.is_some_and(|s| s.sees(o.id)),
                Traveller::Monster(_) => true,
            };
            if minded {
                cost += self.costs.occupied;
            }
        }
        if self.view.terrain(p).is_hazard_for(self.traveller.movement()) {
            cost += self.costs.hazard;
        }
        cost
    }
}

impl<V, O> Pather for Travel<'_, V, O>
where
    V: TileView + ?Sized,
    O: Occupancy + ?Sized,
{
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_8().into_iter().filter(|&q| self.can_enter(q)));
    }
}

impl<V, O> WeightedPather for Travel<'_, V, O>
where
    V: TileView + ?Sized,
    O: Occupancy + ?Sized,
{
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.step_cost(to)
    }
}

impl<V, O> AstarPather for Travel<'_, V, O>
where
    V: TileView + ?Sized,
    O: Occupancy + ?Sized,
{
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
