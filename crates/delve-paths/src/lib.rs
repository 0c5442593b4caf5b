//! Cost-aware pathfinding over dungeon levels.
//!
//! The searches run through [`PathRange`], which owns and reuses its caches
//! so that repeated queries on the same level allocate nothing after
//! warm-up:
//!
//! - **A\*** cost-minimal paths ([`PathRange::astar_path`], and
//!   [`PathRange::find`] on top of it for positions on a level)
//! - **Flood fill** reachable regions as an [`Area`](delve_core::Area)
//!   ([`PathRange::flood`])
//! - **Nearest free cell** for placing things ([`PathRange::nearest_free`])
//!
//! The movement cost model lives in [`Travel`]: a [`Traveller`] moving over
//! one [`TileView`](delve_core::TileView) of a level, with the occupants of
//! the level and [`StepCosts`] on the side.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | flood fill |
//! | [`WeightedPather`] : [`Pather`] | |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod distance;
mod flood;
mod path;
mod pathrange;
mod traits;
mod travel;

pub use distance::{chebyshev, manhattan};
pub use path::{Path, find};
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use travel::{StepCosts, Travel, Traveller};
