use std::collections::BinaryHeap;

use delve_core::Point;

use crate::PathRange;
use crate::pathrange::{NodeRef, PathNode};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute a cost-minimal path from `from` to `to` using A*.
    ///
    /// Returns the steps after `from`, each with the cumulative cost of
    /// reaching it, or `None` if the goal cannot be reached within the
    /// current range. A path from a point to itself is empty.
    ///
    /// The goal test happens when a node is taken off the open set. An
    /// expanded node is never reopened, and an open node is only updated
    /// when a strictly cheaper route to it turns up. Among nodes of equal
    /// `f`, the one that entered the open set first is expanded first.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<PathNode>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;
        self.expanded = 0;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.seq = 0;
            node.generation = cur_gen;
            node.closed = false;
        }
        let mut seq: u32 = 0;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;
            {
                let node = &self.astar_nodes[ci];
                // Skip stale entries left behind by relaxations.
                if node.generation != cur_gen || node.closed || node.f != current.f {
                    continue;
                }
            }

            self.astar_nodes[ci].closed = true;
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    seq += 1;
                    n.generation = cur_gen;
                    n.closed = false;
                    n.seq = seq;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: n.seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct, leaving the start out.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            let node = &self.astar_nodes[ci];
            path.push(PathNode {
                pos: self.point(ci),
                cost: node.g,
            });
            ci = node.parent;
        }
        path.reverse();
        Some(path)
    }
}
