//! Shortest-path search across the tile grid.
//!
//! The pursuer's movement is driven by a breadth-first search over the 4-connected grid graph.
//! All edges have unit cost, so the first time the search reaches a cell it has found a shortest
//! route to it.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::grid::{self, Grid, Position};

/// Neighbor enumeration order: left, right, up, down.
///
/// The order is not semantically significant, but it is fixed so that ties between equally short
/// paths always resolve the same way.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Computes the shortest 4-directional route from `start` to `goal`.
///
/// The returned sequence excludes `start` and includes `goal`. It is empty when `goal` cannot be
/// reached and also when `start` and `goal` coincide, since no steps are needed in that case.
///
/// A cell qualifies for expansion when it lies within the grid and is either walkable or the goal
/// itself. The goal exception matters because the search is used to hunt the player down: the
/// player's cell is not walkable in the strict sense, yet it is exactly where the route must end.
pub(crate) fn find_path(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    let mut queue = VecDeque::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut seen = HashSet::new();

    queue.push_back(start);
    let _ = seen.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }

        for (dx, dy) in DIRECTIONS {
            let Some(neighbor) = grid::offset(current, dx, dy) else {
                continue;
            };
            // Out-of-bounds neighbors fail the lookup and are skipped.
            let Ok(tile) = grid.get(neighbor) else {
                continue;
            };

            if (tile.is_walkable() || neighbor == goal) && seen.insert(neighbor) {
                queue.push_back(neighbor);
                let _ = came_from.insert(neighbor, current);
            }
        }
    }

    // Walk the predecessor chain backwards from the goal; an interrupted chain means the goal was
    // never reached.
    let mut path = Vec::new();
    let mut step = goal;
    while step != start {
        let Some(&previous) = came_from.get(&step) else {
            return Vec::new();
        };
        path.push(step);
        step = previous;
    }
    path.reverse();

    path
}
