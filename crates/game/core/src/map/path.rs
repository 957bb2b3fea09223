//! A* pathfinding over the walkable grid.
//!
//! Orthogonal steps cost 2 and diagonal steps cost 3, so paths prefer straight
//! lines without forbidding diagonals. Ties are broken by insertion order,
//! which keeps the chosen path deterministic for a given map.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::state::Position;

const ORTHOGONAL_COST: u32 = 2;
const DIAGONAL_COST: u32 = 3;

const NEIGHBORS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

fn step_cost(dx: i32, dy: i32) -> u32 {
    if dx != 0 && dy != 0 {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Octile distance under the step costs above.
fn heuristic(from: Position, to: Position) -> u32 {
    let dx = (from.x - to.x).unsigned_abs();
    let dy = (from.y - to.y).unsigned_abs();
    let (long, short) = if dx > dy { (dx, dy) } else { (dy, dx) };
    ORTHOGONAL_COST * (long - short) + DIAGONAL_COST * short
}

/// Finds a path from `start` to `goal`.
///
/// `passable` decides which tiles may be entered; the goal itself is always
/// enterable so an occupied target (the player) can be reached. The returned
/// path excludes `start` and ends with `goal`. Returns `None` when the goal
/// is unreachable or equal to the start.
pub fn find_path<P>(start: Position, goal: Position, mut passable: P) -> Option<Vec<Position>>
where
    P: FnMut(Position) -> bool,
{
    if start == goal {
        return None;
    }

    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut best: HashMap<Position, u32> = HashMap::new();
    let mut sequence = 0u64;

    best.insert(start, 0);
    open.push(Reverse((heuristic(start, goal), sequence, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        let cost_here = best[&current];

        for (dx, dy) in NEIGHBORS {
            let next = current.offset(dx, dy);
            if next != goal && !passable(next) {
                continue;
            }
            let cost = cost_here + step_cost(dx, dy);
            if best.get(&next).is_some_and(|known| *known <= cost) {
                continue;
            }
            best.insert(next, cost);
            came_from.insert(next, current);
            sequence += 1;
            open.push(Reverse((cost + heuristic(next, goal), sequence, next)));
        }
    }

    None
}

fn reconstruct(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
