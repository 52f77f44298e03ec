use std::{cmp::Reverse, collections::BinaryHeap};

use super::{SearchState, Solution};
use crate::maze::Maze;

/// Heap entry for a cell waiting in the frontier.
///
/// Ordered by `priority`, then by `seq` so that equal priorities come out in the order
/// cells first entered the frontier. Entries whose `distance` no longer matches the
/// cell's tentative distance are stale and skipped when popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TrackedCell {
    /// Traveling cost plus heuristic cost
    priority: u32,
    seq: u64,
    /// Traveling cost at the time of the push
    distance: u32,
    index: usize,
}

/// Uniform-cost search from `start`, ordering the frontier by tentative distance.
pub(super) fn solve_dijkstra(
    maze: &Maze,
    state: &mut SearchState,
    start: (u16, u16),
    goal: (u16, u16),
) -> Solution {
    best_first(maze, state, start, goal, |_| 0)
}

/// Best-first search shared by Dijkstra and A*.
///
/// The frontier is keyed by `distance + heuristic(cell)` with unit edge weights. A cell
/// whose distance improves while it is still in the frontier keeps its original
/// insertion order; a stale heap entry is left behind and ignored later.
pub(super) fn best_first(
    maze: &Maze,
    state: &mut SearchState,
    start: (u16, u16),
    goal: (u16, u16),
    heuristic: impl Fn((u16, u16)) -> u32,
) -> Solution {
    let mut visited = Vec::new();
    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    let mut next_seq = 0u64;

    let start_idx = maze.ravel_index(start);
    let goal_idx = maze.ravel_index(goal);
    {
        let node = &mut state.nodes[start_idx];
        node.distance = 0;
        node.in_frontier = true;
        node.seq = next_seq;
    }
    pq.push(Reverse(TrackedCell {
        priority: heuristic(start),
        seq: next_seq,
        distance: 0,
        index: start_idx,
    }));
    next_seq += 1;

    while let Some(Reverse(entry)) = pq.pop() {
        let node = &mut state.nodes[entry.index];
        if !node.in_frontier || node.distance != entry.distance {
            continue;
        }
        node.in_frontier = false;

        let current = maze.unravel_index(entry.index);
        visited.push(current);
        if entry.index == goal_idx {
            return Solution {
                path: state.reconstruct_path(maze, goal_idx),
                visited,
            };
        }

        let new_distance = entry.distance.saturating_add(1);
        for neighbor in maze.open_neighbors(current) {
            let index = maze.ravel_index(neighbor);
            let node = &mut state.nodes[index];
            if new_distance >= node.distance {
                continue;
            }
            // Relax
            node.distance = new_distance;
            node.parent = Some(entry.index);
            if !node.in_frontier {
                node.in_frontier = true;
                node.seq = next_seq;
                next_seq += 1;
            }
            pq.push(Reverse(TrackedCell {
                priority: new_distance.saturating_add(heuristic(neighbor)),
                seq: node.seq,
                distance: new_distance,
                index,
            }));
        }
    }

    Solution {
        path: Vec::new(),
        visited,
    }
}
