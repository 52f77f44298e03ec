use std::collections::VecDeque;

use mazepath::{
    Direction, Maze, MazeSolver, Solver, generate,
    generators::get_rng,
    solvers::{default_endpoints, solve_maze},
};

const SIZES: [(u16, u16); 6] = [(1, 1), (2, 1), (1, 7), (5, 5), (13, 8), (40, 25)];

/// Number of cells reachable from (0,0) through open walls.
fn reachable_from_origin(maze: &Maze) -> usize {
    let mut seen = vec![false; maze.len()];
    let mut queue = VecDeque::from([(0u16, 0u16)]);
    seen[0] = true;
    let mut count = 0;
    while let Some(cell) = queue.pop_front() {
        count += 1;
        for next in maze.open_neighbors(cell) {
            let idx = next.1 as usize * maze.width() as usize + next.0 as usize;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(next);
            }
        }
    }
    count
}

fn assert_walls_symmetric(maze: &Maze) {
    for cell in maze.cells() {
        for dir in Direction::ALL {
            let Some(next) = dir.step(cell.coord()).filter(|&c| maze.is_in_bounds(c)) else {
                // Outer boundary walls are never removed
                assert!(cell.has_wall(dir), "{:?} lost its {} boundary", cell.coord(), dir);
                continue;
            };
            assert_eq!(
                cell.has_wall(dir),
                maze[next].has_wall(dir.opposite()),
                "asymmetric wall between {:?} and {:?}",
                cell.coord(),
                next
            );
        }
    }
}

fn assert_valid_path(maze: &Maze, path: &[(u16, u16)], start: (u16, u16), goal: (u16, u16)) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for pair in path.windows(2) {
        assert!(
            maze.open_neighbors(pair[0]).any(|c| c == pair[1]),
            "{:?} -> {:?} crosses a wall",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn generated_mazes_are_spanning_trees() {
    let mut rng = get_rng(Some(2024));
    for (width, height) in SIZES {
        let maze = generate(width, height, &mut rng).unwrap();
        let cells = width as usize * height as usize;
        // Connected with exactly n - 1 edges means acyclic
        assert_eq!(maze.passage_count(), cells - 1, "{}x{}", width, height);
        assert_eq!(reachable_from_origin(&maze), cells, "{}x{}", width, height);
        assert_walls_symmetric(&maze);
    }
}

#[test]
fn wall_symmetry_holds_after_each_removal() {
    let mut maze = Maze::new(4, 3).unwrap();
    let edges = [((0, 0), (1, 0)), ((1, 1), (1, 0)), ((3, 2), (2, 2)), ((2, 1), (2, 2))];
    for (a, b) in edges {
        maze.remove_wall_between(a, b).unwrap();
        assert_walls_symmetric(&maze);
    }
    assert_eq!(maze.passage_count(), edges.len());
}

#[test]
fn all_solvers_find_the_unique_path_in_a_perfect_maze() {
    let mut rng = get_rng(Some(7));
    for (width, height) in SIZES {
        let maze = generate(width, height, &mut rng).unwrap();
        let (start, goal) = default_endpoints(&maze);
        let mut maze_solver = MazeSolver::new(&maze);
        let reference = maze_solver.solve(start, goal, Solver::Bfs).unwrap();
        assert_valid_path(&maze, &reference.path, start, goal);
        for solver in Solver::ALL {
            let solution = maze_solver.solve(start, goal, solver).unwrap();
            assert_eq!(solution.path, reference.path, "{} on {}x{}", solver, width, height);
            assert_eq!(solution.visited.first(), Some(&start));
            assert_eq!(solution.visited.last(), Some(&goal));
        }
    }
}

#[test]
fn two_cell_maze_scenario() {
    let maze = generate(2, 1, &mut get_rng(None)).unwrap();
    assert_eq!(maze.passage_count(), 1);
    assert!(!maze.has_wall((0, 0), Direction::Right));
    assert!(!maze.has_wall((1, 0), Direction::Left));
    let solution = solve_maze(&maze, (0, 0), (1, 0), Solver::Bfs).unwrap();
    assert_eq!(solution.path, vec![(0, 0), (1, 0)]);
}

/// 5x3 grid with two routes from (0,1) to (4,1): a straight corridor along the middle
/// row and a detour around the top row. Extra loops make the graph far from a tree.
fn maze_with_cycles() -> Maze {
    let mut maze = Maze::new(5, 3).unwrap();
    let open = [
        // middle corridor
        ((0, 1), (1, 1)),
        ((1, 1), (2, 1)),
        ((2, 1), (3, 1)),
        ((3, 1), (4, 1)),
        // top detour
        ((0, 1), (0, 0)),
        ((0, 0), (1, 0)),
        ((1, 0), (2, 0)),
        ((2, 0), (3, 0)),
        ((3, 0), (4, 0)),
        ((4, 0), (4, 1)),
        // bottom loop hanging off the corridor
        ((1, 1), (1, 2)),
        ((1, 2), (2, 2)),
        ((2, 2), (3, 2)),
        ((3, 2), (3, 1)),
    ];
    for (a, b) in open {
        maze.remove_wall_between(a, b).unwrap();
    }
    maze
}

#[test]
fn optimal_solvers_return_shortest_path_on_graph_with_cycles() {
    let maze = maze_with_cycles();
    let (start, goal) = ((0, 1), (4, 1));
    for solver in Solver::ALL {
        let solution = solve_maze(&maze, start, goal, solver).unwrap();
        assert_valid_path(&maze, &solution.path, start, goal);
        if solver.is_optimal() {
            assert_eq!(solution.steps(), Some(4), "{}", solver);
            assert_eq!(
                solution.path,
                vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)],
                "{}",
                solver
            );
        } else {
            assert!(solution.steps() >= Some(4));
        }
    }
}

#[test]
fn ring_scenario() {
    let mut maze = Maze::new(3, 3).unwrap();
    let ring = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)];
    for i in 0..ring.len() {
        maze.remove_wall_between(ring[i], ring[(i + 1) % ring.len()]).unwrap();
    }
    for solver in [Solver::Bfs, Solver::Dijkstra, Solver::AStar] {
        let solution = solve_maze(&maze, (0, 0), (0, 2), solver).unwrap();
        assert_eq!(solution.path, vec![(0, 0), (0, 1), (0, 2)], "{}", solver);
    }
    let dfs = solve_maze(&maze, (0, 0), (0, 2), Solver::Dfs).unwrap();
    assert_valid_path(&maze, &dfs.path, (0, 0), (0, 2));
}

#[test]
fn consecutive_solves_do_not_leak_state() {
    let maze = maze_with_cycles();
    let mut maze_solver = MazeSolver::new(&maze);
    for first in Solver::ALL {
        for second in Solver::ALL {
            maze_solver.solve((4, 1), (0, 0), first).unwrap();
            let reused = maze_solver.solve((0, 1), (4, 1), second).unwrap();
            let fresh = solve_maze(&maze, (0, 1), (4, 1), second).unwrap();
            assert_eq!(reused, fresh, "{} then {}", first, second);
        }
    }
}

#[test]
fn solving_to_self_returns_single_cell() {
    let maze = generate(6, 6, &mut get_rng(Some(11))).unwrap();
    for solver in Solver::ALL {
        let solution = solve_maze(&maze, (3, 2), (3, 2), solver).unwrap();
        assert_eq!(solution.path, vec![(3, 2)], "{}", solver);
    }
}

#[test]
fn disconnected_goal_is_reported_as_empty_path() {
    let mut maze = Maze::new(3, 3).unwrap();
    maze.remove_wall_between((0, 0), (1, 0)).unwrap();
    maze.remove_wall_between((1, 0), (1, 1)).unwrap();
    for solver in Solver::ALL {
        let solution = solve_maze(&maze, (0, 0), (2, 2), solver).unwrap();
        assert!(!solution.is_found(), "{}", solver);
        let mut expanded = solution.visited.clone();
        expanded.sort();
        assert_eq!(expanded, vec![(0, 0), (1, 0), (1, 1)]);
    }
}
