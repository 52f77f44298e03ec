use std::time::Instant;

use mazepath::{
    generators::{generate, get_rng},
    solvers::{MazeSolver, Solver, default_endpoints},
};

/// Repeatedly generates and solves a large maze. The first argument sets the number of
/// iterations (default 10).
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let size = u8::MAX as u16;
    let mut rng = get_rng(Some(0));

    for iter in 0..num_iters {
        let started = Instant::now();
        let maze = generate(size, size, &mut rng)?;
        let generated = started.elapsed();

        let (start, goal) = default_endpoints(&maze);
        let mut maze_solver = MazeSolver::new(&maze);
        print!("[{}] generate {:?}", iter, generated);
        for solver in Solver::ALL {
            let started = Instant::now();
            let solution = maze_solver.solve(start, goal, solver)?;
            print!(
                " | {:?} {:?} ({} expanded)",
                solver,
                started.elapsed(),
                solution.visited.len()
            );
        }
        println!();
    }
    Ok(())
}
