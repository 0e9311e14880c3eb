use std::time::Instant;

use pacman_mapgen::{GeneratorParams, Maze, Method, RandomSource, generate_maze};

/// Iteration count from the first argument, 10 when absent or unparsable.
/// Kept in `u32` and at least 1 so it can divide a `Duration`.
fn parse_iterations(arg: Option<&str>) -> u32 {
    arg.and_then(|s| s.parse::<u32>().ok()).unwrap_or(10).max(1)
}

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = parse_iterations(args.next().as_deref());
    let params = GeneratorParams {
        wall_probability: 0.5,
        cycle_probability: 0.1,
    };

    for method in Method::ALL {
        let started = Instant::now();
        for seed in 0..num_iters as u64 {
            let mut maze = Maze::new(u8::MAX, u8::MAX);
            generate_maze(&mut maze, method, &params, &mut RandomSource::new(seed));
        }
        let elapsed = started.elapsed();
        println!(
            "{:<40} {} iterations, {:?} per maze",
            method.to_string(),
            num_iters,
            elapsed / num_iters
        );
    }
}
