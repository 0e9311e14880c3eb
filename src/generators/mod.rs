mod dfs;
mod kruskal;
mod prim;
mod random_fill;
pub mod union_find;

use std::str::FromStr;

use dfs::randomized_dfs;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use random_fill::random_fill;

use crate::{error::ConfigError, maze::Maze, random::RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Random,
    Dfs,
    Kruskal,
    Prim,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Random, Method::Dfs, Method::Kruskal, Method::Prim];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Method::Random => "random",
            Method::Dfs => "dfs",
            Method::Kruskal => "kruskal",
            Method::Prim => "prim",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Random => write!(f, "Random Fill"),
            Method::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Method::Kruskal => write!(f, "Kruskal's Algorithm"),
            Method::Prim => write!(f, "Prim's Algorithm"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownMethod(s.to_string()))
    }
}

/// Method-specific knobs. Each generator reads only the ones it uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Probability that an interior wall survives the random fill.
    pub wall_probability: f64,
    /// Probability that a wall left by the DFS carve is knocked down afterwards.
    pub cycle_probability: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            wall_probability: 0.5,
            cycle_probability: 0.0,
        }
    }
}

/// Resets `maze` to all walls and carves it with the selected method.
/// On return every cell is reachable from every other cell.
pub fn generate_maze(
    maze: &mut Maze,
    method: Method,
    params: &GeneratorParams,
    rng: &mut RandomSource,
) {
    if maze.is_empty() {
        return;
    }

    maze.fill_walls();

    match method {
        Method::Random => random_fill(maze, params.wall_probability, rng),
        Method::Dfs => randomized_dfs(maze, params.cycle_probability, rng),
        Method::Kruskal => randomized_kruskal(maze, rng),
        Method::Prim => randomized_prim(maze, rng),
    }

    tracing::debug!(
        "[generate] {} carved {} passages in a {}x{} maze",
        method,
        maze.open_passages(),
        maze.width(),
        maze.height()
    );
    debug_assert!(
        maze.is_connected(),
        "{method} left the maze disconnected"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("dfs".parse::<Method>(), Ok(Method::Dfs));
        assert_eq!("Kruskal".parse::<Method>(), Ok(Method::Kruskal));
        assert_eq!(" prim ".parse::<Method>(), Ok(Method::Prim));
        assert_eq!(
            "wilson".parse::<Method>(),
            Err(ConfigError::UnknownMethod("wilson".to_string()))
        );
    }

    #[test]
    fn test_every_method_connects() {
        for method in Method::ALL {
            for seed in 0..10 {
                let mut maze = Maze::new(9, 6);
                let mut rng = RandomSource::new(seed);
                generate_maze(&mut maze, method, &GeneratorParams::default(), &mut rng);
                assert!(maze.is_connected(), "{method} with seed {seed}");
            }
        }
    }

    #[test]
    fn test_regenerating_resets_walls() {
        let params = GeneratorParams::default();
        let mut once = Maze::new(6, 6);
        generate_maze(&mut once, Method::Kruskal, &params, &mut RandomSource::new(5));

        let mut twice = Maze::new(6, 6);
        generate_maze(&mut twice, Method::Random, &params, &mut RandomSource::new(9));
        generate_maze(&mut twice, Method::Kruskal, &params, &mut RandomSource::new(5));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_cell_maze() {
        for method in Method::ALL {
            let mut maze = Maze::new(1, 1);
            generate_maze(&mut maze, method, &GeneratorParams::default(), &mut RandomSource::new(0));
            assert_eq!(maze.open_passages(), 0);
            assert!(maze.is_connected());
        }
    }
}
