use std::str::FromStr;

use crate::{
    error::ConfigError,
    maze::{Coord, Maze},
    random::RandomSource,
};

/// Pac-Man search problem variants, each with its own marker policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemType {
    /// One goal, as far from Pac-Man as the maze allows.
    Search,
    /// A goal in every corner.
    Corners,
    /// Food scattered over random cells.
    Food,
}

impl ProblemType {
    pub const ALL: [ProblemType; 3] = [ProblemType::Search, ProblemType::Corners, ProblemType::Food];

    pub fn name(self) -> &'static str {
        match self {
            ProblemType::Search => "search",
            ProblemType::Corners => "corners",
            ProblemType::Food => "food",
        }
    }
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProblemType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemType::ALL
            .into_iter()
            .find(|problem| problem.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownProblemType(s.to_string()))
    }
}

/// Cells holding Pac-Man and the goals/food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub pacman: Coord,
    pub food: Vec<Coord>,
}

/// Chooses Pac-Man's cell and the goal cells of a finished maze.
///
/// Requires a maze with at least two cells. `max_food` only applies to
/// [`ProblemType::Food`]; `None` puts food on every cell but Pac-Man's, and
/// larger values are clamped to the cells available.
pub fn place_markers(
    maze: &Maze,
    problem: ProblemType,
    max_food: Option<usize>,
    rng: &mut RandomSource,
) -> Markers {
    assert!(
        maze.cell_count() >= 2,
        "markers need at least two cells, the maze has {}",
        maze.cell_count()
    );

    let markers = match problem {
        ProblemType::Search => search_markers(maze, rng),
        ProblemType::Corners => corner_markers(maze, rng),
        ProblemType::Food => food_markers(maze, max_food, rng),
    };
    tracing::debug!(
        "[markers] {} problem: pacman at {:?}, {} goal(s)",
        problem,
        markers.pacman,
        markers.food.len()
    );
    markers
}

fn random_cell(maze: &Maze, rng: &mut RandomSource) -> Coord {
    (
        rng.index(maze.width() as usize) as u8,
        rng.index(maze.height() as usize) as u8,
    )
}

/// The goal is the cell farthest from Pac-Man by path length; ties go to the
/// first such cell in row-major order.
fn search_markers(maze: &Maze, rng: &mut RandomSource) -> Markers {
    let pacman = random_cell(maze, rng);
    let distances = maze.distances_from(pacman);

    let mut goal = pacman;
    let mut best = 0;
    for cell in maze.cells() {
        if let Some(distance) = distances[maze.index_of(cell)] {
            if distance > best {
                best = distance;
                goal = cell;
            }
        }
    }

    Markers {
        pacman,
        food: vec![goal],
    }
}

/// Corner cells in the order top-left, bottom-left, top-right, bottom-right,
/// without duplicates for single-row or single-column mazes.
pub fn corners(maze: &Maze) -> Vec<Coord> {
    let (right, bottom) = (maze.width() - 1, maze.height() - 1);
    let mut corners = Vec::with_capacity(4);
    for corner in [(0, 0), (0, bottom), (right, 0), (right, bottom)] {
        if !corners.contains(&corner) {
            corners.push(corner);
        }
    }
    corners
}

fn corner_markers(maze: &Maze, rng: &mut RandomSource) -> Markers {
    let mut food = corners(maze);
    let others = maze
        .cells()
        .filter(|cell| !food.contains(cell))
        .collect::<Vec<_>>();

    let pacman = match rng.pick(&others) {
        Some(&cell) => cell,
        None => {
            // Every cell is a corner, so Pac-Man takes one of them over
            let idx = rng.index(food.len());
            food.remove(idx)
        }
    };

    Markers { pacman, food }
}

fn food_markers(maze: &Maze, max_food: Option<usize>, rng: &mut RandomSource) -> Markers {
    let pacman = random_cell(maze, rng);
    let mut free = maze
        .cells()
        .filter(|&cell| cell != pacman)
        .collect::<Vec<_>>();
    rng.shuffle(&mut free);

    let available = free.len();
    let count = match max_food {
        Some(requested) if requested > available => {
            tracing::warn!(
                "[markers] max food {} exceeds the {} free cells, clamping",
                requested,
                available
            );
            available
        }
        Some(requested) => requested,
        None => available,
    };
    free.truncate(count);

    Markers { pacman, food: free }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{GeneratorParams, Method, generate_maze};

    fn carved(width: u8, height: u8, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height);
        generate_maze(
            &mut maze,
            Method::Kruskal,
            &GeneratorParams::default(),
            &mut RandomSource::new(seed),
        );
        maze
    }

    #[test]
    fn test_problem_type_from_str() {
        assert_eq!("FOOD".parse::<ProblemType>(), Ok(ProblemType::Food));
        assert!("maze".parse::<ProblemType>().is_err());
    }

    #[test]
    fn test_search_goal_is_farthest() {
        for seed in 0..10 {
            let maze = carved(8, 8, seed);
            let markers = place_markers(&maze, ProblemType::Search, None, &mut RandomSource::new(seed));
            assert_eq!(markers.food.len(), 1);
            let goal = markers.food[0];
            assert_ne!(goal, markers.pacman);

            let distances = maze.distances_from(markers.pacman);
            let farthest = distances.iter().flatten().max().copied();
            assert_eq!(distances[maze.index_of(goal)], farthest);
        }
    }

    #[test]
    fn test_search_tie_breaks_row_major() {
        // A fully open 3x1 corridor from the middle: both ends are 1 step away
        let mut maze = Maze::new(3, 1);
        maze.open_wall((0, 0), (1, 0));
        maze.open_wall((1, 0), (2, 0));
        for seed in 0..50 {
            let markers = place_markers(&maze, ProblemType::Search, None, &mut RandomSource::new(seed));
            if markers.pacman == (1, 0) {
                assert_eq!(markers.food, vec![(0, 0)]);
            }
        }
    }

    #[test]
    fn test_corners() {
        let maze = carved(5, 4, 1);
        let markers = place_markers(&maze, ProblemType::Corners, None, &mut RandomSource::new(2));
        assert_eq!(markers.food, vec![(0, 0), (0, 3), (4, 0), (4, 3)]);
        assert!(!markers.food.contains(&markers.pacman));
    }

    #[test]
    fn test_corners_degenerate_grids() {
        let maze = carved(1, 5, 1);
        assert_eq!(corners(&maze), vec![(0, 0), (0, 4)]);

        // 2x2: every cell is a corner
        let maze = carved(2, 2, 1);
        let markers = place_markers(&maze, ProblemType::Corners, None, &mut RandomSource::new(8));
        assert_eq!(markers.food.len(), 3);
        assert!(!markers.food.contains(&markers.pacman));
    }

    #[test]
    fn test_food_respects_max() {
        let maze = carved(6, 6, 3);
        let markers = place_markers(&maze, ProblemType::Food, Some(5), &mut RandomSource::new(3));
        assert_eq!(markers.food.len(), 5);
        assert!(!markers.food.contains(&markers.pacman));
        let mut unique = markers.food.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_food_clamps_to_free_cells() {
        let maze = carved(3, 3, 3);
        let markers = place_markers(&maze, ProblemType::Food, Some(100), &mut RandomSource::new(3));
        assert_eq!(markers.food.len(), 8);
        let everywhere = place_markers(&maze, ProblemType::Food, None, &mut RandomSource::new(3));
        assert_eq!(everywhere.food.len(), 8);
    }
}
