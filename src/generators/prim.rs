use crate::{maze::Maze, random::RandomSource};

/// Grows a spanning tree from a random cell, attaching one random frontier
/// cell at a time to a random neighbor already in the maze.
pub fn randomized_prim(maze: &mut Maze, rng: &mut RandomSource) {
    if maze.is_empty() {
        return;
    }

    let mut in_maze = vec![false; maze.cell_count()];
    let mut seen = vec![false; maze.cell_count()];

    // Initialize the starting point
    let start = (
        rng.index(maze.width() as usize) as u8,
        rng.index(maze.height() as usize) as u8,
    );
    in_maze[maze.index_of(start)] = true;
    seen[maze.index_of(start)] = true;

    // Cells adjacent to the maze that are not part of it yet
    let mut frontiers = Vec::new();
    for neighbor in maze.neighbors(start) {
        seen[maze.index_of(neighbor)] = true;
        frontiers.push(neighbor);
    }

    while !frontiers.is_empty() {
        // Randomly select a cell from the frontiers
        let idx = rng.index(frontiers.len());
        let frontier = frontiers.swap_remove(idx);

        let carved = maze
            .neighbors(frontier)
            .filter(|&c| in_maze[maze.index_of(c)])
            .collect::<Vec<_>>();
        // A frontier cell always touches the maze
        if let Some(&neighbor) = rng.pick(&carved) {
            maze.open_wall(frontier, neighbor);
        }
        in_maze[maze.index_of(frontier)] = true;

        let fresh = maze
            .neighbors(frontier)
            .filter(|&c| !seen[maze.index_of(c)])
            .collect::<Vec<_>>();
        for coord in fresh {
            seen[maze.index_of(coord)] = true;
            frontiers.push(coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randomized_prim() {
        for seed in 0..20 {
            let mut maze = Maze::new(7, 7);
            randomized_prim(&mut maze, &mut RandomSource::new(seed));
            assert!(maze.is_connected());
            assert_eq!(maze.open_passages(), maze.cell_count() - 1);
        }
    }

    #[test]
    fn test_prim_is_seeded() {
        let mut a = Maze::new(9, 4);
        let mut b = Maze::new(9, 4);
        randomized_prim(&mut a, &mut RandomSource::new(77));
        randomized_prim(&mut b, &mut RandomSource::new(77));
        assert_eq!(a, b);
    }
}
