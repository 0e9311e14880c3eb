use crate::{maze::Maze, random::RandomSource};

/// Carves a spanning tree with a randomized depth-first traversal, then knocks
/// down each remaining wall with probability `cycle_probability`.
pub fn randomized_dfs(maze: &mut Maze, cycle_probability: f64, rng: &mut RandomSource) {
    if maze.is_empty() {
        return;
    }

    let mut visited = vec![false; maze.cell_count()];

    // Initialize the starting point
    let start = (
        rng.index(maze.width() as usize) as u8,
        rng.index(maze.height() as usize) as u8,
    );
    visited[maze.index_of(start)] = true;

    // The stack keeps only carved cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let unvisited = maze
            .neighbors(cell)
            .filter(|&c| !visited[maze.index_of(c)])
            .collect::<Vec<_>>();

        if let Some(&neighbor) = rng.pick(&unvisited) {
            maze.open_wall(cell, neighbor);
            visited[maze.index_of(neighbor)] = true;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }

    if cycle_probability > 0.0 {
        inject_cycles(maze, cycle_probability, rng);
    }
}

/// Opening a wall only adds edges, so connectivity is preserved.
fn inject_cycles(maze: &mut Maze, cycle_probability: f64, rng: &mut RandomSource) {
    let closed = maze
        .interior_walls()
        .filter(|edge| maze.has_wall(edge.a, edge.b))
        .collect::<Vec<_>>();
    let opened = closed
        .into_iter()
        .filter(|_| rng.chance(cycle_probability))
        .map(|edge| maze.open_wall(edge.a, edge.b))
        .filter(|&removed| removed)
        .count();
    tracing::debug!("[dfs] injected {} cycles", opened);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_builds_spanning_tree() {
        for seed in 0..20 {
            let mut maze = Maze::new(8, 5);
            randomized_dfs(&mut maze, 0.0, &mut RandomSource::new(seed));
            assert!(maze.is_connected());
            assert_eq!(maze.open_passages(), maze.cell_count() - 1);
        }
    }

    #[test]
    fn test_full_cycle_probability_opens_everything() {
        let mut maze = Maze::new(5, 5);
        randomized_dfs(&mut maze, 1.0, &mut RandomSource::new(3));
        assert_eq!(maze.closed_walls(), 0);
    }

    #[test]
    fn test_cycles_add_passages() {
        let mut tree = Maze::new(12, 12);
        randomized_dfs(&mut tree, 0.0, &mut RandomSource::new(11));
        let mut loopy = Maze::new(12, 12);
        randomized_dfs(&mut loopy, 0.5, &mut RandomSource::new(11));
        // Same seed, same carve; the cycle pass only removes walls on top of it
        assert!(loopy.open_passages() > tree.open_passages());
        assert!(
            tree.interior_walls()
                .filter(|e| !tree.has_wall(e.a, e.b))
                .all(|e| !loopy.has_wall(e.a, e.b))
        );
    }
}
