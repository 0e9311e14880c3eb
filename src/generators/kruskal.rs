use crate::{
    generators::union_find::UnionFind,
    maze::{Edge, Maze},
    random::RandomSource,
};

/// Opens every wall in `edges` whose two cells are still in different sets,
/// merging the sets as it goes. Returns the number of walls opened.
pub(super) fn join_components(
    maze: &mut Maze,
    uf: &mut UnionFind,
    edges: impl IntoIterator<Item = Edge>,
) -> usize {
    let mut opened = 0;
    for edge in edges {
        // Convert cell coordinates to UnionFind indices
        let idx1 = maze.index_of(edge.a);
        let idx2 = maze.index_of(edge.b);

        // If cells are not yet connected, remove the wall between them
        if uf.unite(idx1, idx2) {
            maze.open_wall(edge.a, edge.b);
            opened += 1;
        }
    }
    opened
}

pub fn randomized_kruskal(maze: &mut Maze, rng: &mut RandomSource) {
    if maze.is_empty() {
        return;
    }

    // Initialize Union-Find for all cells
    let mut uf = UnionFind::new(maze.cell_count());

    // Collect all possible edges (walls between adjacent cells) and shuffle them
    let mut edges = maze.interior_walls().collect::<Vec<_>>();
    rng.shuffle(&mut edges);

    join_components(maze, &mut uf, edges);
    debug_assert_eq!(uf.components(), 1);
}
