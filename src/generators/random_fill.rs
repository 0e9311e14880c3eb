use crate::{
    generators::{kruskal::join_components, union_find::UnionFind},
    maze::Maze,
    random::RandomSource,
};

/// Keeps each interior wall with probability `wall_probability`, then repairs
/// connectivity by opening the fewest extra walls needed to join the pieces.
pub fn random_fill(maze: &mut Maze, wall_probability: f64, rng: &mut RandomSource) {
    if maze.is_empty() {
        return;
    }

    let mut uf = UnionFind::new(maze.cell_count());
    let mut closed = Vec::new();

    for edge in maze.interior_walls() {
        if rng.chance(wall_probability) {
            closed.push(edge);
        } else {
            maze.open_wall(edge.a, edge.b);
            uf.unite(maze.index_of(edge.a), maze.index_of(edge.b));
        }
    }

    let components = uf.components();
    rng.shuffle(&mut closed);
    let repaired = join_components(maze, &mut uf, closed);

    tracing::debug!(
        "[random] coin flips left {} components, repair opened {} walls",
        components,
        repaired
    );
    debug_assert_eq!(repaired, components - 1);
}
