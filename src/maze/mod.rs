pub mod cell;
pub mod grid;

use std::collections::VecDeque;

pub use cell::{PathType, Tile};
pub use grid::Grid;

/// Logical cell coordinate `(x, y)`: `x` is the column, `y` the row.
pub type Coord = (u8, u8);

/// Wall candidate between two adjacent cells. `a` is the left or upper cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: Coord,
    pub b: Coord,
}

/// The logical cell/wall grid.
///
/// Cells are stored framed: cell `(x, y)` lives at tile `(2x + 1, 2y + 1)` and
/// the wall between two adjacent cells is the tile between their rooms. The
/// outer frame is always wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    width: u8,
    height: u8,
}

impl Maze {
    /// Creates a new maze with the given width and height in cells.
    /// Every room is open and every wall is closed.
    pub fn new(width: u8, height: u8) -> Self {
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_height = height as u16 * 2 + 1;
        let grid_width = width as u16 * 2 + 1;
        let mut maze = Maze {
            grid: Grid::new(grid_width, grid_height, Tile::WALL),
            width,
            height,
        };
        maze.cells().for_each(|cell| {
            let room = Maze::room(cell);
            maze.grid[room] = Tile::EMPTY;
        });
        maze
    }

    /// Returns the framed tile grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }
    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if the maze is empty (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Flattened row-major index of a cell.
    pub fn index_of(&self, coord: Coord) -> usize {
        self.assert_in_bounds(coord);
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Enumerates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Get neighbors of a cell, in the order left, right, up, down.
    /// A neighbor is a cell one step away in a cardinal direction.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.assert_in_bounds(coord);
        let (x, y) = coord;
        [
            // NOTE: This way of handling underflow/overflow is overflow-safe.
            // When x < 1 or y < 1, wrap x - 1 or y - 1 to u8::MAX and filter it out in the
            // bounds check, as the largest cell index numerically possible is u8::MAX - 1.
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
        .into_iter()
        .filter(move |&c| self.is_in_bounds(c))
    }

    pub fn is_adjacent(&self, a: Coord, b: Coord) -> bool {
        self.is_in_bounds(a) && self.is_in_bounds(b) && a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
    }

    /// Checks whether the wall between two adjacent cells is closed.
    ///
    /// # Panics
    /// If either cell is out of bounds or the cells are not adjacent.
    pub fn has_wall(&self, a: Coord, b: Coord) -> bool {
        self.grid[self.wall_coord(a, b)].is_wall()
    }

    /// Closes or opens the wall between two adjacent cells.
    /// The argument order does not matter.
    pub fn set_wall(&mut self, a: Coord, b: Coord, closed: bool) {
        let wall = self.wall_coord(a, b);
        self.grid[wall] = if closed { Tile::WALL } else { Tile::EMPTY };
    }

    /// Removes the wall between two adjacent cells.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the passage was already open.
    pub fn open_wall(&mut self, a: Coord, b: Coord) -> bool {
        if self.has_wall(a, b) {
            self.set_wall(a, b, false);
            true
        } else {
            false
        }
    }

    /// Closes every wall between cells. The frame is untouched.
    pub fn fill_walls(&mut self) {
        self.interior_walls()
            .for_each(|edge| self.set_wall(edge.a, edge.b, true));
    }

    /// Every wall candidate between adjacent cells, row-major, with the
    /// right-hand edge of a cell listed before its lower edge.
    pub fn interior_walls(&self) -> impl Iterator<Item = Edge> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .flat_map(move |(x, y)| {
                [
                    (x + 1 < width).then(|| Edge {
                        a: (x, y),
                        b: (x + 1, y),
                    }),
                    (y + 1 < height).then(|| Edge {
                        a: (x, y),
                        b: (x, y + 1),
                    }),
                ]
            })
            .flatten()
    }

    pub fn closed_walls(&self) -> usize {
        self.interior_walls()
            .filter(|edge| self.has_wall(edge.a, edge.b))
            .count()
    }

    pub fn open_passages(&self) -> usize {
        self.interior_walls()
            .filter(|edge| !self.has_wall(edge.a, edge.b))
            .count()
    }

    /// Neighbors reachable from `coord` through an open passage.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord).filter(move |&n| !self.has_wall(coord, n))
    }

    /// Breadth-first distances from `start`, indexed by [`Maze::index_of`].
    /// Unreachable cells are `None`.
    pub fn distances_from(&self, start: Coord) -> Vec<Option<u32>> {
        let mut distances = vec![None; self.cell_count()];
        distances[self.index_of(start)] = Some(0);
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            let next = distances[self.index_of(cell)].map_or(0, |d| d + 1);
            for neighbor in self.open_neighbors(cell) {
                let slot = &mut distances[self.index_of(neighbor)];
                if slot.is_none() {
                    *slot = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }
        distances
    }

    /// Checks that every cell can be reached from every other cell.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.distances_from((0, 0)).iter().all(Option::is_some)
    }

    /// Tile coordinate of a cell's room.
    pub(crate) fn room(coord: Coord) -> (u16, u16) {
        (coord.0 as u16 * 2 + 1, coord.1 as u16 * 2 + 1)
    }

    fn wall_coord(&self, a: Coord, b: Coord) -> (u16, u16) {
        assert!(
            self.is_adjacent(a, b),
            "cells {a:?} and {b:?} are not adjacent cells of a {}x{} maze",
            self.width,
            self.height
        );
        // The wall tile sits halfway between the two rooms
        (
            a.0 as u16 + b.0 as u16 + 1,
            a.1 as u16 + b.1 as u16 + 1,
        )
    }

    fn assert_in_bounds(&self, coord: Coord) {
        assert!(
            self.is_in_bounds(coord),
            "cell {coord:?} is out of bounds for a {}x{} maze",
            self.width,
            self.height
        );
    }
}
