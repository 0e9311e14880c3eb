use super::cell::Tile;

/// Row-major rectangle of tiles. Backs both the maze model and rendered layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, tile: Tile) -> Self {
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |row| row.len()) as u16;
        let data = rows.into_iter().flatten().collect::<Vec<_>>().into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.data
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub fn is_in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks() rejects a zero chunk size
        self.data.chunks(self.width.max(1) as usize)
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        assert!(
            self.is_in_bounds(x, y),
            "tile ({x}, {y}) is out of bounds for a {}x{} grid",
            self.width,
            self.height
        );
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Tile;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(4, 3, Tile::WALL);
        grid[(3, 2)] = Tile::PACMAN;
        assert_eq!(grid[(3, 2)], Tile::PACMAN);
        assert_eq!(grid.tiles()[2 * 4 + 3], Tile::PACMAN);
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::new(5, 5, Tile::WALL);
        assert!(grid.is_boundary(0, 2));
        assert!(grid.is_boundary(4, 4));
        assert!(!grid.is_boundary(2, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3, 3, Tile::EMPTY);
        let _ = grid[(3, 0)];
    }

    #[test]
    fn test_rows() {
        let grid = Grid::new(3, 2, Tile::EMPTY);
        let rows = grid.rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
    }
}
