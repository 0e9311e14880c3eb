use std::{collections::VecDeque, fmt, io::Write, str::FromStr};

use crossterm::{queue, style};

use crate::{
    error::LayoutError,
    markers::Markers,
    maze::{Grid, Maze, Tile},
};

/// The rendered character grid: `2h + 1` rows of `2w + 1` tiles, framed by walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
}

/// Renders a finished maze and its markers. Pure and deterministic.
pub fn render(maze: &Maze, markers: &Markers) -> Layout {
    let mut grid = maze.grid().clone();
    for &food in &markers.food {
        grid[Maze::room(food)] = Tile::FOOD;
    }
    grid[Maze::room(markers.pacman)] = Tile::PACMAN;
    Layout { grid }
}

impl Layout {
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.grid.rows()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.grid.tiles().iter().filter(|&&t| t == tile).count()
    }

    /// Tile coordinates `(x, y)` of every occurrence of `tile`, row-major.
    pub fn find(&self, tile: Tile) -> Vec<(u16, u16)> {
        let width = self.width();
        (0..self.height())
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&coord| self.grid[coord] == tile)
            .collect()
    }

    /// Checks that every non-wall tile is reachable from every other one
    /// through 4-neighbour moves.
    pub fn is_connected(&self) -> bool {
        let (width, height) = (self.width(), self.height());
        let open = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&coord| !self.grid[coord].is_wall())
            .collect::<Vec<_>>();
        let Some(&first) = open.first() else {
            return true;
        };

        let mut seen = vec![false; width as usize * height as usize];
        seen[first.1 as usize * width as usize + first.0 as usize] = true;
        let mut reached = 1;
        let mut queue = VecDeque::from([first]);

        while let Some((x, y)) = queue.pop_front() {
            let steps = [
                (x.wrapping_sub(1), y),
                (x.saturating_add(1), y),
                (x, y.wrapping_sub(1)),
                (x, y.saturating_add(1)),
            ];
            for (nx, ny) in steps {
                if !self.grid.is_in_bounds(nx, ny) || self.grid[(nx, ny)].is_wall() {
                    continue;
                }
                let idx = ny as usize * width as usize + nx as usize;
                if !seen[idx] {
                    seen[idx] = true;
                    reached += 1;
                    queue.push_back((nx, ny));
                }
            }
        }
        reached == open.len()
    }

    /// Writes a colored preview of the layout for terminals.
    pub fn write_styled(&self, out: &mut impl Write) -> std::io::Result<()> {
        for row in self.rows() {
            for tile in row {
                queue!(out, style::PrintStyledContent(tile.styled()))?;
            }
            queue!(out, style::ResetColor, style::Print("\n"))?;
        }
        out.flush()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines().collect::<Vec<_>>();
        let expected = match lines.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(LayoutError::Empty),
        };
        if expected > u16::MAX as usize || lines.len() > u16::MAX as usize {
            return Err(LayoutError::TooLarge {
                width: expected,
                height: lines.len(),
            });
        }

        let rows = lines
            .iter()
            .enumerate()
            .map(|(line, text)| {
                let found = text.chars().count();
                if found != expected {
                    return Err(LayoutError::Ragged {
                        line: line + 1,
                        expected,
                        found,
                    });
                }
                text.chars()
                    .enumerate()
                    .map(|(column, c)| {
                        Tile::try_from(c).map_err(|found| LayoutError::UnknownCharacter {
                            found,
                            line: line + 1,
                            column: column + 1,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Layout {
            grid: Grid::from_rows(rows),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_corridor() {
        let mut maze = Maze::new(3, 1);
        maze.open_wall((0, 0), (1, 0));
        maze.open_wall((1, 0), (2, 0));
        let markers = Markers {
            pacman: (0, 0),
            food: vec![(2, 0)],
        };
        let layout = render(&maze, &markers);
        assert_eq!(layout.to_string(), "%%%%%%%\n%P   .%\n%%%%%%%\n");
    }

    #[test]
    fn test_render_keeps_closed_walls() {
        let mut maze = Maze::new(2, 2);
        maze.open_wall((0, 0), (1, 0));
        maze.open_wall((1, 0), (1, 1));
        maze.open_wall((1, 1), (0, 1));
        let markers = Markers {
            pacman: (0, 1),
            food: vec![(0, 0)],
        };
        let expected = "\
%%%%%
%.  %
%%% %
%P  %
%%%%%
";
        assert_eq!(render(&maze, &markers).to_string(), expected);
        assert!(render(&maze, &markers).is_connected());
    }

    #[test]
    fn test_parse_round_trip() {
        let text = "%%%%%\n%P .%\n%%%%%\n";
        let layout = text.parse::<Layout>().unwrap();
        assert_eq!(layout.width(), 5);
        assert_eq!(layout.height(), 3);
        assert_eq!(layout.count(Tile::PACMAN), 1);
        assert_eq!(layout.find(Tile::FOOD), vec![(3, 1)]);
        assert_eq!(layout.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Layout>(), Err(LayoutError::Empty));
        assert_eq!(
            "%%%\n%%\n".parse::<Layout>(),
            Err(LayoutError::Ragged {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "%%%\n%G%\n".parse::<Layout>(),
            Err(LayoutError::UnknownCharacter {
                found: 'G',
                line: 2,
                column: 2
            })
        );
    }

    #[test]
    fn test_disconnected_layout() {
        let layout = "%%%%%\n% % %\n%%%%%\n".parse::<Layout>().unwrap();
        assert!(!layout.is_connected());
    }

    #[test]
    fn test_styled_output_contains_symbols() {
        let layout = "%%%\n%P%\n%%%\n".parse::<Layout>().unwrap();
        let mut out = Vec::new();
        layout.write_styled(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('P'));
        assert_eq!(text.matches('\n').count(), 3);
    }
}
