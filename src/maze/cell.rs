use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Represents a tile of the framed grid, which can be either a path or a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Path(PathType),
    Wall,
}

impl Tile {
    pub const EMPTY: Tile = Tile::Path(PathType::Empty);
    pub const WALL: Tile = Tile::Wall;
    pub const FOOD: Tile = Tile::Path(PathType::Food);
    pub const PACMAN: Tile = Tile::Path(PathType::Pacman);

    /// Character used for this tile in the textual layout format.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '%',
            Tile::Path(PathType::Empty) => ' ',
            Tile::Path(PathType::Food) => '.',
            Tile::Path(PathType::Pacman) => 'P',
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Colored rendition for terminal previews. Always one character wide.
    pub fn styled(self) -> StyledContent<char> {
        match self {
            Tile::Wall => '%'.with(Color::DarkBlue),
            Tile::Path(PathType::Empty) => ' '.with(Color::Reset),
            Tile::Path(PathType::Food) => '.'.with(Color::White),
            Tile::Path(PathType::Pacman) => 'P'.with(Color::Yellow).bold(),
        }
    }
}

/// Represents different types of path tiles in the layout.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// An open tile with nothing on it.
    #[default]
    Empty,
    /// A goal or food pellet.
    Food,
    /// Pac-Man's starting tile.
    Pacman,
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '%' => Ok(Tile::WALL),
            ' ' => Ok(Tile::EMPTY),
            '.' => Ok(Tile::FOOD),
            'P' => Ok(Tile::PACMAN),
            other => Err(other),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
