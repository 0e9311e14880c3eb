use thiserror::Error;

/// A generation request that must be rejected before any work is done.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be greater than 0, got {value}")]
    NonPositiveDimension { name: &'static str, value: i64 },

    #[error("{name} must be at most {max}, got {value}")]
    DimensionTooLarge {
        name: &'static str,
        value: i64,
        max: u8,
    },

    #[error("a {width}x{height} grid has fewer than two cells")]
    TooFewCells { width: u8, height: u8 },

    #[error("{name} must be a number between 0 and 1, got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("max food must be greater than 0")]
    ZeroMaxFood,

    #[error("unknown generation method '{0}' (expected one of: random, dfs, kruskal, prim)")]
    UnknownMethod(String),

    #[error("unknown problem type '{0}' (expected one of: search, corners, food)")]
    UnknownProblemType(String),
}

/// Text that is not a well-formed layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("line {line} has {found} characters, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout character {found:?} at line {line}, column {column}")]
    UnknownCharacter {
        found: char,
        line: usize,
        column: usize,
    },

    #[error("layout of {width}x{height} tiles is too large")]
    TooLarge { width: usize, height: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapGenError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed layout: {0}")]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, MapGenError>;
