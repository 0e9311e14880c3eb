//! Seeded maze layouts for Pac-Man search problems.
//!
//! A run seeds a [`RandomSource`], carves a [`Maze`] with one of the
//! [`generators`], places Pac-Man and the goals with [`place_markers`] and
//! renders the result as a [`Layout`] of `%`, ` `, `P` and `.` characters.

pub mod config;
pub mod error;
pub mod generators;
pub mod layout;
pub mod markers;
pub mod maze;
pub mod random;

pub use config::{GenerationRequest, ValidRequest};
pub use error::{ConfigError, LayoutError, MapGenError, Result};
pub use generators::{GeneratorParams, Method, generate_maze};
pub use layout::{Layout, render};
pub use markers::{Markers, ProblemType, place_markers};
pub use maze::{Coord, Maze, Tile};
pub use random::RandomSource;

/// Validates `request` and runs the whole pipeline. The same request always
/// yields the same layout.
pub fn generate_layout(request: &GenerationRequest) -> Result<Layout> {
    let request = request.validate()?;
    tracing::info!(
        "[mapgen] generating {}x{} {} layout with {} (seed {})",
        request.width,
        request.height,
        request.problem_type,
        request.method,
        request.seed
    );
    Ok(generate_validated(&request))
}

/// Runs the pipeline on an already validated request.
pub fn generate_validated(request: &ValidRequest) -> Layout {
    let mut rng = RandomSource::new(request.seed);
    tracing::debug!("[mapgen] random stream seeded with {}", rng.seed());
    let mut maze = Maze::new(request.width, request.height);
    generate_maze(&mut maze, request.method, &request.params, &mut rng);
    let markers = place_markers(&maze, request.problem_type, request.max_food, &mut rng);
    render(&maze, &markers)
}
