use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use pacman_mapgen::{GenerationRequest, Method, ProblemType, generate_layout};

/// Maze layout generator for Pac-Man search problems
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in cells. The final layout will be `2 * width + 1` wide
    #[arg(long, allow_negative_numbers = true)]
    width: i64,

    /// Grid height in cells. The final layout will be `2 * height + 1` tall
    #[arg(long, allow_negative_numbers = true)]
    height: i64,

    /// Maze generation method: random, dfs, kruskal or prim
    #[arg(long, default_value = "dfs")]
    method: Method,

    /// Random number generator seed
    #[arg(long, short, default_value_t = 0)]
    seed: u64,

    /// Problem type deciding where Pac-Man and the food go: search, corners or food
    #[arg(long, default_value = "search")]
    problem: ProblemType,

    /// Probability of an interior wall surviving (applies to: random)
    #[arg(long)]
    wall_probability: Option<f64>,

    /// Probability of knocking down a leftover wall to create loops (applies to: dfs)
    #[arg(long)]
    cycle_probability: Option<f64>,

    /// Maximum number of food pellets (applies to: food problem). Defaults to every free cell
    #[arg(long)]
    max_food: Option<usize>,

    /// Write the layout to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print a colored preview to stdout instead of the plain layout
    #[arg(long, conflicts_with = "output")]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            width: self.width,
            height: self.height,
            method: self.method,
            seed: self.seed,
            problem_type: self.problem,
            wall_probability: self.wall_probability,
            cycle_probability: self.cycle_probability,
            max_food: self.max_food,
        }
    }
}

/// Installs the global subscriber. The returned guard flushes the file writer on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path {} has no file name", path.display()))?;
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(args.verbose, args.log_file.as_deref())?;

    let layout = generate_layout(&args.request())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, layout.to_string())
                .with_context(|| format!("failed to write layout to {}", path.display()))?;
            tracing::info!("[mapgen] layout written to {}", path.display());
        }
        None if args.pretty => {
            layout
                .write_styled(&mut std::io::stdout().lock())
                .context("failed to print layout preview")?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{layout}").context("failed to print layout")?;
            stdout.flush().context("failed to print layout")?;
        }
    }
    Ok(())
}
