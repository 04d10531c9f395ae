mod args;
mod colors;
mod display;

use args::Args;
use astar_pathfinding::benchmark::compare_algorithms;
use astar_pathfinding::{Grid, GridError, Point, SearchConfig};
use clap::Parser;
use colors::ColorScheme;
use display::{display_comparison, display_outcome, display_search_info};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), GridError> {
    let grid = Grid::from_path(&args.map)?.with_diagonal(args.diagonal);
    let from = resolve_endpoint(&grid, args.from, grid.start(), "start")?;
    let to = resolve_endpoint(&grid, args.to, grid.goal(), "goal")?;

    let config = SearchConfig::new(args.max_cost.unwrap_or(u32::MAX), args.algorithm);

    if args.compare {
        let results = compare_algorithms(&grid, from, to, config.max_cost);
        display_comparison(&results, colors);
        return Ok(());
    }

    if !args.quiet {
        display_search_info(&grid, from, to, &config, colors);
    }

    let search_timer = Instant::now();
    let (outcome, nodes_explored) = config.run(from, to, &grid);
    let search_duration = search_timer.elapsed().as_secs_f64();

    display_outcome(
        &grid,
        from,
        &outcome,
        nodes_explored,
        search_duration,
        args,
        colors,
    );
    Ok(())
}

fn resolve_endpoint(
    grid: &Grid,
    given: Option<Point>,
    marker: Option<Point>,
    name: &'static str,
) -> Result<Point, GridError> {
    let point = given.or(marker).ok_or(GridError::MissingEndpoint(name))?;
    grid.check_point(point)
}
