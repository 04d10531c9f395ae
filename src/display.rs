use astar_pathfinding::benchmark::{BenchmarkResult, format_table};
use astar_pathfinding::{Grid, Point, SearchConfig, SearchOutcome};

use crate::args::Args;
use crate::colors::ColorScheme;

pub fn display_search_info(
    grid: &Grid,
    from: Point,
    to: Point,
    config: &SearchConfig<u32>,
    colors: &ColorScheme,
) {
    println!(
        "🧭 Finding route from {} to {}",
        colors.point(&format!("({from})")),
        colors.point(&format!("({to})"))
    );
    println!("⚙️  Using {} A*", config.algorithm.as_str());

    if config.max_cost != u32::MAX {
        println!(
            "⚡ Giving up at cost {}",
            colors.number(&config.max_cost.to_string())
        );
    }

    if grid.diagonal() {
        println!("↗️  Diagonal moves allowed");
    }
}

pub fn display_outcome(
    grid: &Grid,
    from: Point,
    outcome: &SearchOutcome<Point, u32>,
    nodes_explored: usize,
    search_duration: f64,
    args: &Args,
    colors: &ColorScheme,
) {
    match outcome {
        SearchOutcome::Found { path, cost } => {
            if args.quiet {
                println!("{}", format_route(from, path));
                return;
            }
            println!(
                "{} {} steps, cost {}\n",
                colors.success("✅ Found route:"),
                colors.number(&path.len().to_string()),
                colors.number(&cost.to_string())
            );
            display_map(&grid.render_path(from, path), colors);
            println!("\n{}", format_route(from, path));
        }
        failure => {
            println!(
                "{} ({})",
                colors.error("❌ No route found"),
                failure.as_str()
            );
        }
    }

    if args.verbose {
        display_search_statistics(nodes_explored, search_duration, colors);
    }
}

pub fn display_comparison(results: &[BenchmarkResult<u32>], colors: &ColorScheme) {
    print!("{}", colors.stats(&format_table(results)));
}

fn display_map(rendered: &str, colors: &ColorScheme) {
    for line in rendered.lines() {
        let row: String = line
            .chars()
            .map(|tile| match tile {
                '*' | 'S' | 'G' => colors.route(&tile.to_string()).to_string(),
                '#' => colors.wall("#").to_string(),
                other => other.to_string(),
            })
            .collect();
        println!("{row}");
    }
}

fn format_route(from: Point, path: &[Point]) -> String {
    std::iter::once(from)
        .chain(path.iter().copied())
        .map(|point| format!("({point})"))
        .collect::<Vec<_>>()
        .join(" → ")
}

fn display_search_statistics(nodes_explored: usize, search_duration: f64, colors: &ColorScheme) {
    println!(
        "\n{} {} tiles explored in {}",
        colors.stats("📊"),
        colors.number(&nodes_explored.to_string()),
        colors.number(&format!("{:.3}ms", search_duration * 1000.0))
    );
}
