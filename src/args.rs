use astar_pathfinding::{Algorithm, Point};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridpath")]
#[command(about = "Find the cheapest route across an ASCII tile map")]
pub struct Args {
    /// Map file: `.` floor, `1`-`9` weighted floor, `#` wall, `S`/`G` markers
    pub map: PathBuf,

    /// Start tile as "x,y" (defaults to the map's S marker)
    #[arg(long, value_name = "X,Y")]
    pub from: Option<Point>,

    /// Goal tile as "x,y" (defaults to the map's G marker)
    #[arg(long, value_name = "X,Y")]
    pub to: Option<Point>,

    /// Give up once the estimated route cost reaches this value
    #[arg(short = 'c', long, value_name = "COST")]
    pub max_cost: Option<u32>,

    /// Search algorithm (uni or bi)
    #[arg(short, long, default_value = "uni", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Allow diagonal moves
    #[arg(short, long)]
    pub diagonal: bool,

    /// Run both algorithms and print a comparison table
    #[arg(long)]
    pub compare: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the route
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    Ok(Algorithm::from(value))
}
