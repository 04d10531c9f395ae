use astar_pathfinding::benchmark::{compare_algorithms, format_table};
use astar_pathfinding::{Grid, GridError, Point, Tile};

/// A square map crossed by walls with alternating gaps, so routes have to
/// snake from one side to the other.
fn build_serpentine(size: i32) -> Result<Grid, GridError> {
    let mut grid = Grid::open(size, size);

    for wall_x in (2..size - 1).step_by(3) {
        let gap_y = if (wall_x / 3) % 2 == 0 { size - 1 } else { 0 };
        for y in 0..size {
            if y != gap_y {
                grid.set(Point::new(wall_x, y), Tile::Wall)?;
            }
        }
    }

    Ok(grid)
}

fn main() -> Result<(), GridError> {
    println!("🚀 Comparing unidirectional and bidirectional A*...\n");

    for size in [16, 64, 128] {
        let open = Grid::open(size, size);
        let serpentine = build_serpentine(size)?;
        let from = Point::new(0, 0);
        let to = Point::new(size - 1, size - 1);

        println!("Open {size}x{size}:");
        print!("{}", format_table(&compare_algorithms(&open, from, to, u32::MAX)));

        println!("Serpentine {size}x{size}:");
        print!(
            "{}",
            format_table(&compare_algorithms(&serpentine, from, to, u32::MAX))
        );
        println!();
    }

    println!("📊 Bidirectional search should explore fewer tiles on open maps.");
    Ok(())
}
