mod fixtures;

use astar_pathfinding::benchmark::{compare_algorithms, format_table};
use astar_pathfinding::{Algorithm, BidirectionalAStar, Grid, SearchConfig, SearchOutcome};
use fixtures::point;

#[test]
fn test_compare_algorithms_on_open_grid() {
    let grid = Grid::open(6, 6);

    let results = compare_algorithms(&grid, point(0, 0), point(5, 5), u32::MAX);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].algorithm, Algorithm::Unidirectional);
    assert_eq!(results[1].algorithm, Algorithm::Bidirectional);

    assert_eq!(results[0].outcome, "found");
    assert_eq!(results[0].path_cost, Some(10));
    assert_eq!(results[0].path_length, 10);

    assert_eq!(results[1].outcome, "found");
    assert!(results[1].path_cost.unwrap() >= 10);
    assert!(results.iter().all(|result| result.nodes_explored > 0));
}

#[test]
fn test_compare_algorithms_reports_failures() {
    let grid = Grid::parse("..#..\n..#..").unwrap();

    let results = compare_algorithms(&grid, point(0, 0), point(4, 1), u32::MAX);

    for result in &results {
        assert_eq!(result.outcome, "unreachable");
        assert_eq!(result.path_cost, None);
        assert_eq!(result.path_length, 0);
    }
}

#[test]
fn test_format_table() {
    let grid = Grid::open(3, 1);
    let results = compare_algorithms(&grid, point(0, 0), point(2, 0), 2);

    let table = format_table(&results);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("algorithm"));
    assert!(lines[1].starts_with("unidirectional"));
    assert!(lines[1].contains("budget exhausted"));
    assert!(lines[2].starts_with("bidirectional"));
}

#[test]
fn test_search_config_dispatches_to_bidirectional() {
    let grid = Grid::open(6, 1);
    let config = SearchConfig::new(u32::MAX, Algorithm::Bidirectional);

    let (outcome, nodes_explored) = config.run(point(0, 0), point(5, 0), &grid);
    let direct = BidirectionalAStar::new().search(u32::MAX, point(0, 0), point(5, 0), &grid);

    assert_eq!(outcome, direct);
    assert!(matches!(outcome, SearchOutcome::Found { cost: 5, .. }));
    assert!(nodes_explored > 0);
}

#[test]
fn test_diagonal_moves_come_from_the_grid() {
    let config = SearchConfig::new(u32::MAX, Algorithm::Unidirectional);
    let grid = Grid::open(3, 3);

    let (straight, _) = config.run(point(0, 0), point(2, 2), &grid);
    let (diagonal, _) = config.run(point(0, 0), point(2, 2), &grid.clone().with_diagonal(true));

    assert_eq!(straight.cost(), Some(&4));
    assert_eq!(
        diagonal,
        SearchOutcome::Found {
            path: vec![point(1, 1), point(2, 2)],
            cost: 2
        }
    );

    let results = compare_algorithms(&grid.with_diagonal(true), point(0, 0), point(2, 2), u32::MAX);
    assert_eq!(results[0].path_cost, Some(2));
}
