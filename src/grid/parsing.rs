use super::{Grid, Point, Tile};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),
    #[error("map contains no tiles")]
    EmptyMap,
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile { tile: char, row: usize, column: usize },
    #[error("tile cost {0} is outside 1..=9")]
    InvalidCost(u8),
    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),
    #[error("invalid point {0:?}, expected \"x,y\"")]
    InvalidPoint(String),
    #[error("point ({}, {}) is outside the map", .0.x, .0.y)]
    OutOfBounds(Point),
    #[error("no {0} given and the map has no marker for it")]
    MissingEndpoint(&'static str),
}

impl Grid {
    /// Parses an ASCII map: `.` floor, `1`-`9` floor with that cost, `#`
    /// wall, `S`/`G` start and goal on plain floor. Trailing blank lines are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let row_count = rows
            .iter()
            .rposition(|row| !row.is_empty())
            .map_or(0, |last| last + 1);

        if row_count == 0 {
            return Err(GridError::EmptyMap);
        }

        let width = rows[0].chars().count();
        if width == 0 {
            return Err(GridError::EmptyMap);
        }

        let mut tiles = Vec::with_capacity(width * row_count);
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows[..row_count].iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (column, tile) in line.chars().enumerate() {
                let point = Point::new(column as i32, row as i32);
                tiles.push(parse_tile(tile, row, column)?);

                match tile {
                    'S' => set_marker(&mut start, point, tile)?,
                    'G' => set_marker(&mut goal, point, tile)?,
                    _ => {}
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: row_count as i32,
            tiles,
            start,
            goal,
            diagonal: false,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, GridError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

fn parse_tile(tile: char, row: usize, column: usize) -> Result<Tile, GridError> {
    match tile {
        '.' | 'S' | 'G' => Ok(Tile::Floor(1)),
        '#' => Ok(Tile::Wall),
        '1'..='9' => Ok(Tile::Floor(tile as u8 - b'0')),
        _ => Err(GridError::UnknownTile { tile, row, column }),
    }
}

fn set_marker(slot: &mut Option<Point>, point: Point, marker: char) -> Result<(), GridError> {
    if slot.replace(point).is_some() {
        return Err(GridError::DuplicateMarker(marker));
    }
    Ok(())
}
