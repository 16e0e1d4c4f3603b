//! The immutable track grid.

use crate::error::GridError;
use std::fmt;
use std::str::FromStr;
use trackline_core::{CellKind, Coordinate, TrackError};

/// A rectangular `width × height` map of [`CellKind`]s.
///
/// Cells are stored row-major with a stride equal to `width`, so the cell
/// at `(x, y)` lives at index `y * width + x`. Every row has the same
/// length; construction rejects ragged or empty input. A `Grid` never
/// changes after construction.
///
/// # Examples
///
/// ```
/// use trackline_core::{CellKind, Coordinate};
/// use trackline_grid::Grid;
///
/// let grid: Grid = "000\n010\n000".parse().unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.cell_at(Coordinate::new(1, 1)).unwrap(), CellKind::Traversable);
/// assert!(grid.cell_at(Coordinate::new(3, 1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a grid from typed rows.
    ///
    /// Returns `Err(GridError::Empty)` for no rows or zero-width rows and
    /// `Err(GridError::RaggedRow)` if any row's length differs from the
    /// first.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        check_dim("width", width)?;
        check_dim("height", rows.len())?;

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend_from_slice(cols);
        }
        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            cells,
        })
    }

    /// Parse a track map written in the `0`/`1`/`2`/`3` alphabet.
    ///
    /// One line per row. Surrounding whitespace and blank lines are
    /// ignored, so indented string literals parse as expected.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let cols = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    CellKind::from_symbol(symbol).ok_or(GridError::UnknownCell { symbol, row, col })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cols);
        }
        Self::from_rows(rows)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Distance between vertically adjacent cells in the flat layout.
    pub fn stride(&self) -> usize {
        self.width as usize
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Longest straight run a ray can make before it must leave the grid.
    pub fn max_extent(&self) -> usize {
        self.width as usize + self.height as usize
    }

    /// `true` if `coord` lies within `[0, width) × [0, height)`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Row-major index of `coord`, or `None` outside the grid.
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.stride() + coord.x as usize)
    }

    /// Coordinate of a row-major index, or `None` past the last cell.
    pub fn coordinate_of(&self, index: usize) -> Option<Coordinate> {
        (index < self.cells.len()).then(|| {
            Coordinate::new((index % self.stride()) as i32, (index / self.stride()) as i32)
        })
    }

    /// The cell at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<CellKind> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// The cell at `coord`.
    ///
    /// Returns `Err(TrackError::OutOfBounds)` outside the grid.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellKind, TrackError> {
        self.get(coord).ok_or_else(|| TrackError::OutOfBounds {
            coord,
            bounds: self.bounds_description(),
        })
    }

    /// `true` if `coord` is inside the grid and holds `kind`.
    pub fn is(&self, kind: CellKind, coord: Coordinate) -> bool {
        self.get(coord) == Some(kind)
    }

    /// First cell of `kind` in row-major order at or after `from_index`.
    ///
    /// Returns `Err(TrackError::NotFound)` if the scan reaches the end of
    /// the grid without a match.
    pub fn find_first(&self, kind: CellKind, from_index: usize) -> Result<Coordinate, TrackError> {
        self.cells
            .iter()
            .enumerate()
            .skip(from_index)
            .find(|(_, cell)| **cell == kind)
            .and_then(|(i, _)| self.coordinate_of(i))
            .ok_or(TrackError::NotFound { kind, from_index })
    }

    /// Number of cells of `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.stride())
    }

    /// The flat serialized form: one symbol per cell, row-major, no
    /// separators. Index `i` of the string is cell `i`.
    pub fn serialized(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }

    /// Human-readable description of the valid coordinate range.
    pub fn bounds_description(&self) -> String {
        format!("[0, {}) x [0, {})", self.width, self.height)
    }
}

fn check_dim(name: &'static str, value: usize) -> Result<(), GridError> {
    if value > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name,
            value,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    // ── Construction tests ──────────────────────────────────────

    #[test]
    fn parse_dimensions() {
        let g = Grid::parse("0000\n0120\n0130\n0000").unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 4);
        assert_eq!(g.stride(), 4);
        assert_eq!(g.cell_count(), 16);
    }

    #[test]
    fn parse_ignores_indentation_and_blank_lines() {
        let g = Grid::parse(
            "
            000
            012

            030
            ",
        )
        .unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.get(c(2, 1)), Some(CellKind::StartGate));
    }

    #[test]
    fn parse_empty_rejected() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(Grid::parse("  \n \n"), Err(GridError::Empty));
    }

    #[test]
    fn parse_ragged_rejected() {
        assert_eq!(
            Grid::parse("000\n00\n000"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn parse_unknown_symbol_rejected() {
        assert_eq!(
            Grid::parse("000\n0x0"),
            Err(GridError::UnknownCell {
                symbol: 'x',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn from_rows_zero_width_rejected() {
        assert_eq!(Grid::from_rows(vec![vec![], vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let text = "00000\n02230\n01110\n00000";
        let g = Grid::parse(text).unwrap();
        assert_eq!(g.to_string(), text);
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn serialized_is_flat_row_major() {
        let g = Grid::parse("012\n300").unwrap();
        assert_eq!(g.serialized(), "012300");
    }

    // ── Lookup tests ────────────────────────────────────────────

    #[test]
    fn cell_at_out_of_bounds() {
        let g = Grid::parse("01\n10").unwrap();
        for bad in [c(-1, 0), c(0, -1), c(2, 0), c(0, 2)] {
            assert!(matches!(
                g.cell_at(bad),
                Err(TrackError::OutOfBounds { coord, .. }) if coord == bad
            ));
        }
        assert_eq!(g.cell_at(c(1, 0)).unwrap(), CellKind::Traversable);
    }

    #[test]
    fn find_first_row_major() {
        let g = Grid::parse("0001\n0100\n0000").unwrap();
        assert_eq!(g.find_first(CellKind::Traversable, 0).unwrap(), c(3, 0));
        assert_eq!(g.find_first(CellKind::Traversable, 4).unwrap(), c(1, 1));
    }

    #[test]
    fn find_first_not_found() {
        let g = Grid::parse("0001\n0100\n0000").unwrap();
        assert_eq!(
            g.find_first(CellKind::StartGate, 0),
            Err(TrackError::NotFound {
                kind: CellKind::StartGate,
                from_index: 0
            })
        );
        assert!(g.find_first(CellKind::Traversable, 6).is_err());
        assert!(g.find_first(CellKind::Boundary, 100).is_err());
    }

    #[test]
    fn count_kinds() {
        let g = Grid::parse("0221\n0331").unwrap();
        assert_eq!(g.count(CellKind::StartGate), 2);
        assert_eq!(g.count(CellKind::Traversable), 2);
        assert_eq!(g.count(CellKind::Boundary), 2);
    }

    #[test]
    fn coordinate_of_past_end_is_none() {
        let g = Grid::parse("01\n10").unwrap();
        assert_eq!(g.coordinate_of(4), None);
        assert_eq!(g.index_of(c(2, 1)), None);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn index_coordinate_round_trip(width in 1usize..20, height in 1usize..20) {
            let g = Grid::from_rows(vec![vec![CellKind::Traversable; width]; height]).unwrap();
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    let coord = c(x, y);
                    let index = g.index_of(coord).unwrap();
                    prop_assert_eq!(index, y as usize * g.stride() + x as usize);
                    prop_assert_eq!(g.coordinate_of(index), Some(coord));
                }
            }
        }

        #[test]
        fn serialized_agrees_with_cell_at(
            rows in prop::collection::vec(prop::collection::vec(0u8..4, 6), 1..8)
        ) {
            let text: Vec<String> = rows
                .iter()
                .map(|r| r.iter().map(|&v| char::from(b'0' + v)).collect())
                .collect();
            let g = Grid::parse(&text.join("\n")).unwrap();
            let flat: Vec<char> = g.serialized().chars().collect();
            for (i, symbol) in flat.iter().enumerate() {
                let coord = g.coordinate_of(i).unwrap();
                prop_assert_eq!(g.cell_at(coord).unwrap().symbol(), *symbol);
            }
        }
    }
}
