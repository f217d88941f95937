use std::fmt;

use itertools::Itertools;
use nom_locate::LocatedSpan;
use tracing::debug;

use crate::error::GridError;
use crate::geometry::{DOWN, LEFT, RIGHT, UP};
use crate::tile::{match_always, Tile};

/// Immutable rectangular grid of cell values, indexed by (row, col).
///
/// Built once from input text or lines; never mutated afterwards, so any
/// number of queries may run against it without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    /// Builds a grid by applying `transform` elementwise to equal-length
    /// lines: cell (i, j) is `transform(lines[i][j])`.
    ///
    /// # Errors
    /// [`GridError::Empty`] for zero lines or a zero-width first line;
    /// [`GridError::NotRectangular`] for ragged input.
    pub fn from_lines<'a, I, F>(lines: I, transform: F) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(char) -> T,
    {
        let cells = lines
            .into_iter()
            .map(|line| line.chars().map(&transform).collect())
            .collect();
        Self::from_rows(cells)
    }

    /// Parses raw text into a char grid, then applies `transform`
    /// elementwise.
    ///
    /// # Errors
    /// As [`Grid::parse`].
    pub fn parse_with<F>(input: &str, transform: F) -> Result<Self, GridError>
    where
        F: Fn(char) -> T,
    {
        let rows = parse_rows(input)?;
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(&transform).collect())
                .collect(),
        )
    }

    fn from_rows(cells: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = cells.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((index, row)) = cells.iter().find_position(|row| row.len() != cols) {
            return Err(GridError::NotRectangular {
                line: index + 1,
                expected: cols,
                found: row.len(),
            });
        }

        let rows = cells.len();
        debug!("grid dimensions: {}x{}", rows, cols);

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols) pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(row).and_then(|cells| cells.get(col))
    }
}

impl<T: Clone> Grid<T> {
    /// The cell at (row, col) wrapped as a [`Tile`] snapshot, or `None`
    /// when out of bounds.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile<T>> {
        self.get(row, col)
            .map(|value| Tile::new(row, col, value.clone()))
    }

    /// In-bounds four-way neighbours of `tile`, in fixed
    /// {up, right, down, left} order.
    pub fn neighbours(&self, tile: &Tile<T>) -> Vec<Tile<T>> {
        self.neighbours_matching(tile, match_always)
    }

    /// In-bounds four-way neighbours of `tile` that satisfy `predicate`,
    /// preserving the fixed {up, right, down, left} step order among the
    /// survivors.
    pub fn neighbours_matching<P>(&self, tile: &Tile<T>, predicate: P) -> Vec<Tile<T>>
    where
        P: Fn(&Tile<T>, &Tile<T>) -> bool,
    {
        let mut neighbours = Vec::with_capacity(4);

        for step in [UP, RIGHT, DOWN, LEFT] {
            let ni = tile.row as isize + step.di;
            let nj = tile.col as isize + step.dj;

            if ni < 0 || nj < 0 || ni >= self.rows as isize || nj >= self.cols as isize {
                continue;
            }

            if let Some(candidate) = self.tile(ni as usize, nj as usize) {
                if predicate(tile, &candidate) {
                    neighbours.push(candidate);
                }
            }
        }

        neighbours
    }

    /// All tiles of the grid in row-major order.
    pub fn tiles(&self) -> Vec<Tile<T>> {
        self.tiles_where(|_| true)
    }

    /// Tiles satisfying `predicate`, in row-major order.
    pub fn tiles_where<P>(&self, predicate: P) -> Vec<Tile<T>>
    where
        P: Fn(&Tile<T>) -> bool,
    {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .filter_map(|(i, j)| self.tile(i, j))
            .filter(|tile| predicate(tile))
            .collect()
    }
}

impl Grid<char> {
    /// Parses raw text into a char grid: one row per line, one cell per
    /// printable non-whitespace character.
    ///
    /// # Errors
    /// [`GridError::Parse`] with a source-span diagnostic on malformed
    /// input, plus the shape errors of [`Grid::from_lines`].
    pub fn parse(input: &str) -> Result<Self, GridError> {
        Self::from_rows(parse_rows(input)?)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Transform for digit grids: maps an ASCII digit to its numeric value.
/// Callers must supply ASCII digits only; other characters produce
/// meaningless values.
pub fn digit(cell: char) -> u8 {
    (cell as u8).wrapping_sub(b'0')
}

fn parse_rows(input: &str) -> Result<Vec<Vec<char>>, GridError> {
    match parser::parse_grid(LocatedSpan::new(input)) {
        Ok((rest, rows)) => {
            // anything but trailing whitespace means a cell failed to parse
            if !rest.fragment().chars().all(char::is_whitespace) {
                return Err(GridError::Parse {
                    src: input.to_string(),
                    span: (rest.location_offset(), 1).into(),
                });
            }
            Ok(rows)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(GridError::Parse {
            src: input.to_string(),
            span: (e.input.location_offset(), 1).into(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(GridError::Parse {
            src: input.to_string(),
            span: (0, input.len()).into(),
        }),
    }
}

// region: nom parser
mod parser {
    use nom::{
        character::complete::{newline, satisfy},
        multi::{many1, separated_list1},
        IResult,
    };
    use nom_locate::LocatedSpan;

    type Span<'a> = LocatedSpan<&'a str>;

    fn parse_cell(input: Span) -> IResult<Span, char> {
        satisfy(|c: char| !c.is_whitespace() && !c.is_control())(input)
    }

    pub(super) fn parse_grid(input: Span) -> IResult<Span, Vec<Vec<char>>> {
        separated_list1(newline, many1(parse_cell))(input)
    }
}
// endregion
