//! An owned walkability grid.
//!
//! [`WalkGrid`] stores one `bool` per cell in row-major order. It has a fixed
//! size for its whole lifetime and is handed to searches by shared reference,
//! so any number of searches may read the same grid.

use std::fmt;

use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors from [`WalkGrid::from_ascii`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    /// The input contained no rows.
    #[error("grid: empty input")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("grid: row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than a wall or floor marker was found.
    #[error("grid: invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

/// Errors from [`WalkGrid::try_new`] and from deserializing a [`WalkGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("grid: size {width}x{height} is negative")]
    Negative { width: i32, height: i32 },

    #[error("grid: size {width}x{height} exceeds {max} cells", max = WalkGrid::MAX_CELLS)]
    TooLarge { width: i32, height: i32 },

    /// Stored cells do not match the declared dimensions.
    #[error("grid: {width}x{height} needs {expected} cells, found {found}")]
    CellCount {
        width: i32,
        height: i32,
        expected: usize,
        found: usize,
    },
}

/// Number of cells in a `width × height` grid, checked against
/// [`WalkGrid::MAX_CELLS`].
fn cell_count(width: i32, height: i32) -> Result<usize, GridSizeError> {
    if width < 0 || height < 0 {
        return Err(GridSizeError::Negative { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| n <= WalkGrid::MAX_CELLS)
        .ok_or(GridSizeError::TooLarge { width, height })
}

/// A fixed-size 2D grid of walkable / blocked cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWalkGrid"))]
pub struct WalkGrid {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

impl WalkGrid {
    /// Largest number of cells [`WalkGrid::try_new`] accepts.
    pub const MAX_CELLS: usize = 1 << 26;

    /// Create a `width × height` grid with every cell walkable.
    ///
    /// Negative dimensions are clamped to zero. No size cap is applied; use
    /// [`WalkGrid::try_new`] for dimensions from untrusted input.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![true; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Like [`WalkGrid::new`], but rejects negative sizes and grids larger
    /// than [`WalkGrid::MAX_CELLS`].
    pub fn try_new(width: i32, height: i32) -> Result<Self, GridSizeError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            cells: vec![true; len],
            width,
            height,
        })
    }

    /// Parse a grid from text, one row per line.
    ///
    /// `#` and `X` are walls; `.` and space are floor. Trailing empty lines
    /// are ignored.
    pub fn from_ascii(s: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> = s.lines().collect();
        let rows = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(GridParseError::Empty),
        };
        let expected = rows[0].chars().count();
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(GridParseError::InconsistentWidth {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let walkable = match ch {
                    '.' | ' ' => true,
                    '#' | 'X' => false,
                    _ => {
                        return Err(GridParseError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(walkable);
            }
        }
        Ok(Self {
            cells,
            width: expected as i32,
            height: rows.len() as i32,
        })
    }

    /// The bounding range `[0, 0] – (width, height)`.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` can be stepped on. Out-of-bounds cells are never walkable.
    pub fn is_walkable(&self, p: Point) -> bool {
        match self.bounds().index_of(p) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Set the walkability of `p`. Does nothing if out of bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.bounds().index_of(p) {
            self.cells[i] = walkable;
        }
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> bool) {
        let bounds = self.bounds();
        for (i, p) in bounds.iter().enumerate() {
            self.cells[i] = f(p);
        }
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWalkGrid {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWalkGrid> for WalkGrid {
    type Error = GridSizeError;

    fn try_from(raw: RawWalkGrid) -> Result<Self, Self::Error> {
        let RawWalkGrid {
            cells,
            width,
            height,
        } = raw;
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(GridSizeError::CellCount {
                width,
                height,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

impl fmt::Debug for WalkGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WalkGrid {}x{}", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.is_walkable(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = WalkGrid::from_ascii(".#\n..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: WalkGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn mismatched_cells_are_rejected() {
        let json = r#"{"cells":[true],"width":2,"height":2}"#;
        let err = serde_json::from_str::<WalkGrid>(json).unwrap_err();
        assert!(err.to_string().contains("needs 4 cells, found 1"));

        let json = r#"{"cells":[],"width":-1,"height":2}"#;
        assert!(serde_json::from_str::<WalkGrid>(json).is_err());
    }
}
