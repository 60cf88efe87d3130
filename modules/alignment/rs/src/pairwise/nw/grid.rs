use std::fmt::{Display, Formatter};
use std::ops::Range;

use crate::pairwise::scoring::Score;

/// Maps DP cells (row, col) to positions in a contiguous row-major buffer.
pub trait Layout: Clone {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Columns of the row that are stored and must be evaluated.
    fn columns(&self, row: usize) -> Range<usize>;

    /// Buffer position of the cell, `None` if the cell is not stored.
    fn index(&self, row: usize, col: usize) -> Option<usize>;

    /// Total number of stored cells.
    fn size(&self) -> usize;
}

/// Every cell of the matrix is stored.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Full {
    rows: usize,
    cols: usize,
}

impl Full {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Layout for Full {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn columns(&self, _: usize) -> Range<usize> {
        0..self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn size(&self) -> usize {
        self.rows * self.cols
    }
}

/// Only the diagonal corridor |row - col| <= width is stored, `2 * width + 1` cells per row.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Band {
    rows: usize,
    cols: usize,
    width: usize,
}

impl Band {
    pub fn new(rows: usize, cols: usize, width: usize) -> Self {
        // Wider corridors cover the whole matrix anyway
        let width = width.min(rows.max(cols));
        Self { rows, cols, width }
    }

    /// Half-width of the corridor.
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn stride(&self) -> usize {
        2 * self.width + 1
    }
}

impl Layout for Band {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn columns(&self, row: usize) -> Range<usize> {
        let start = row.saturating_sub(self.width).min(self.cols);
        let end = (row + self.width + 1).min(self.cols);
        start..end
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols || col + self.width < row || col > row + self.width
        {
            return None;
        }
        Some(row * self.stride() + (col + self.width - row))
    }

    fn size(&self) -> usize {
        self.rows * self.stride()
    }
}

/// DP score matrix. Cells outside of the layout read as unreachable.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Matrix<S: Score, L: Layout> {
    layout: L,
    cells: Vec<S>,
}

impl<S: Score, L: Layout> Matrix<S, L> {
    pub fn new(layout: L) -> Self {
        let cells = vec![S::unreachable(); layout.size()];
        Self { layout, cells }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    #[inline(always)]
    pub fn columns(&self, row: usize) -> Range<usize> {
        self.layout.columns(row)
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> S {
        match self.layout.index(row, col) {
            Some(idx) => self.cells[idx],
            None => S::unreachable(),
        }
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        let idx = self.layout.index(row, col);
        debug_assert!(idx.is_some(), "cell ({row}, {col}) is outside of the matrix layout");
        if let Some(idx) = idx {
            self.cells[idx] = value;
        }
    }
}

impl<S: Score, L: Layout> Display for Matrix<S, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let value = self.get(row, col);
                if value == S::unreachable() {
                    write!(f, "{:>6}", "-inf")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
