//! Dense frame-major 2D storage.

/// A `rows × cols` array stored as one flat `Vec<T>`.
///
/// Rows are frames and columns are agent slots.  New cells are
/// `T::default()`, which for every element type used here is the zero
/// value, so padding never needs a separate fill pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocate a zero-filled grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Grow the column count to `cols`, keeping existing cells and padding
    /// the new trailing columns with zero.  Shrinking is a no-op.
    pub fn widen(&mut self, cols: usize) {
        if cols <= self.cols {
            return;
        }
        let mut data = vec![T::default(); self.rows * cols];
        for r in 0..self.rows {
            data[r * cols..r * cols + self.cols].copy_from_slice(self.row(r));
        }
        self.cols = cols;
        self.data = data;
    }

    /// Build a grid from ragged rows, padding each to the longest.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, values) in rows.iter().enumerate() {
            grid.row_mut(r)[..values.len()].copy_from_slice(values);
        }
        grid
    }
}
