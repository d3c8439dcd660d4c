//! Dense coverage grids.

use core::ops::{Index, IndexMut};

/// Row-major grid of coverage values indexed by `(row, col)`.
///
/// Dimensions are fixed at construction.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Mask {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Mask {
    /// Creates a zeroed mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Creates a mask from equally sized rows.
    ///
    /// Returns `None` if the rows differ in length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            data.extend_from_slice(row);
        }
        Some(Self {
            width,
            height: rows.len(),
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.width.max(1))
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

impl Index<(usize, usize)> for Mask {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(col < self.width, "column {col} out of bounds");
        &self.data[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Mask {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(col < self.width, "column {col} out of bounds");
        &mut self.data[row * self.width + col]
    }
}
