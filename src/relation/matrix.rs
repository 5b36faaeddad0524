//! Dense square boolean matrix shared by the dominance and fused relations.

use serde::ser::{Serialize, Serializer};

/// Row-major `size × size` boolean matrix, indexed from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolMatrix {
    cells: Vec<bool>,
    size: usize,
}

impl BoolMatrix {
    pub fn filled(size: usize, value: bool) -> Self {
        Self {
            cells: vec![value; size * size],
            size,
        }
    }

    /// Build a matrix whose cells are `f(row, col)`.
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let cells = (0..size * size).map(|k| f(k / size, k % size)).collect();
        Self { cells, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    pub fn row_sum(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&cell| cell).count()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn all(&self) -> bool {
        self.cells.iter().all(|&cell| cell)
    }

    /// Rows as `0`/`1` integers, the standalone output convention
    pub fn to_binary_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }
}

impl Serialize for BoolMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_binary_rows())
    }
}
