
use serde::Serialize;

/// Dense NxN matrix of mismatch distances between samples.
/// Stored row-major; the diagonal is always 0 because self-comparisons are never computed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MismatchMatrix {
    /// Number of samples, the matrix is `size` x `size`
    size: usize,
    /// Row-major cell values
    values: Vec<u64>
}

impl MismatchMatrix {
    /// Creates an all-zero matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0; size * size]
        }
    }

    /// Builds a matrix from row-major values.
    /// # Panics
    /// * if `values.len()` is not `size * size`
    pub fn from_row_major(size: usize, values: Vec<u64>) -> Self {
        assert_eq!(values.len(), size * size, "matrix values must be size * size");
        Self {
            size,
            values
        }
    }

    /// Builds a matrix from a list of rows.
    /// # Panics
    /// * if the rows do not form a square matrix
    #[cfg(test)]
    pub fn from_rows(rows: &[Vec<u64>]) -> Self {
        let size = rows.len();
        let values: Vec<u64> = rows.iter()
            .flat_map(|r| {
                assert_eq!(r.len(), size, "matrix rows must be square");
                r.iter().copied()
            })
            .collect();
        Self {
            size,
            values
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the distance from sample `i` to sample `j`.
    /// # Panics
    /// * if either index is out of bounds
    pub fn get(&self, i: usize, j: usize) -> u64 {
        assert!(i < self.size && j < self.size, "matrix index ({i}, {j}) out of bounds for size {}", self.size);
        self.values[i * self.size + j]
    }

    /// Returns the full row for sample `i`
    pub fn row(&self, i: usize) -> &[u64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Iterates over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        // chunks(0) panics, so an empty matrix needs a non-zero chunk size
        self.values.chunks(self.size.max(1))
    }

    /// Returns true if every cell (i, j) equals cell (j, i)
    #[cfg(test)]
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            (0..i).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}
