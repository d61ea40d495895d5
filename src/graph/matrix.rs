//! Matrix views derived from the adjacency lists.

use super::WeightedGraph;

/// A dense row-major 0/1 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Matrix {
    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.cols + col] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Copy into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(<[u8]>::to_vec).collect()
    }

    /// Sum of one column.
    pub fn column_sum(&self, col: usize) -> usize {
        (0..self.rows).map(|r| self.cells[r * self.cols + col] as usize).sum()
    }

    /// True for square matrices equal to their transpose.
    pub fn is_symmetric(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        (0..self.rows).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

impl WeightedGraph {
    /// V×V matrix with a 1 at `(i, j)` iff some edge `i -> j` is stored.
    ///
    /// Weights and parallel edges are ignored.
    pub fn adjacency_matrix(&self) -> Matrix {
        let n = self.vertex_count();
        let mut matrix = Matrix::zeros(n, n);
        for (from, edges) in self.adjacency().iter().enumerate() {
            for edge in edges {
                matrix.set(from, edge.to, 1);
            }
        }
        matrix
    }

    /// V×E matrix with one column per stored adjacency entry.
    ///
    /// Columns follow adjacency-list order (vertex 0's entries first). An
    /// undirected edge is stored twice and therefore owns two columns. A
    /// self-loop column has a single 1.
    pub fn incidence_matrix(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.vertex_count(), self.edge_count());
        let mut column = 0;
        for (from, edges) in self.adjacency().iter().enumerate() {
            for edge in edges {
                matrix.set(from, column, 1);
                matrix.set(edge.to, column, 1);
                column += 1;
            }
        }
        log::debug!("Incidence matrix: {}x{}", matrix.rows(), matrix.cols());
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_access() {
        let mut m = Matrix::zeros(2, 3);
        m.set(1, 2, 1);
        assert_eq!(m.row(0), &[0, 0, 0]);
        assert_eq!(m.row(1), &[0, 0, 1]);
        assert_eq!(m.get(1, 2), Some(1));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.column_sum(2), 1);
    }

    #[test]
    fn test_symmetry_requires_square() {
        assert!(!Matrix::zeros(2, 3).is_symmetric());
        assert!(Matrix::zeros(0, 0).is_symmetric());
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, 1);
        assert!(!m.is_symmetric());
        m.set(1, 0, 1);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_rows_without_columns() {
        let m = Matrix::zeros(3, 0);
        assert!(m.is_empty());
        assert_eq!(m.to_rows(), vec![Vec::<u8>::new(); 3]);
    }
}
