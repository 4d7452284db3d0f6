use std::fmt;
use std::ops::Index;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult};

/// Dense row-major `m x n` matrix of `f64`.
///
/// Every operation returns a new matrix; the receiver is never modified. A matrix without
/// rows has zero columns.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build a matrix from its rows. Every row must have the same length.
    pub fn new(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected,
                found,
            });
        }
        Ok(Matrix { data: rows })
    }

    /// An `m x n` matrix of zeros.
    pub fn zeros(m: usize, n: usize) -> Self {
        Matrix {
            data: vec![vec![0.0; n]; m],
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut result = Matrix::zeros(n, n);
        for i in 0..n {
            result.data[i][i] = 1.0;
        }
        result
    }

    /// Number of rows.
    #[inline]
    pub fn m(&self) -> usize {
        self.data.len()
    }

    /// Number of columns.
    #[inline]
    pub fn n(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.m() == self.n()
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Entry at row `i`, column `j`, if in bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Copy of this matrix without row `row`.
    pub fn remove_row(&self, row: usize) -> Matrix {
        Matrix {
            data: self
                .data
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != row)
                .map(|(_, r)| r.clone())
                .collect(),
        }
    }

    /// Copy of this matrix without column `column`.
    pub fn remove_column(&self, column: usize) -> Matrix {
        Matrix {
            data: self
                .data
                .iter()
                .map(|r| {
                    r.iter()
                        .enumerate()
                        .filter(|(j, _)| *j != column)
                        .map(|(_, v)| *v)
                        .collect()
                })
                .collect(),
        }
    }

    fn leading_zeros(row: &[f64]) -> usize {
        row.iter().take_while(|v| **v == 0.0).count()
    }

    /// Reorder rows so that rows with fewer leading zeros come first.
    ///
    /// Row `i` is swapped with every later row `k` that has strictly fewer leading zeros.
    pub fn order_rows(&self) -> Matrix {
        let mut result = self.clone();
        for i in 0..result.m() {
            for k in (i + 1)..result.m() {
                if Self::leading_zeros(&result.data[i]) > Self::leading_zeros(&result.data[k]) {
                    debug!("swapping rows {i} and {k}");
                    result.data.swap(i, k);
                }
            }
        }
        result
    }

    /// Reduce this matrix with Gauss-Jordan elimination.
    ///
    /// Rows are first reordered with [`Matrix::order_rows`]. Row `i` then pivots on column
    /// `i`: it is divided by its pivot, and the pivot column is cleared from every other row.
    /// A zero pivot is skipped without searching for another pivot row.
    pub fn gauss_jordan_reduction(&self) -> Matrix {
        let mut result = self.order_rows();
        let (m, n) = (result.m(), result.n());
        for i in 0..m {
            let j = i;
            if j >= n {
                break;
            }
            let pivot = result.data[i][j];
            if pivot == 0.0 {
                debug!("zero pivot at ({i}, {j}), skipping");
                continue;
            }
            if pivot != 1.0 {
                for value in &mut result.data[i][j..] {
                    *value /= pivot;
                }
            }
            let pivot_row = result.data[i].clone();
            for (k, row) in result.data.iter_mut().enumerate() {
                if k == i || row[j] == 0.0 {
                    continue;
                }
                let factor = row[j] / pivot_row[j];
                for (value, p) in row[j..].iter_mut().zip(&pivot_row[j..]) {
                    *value -= factor * p;
                }
            }
        }
        result
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// The empty matrix has determinant `1`.
    pub fn det(&self) -> MatrixResult<f64> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                operation: "determinant",
                m: self.m(),
                n: self.n(),
            });
        }
        Ok(self.cofactor_det())
    }

    fn cofactor_det(&self) -> f64 {
        let d = &self.data;
        match self.m() {
            0 => 1.0,
            1 => d[0][0],
            2 => d[0][0] * d[1][1] - d[1][0] * d[0][1],
            n => {
                let minor_rows = self.remove_row(0);
                (0..n)
                    .map(|j| {
                        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                        d[0][j] * minor_rows.remove_column(j).cofactor_det() * sign
                    })
                    .sum()
            }
        }
    }

    /// Inverse through Gauss-Jordan elimination of `[self | I]` with partial pivoting.
    pub fn inverse(&self) -> MatrixResult<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                operation: "inverse",
                m: self.m(),
                n: self.n(),
            });
        }
        let n = self.n();
        let mut augmented: Vec<Vec<f64>> = self
            .data
            .iter()
            .zip(&Matrix::identity(n).data)
            .map(|(row, id)| row.iter().chain(id).copied().collect())
            .collect();

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&a, &b| augmented[a][col].abs().total_cmp(&augmented[b][col].abs()))
                .unwrap_or(col);
            let pivot = augmented[pivot_row][col];
            if pivot == 0.0 {
                return Err(MatrixError::Singular);
            }
            augmented.swap(col, pivot_row);
            for value in &mut augmented[col] {
                *value /= pivot;
            }
            let current = augmented[col].clone();
            for (k, row) in augmented.iter_mut().enumerate() {
                if k == col || row[col] == 0.0 {
                    continue;
                }
                let factor = row[col];
                for (value, p) in row.iter_mut().zip(&current) {
                    *value -= factor * p;
                }
            }
        }

        for row in &mut augmented {
            row.drain(..n);
        }
        Ok(Matrix { data: augmented })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
