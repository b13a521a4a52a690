#![allow(clippy::needless_range_loop)]
//! Dense matrix operations backed by faer.
//!
//! Wraps faer's `Mat<f64>` with bounds-checked element access and the
//! arithmetic PageRank needs: elementwise sums and differences, matrix
//! products, scalar scaling and tolerant equality. Every fallible
//! operation reports a [`LinalgError`] instead of panicking.

use faer::Mat;

use crate::error::LinalgError;

/// Per-element tolerance used by [`DenseMatrix::approx_eq`] and `==`.
pub const EQUALITY_TOLERANCE: f64 = 1e-9;

/// A dense `f64` matrix with at least one row and one column.
#[derive(Debug, Clone)]
pub struct DenseMatrix {
    inner: Mat<f64>,
}

impl DenseMatrix {
    /// Create a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        check_dims(rows, cols)?;
        Ok(Self {
            inner: Mat::zeros(rows, cols),
        })
    }

    /// Create an `n x n` matrix filled with zeros.
    pub fn square(n: usize) -> Result<Self, LinalgError> {
        Self::zeros(n, n)
    }

    /// Create a `rows x cols` matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: f64) -> Result<Self, LinalgError> {
        check_dims(rows, cols)?;
        Ok(Self {
            inner: Mat::from_fn(rows, cols, |_, _| value),
        })
    }

    /// Create a square matrix from a flat row-major slice.
    ///
    /// The slice length must be a non-zero perfect square `n * n`; value
    /// `i * n + j` lands at `(i, j)`.
    pub fn from_flat(values: &[f64]) -> Result<Self, LinalgError> {
        let n = integer_sqrt(values.len()).ok_or(LinalgError::NotPerfectSquare {
            len: values.len(),
        })?;
        Self::from_row_major(n, n, values)
    }

    /// Create a `rows x cols` matrix from a row-major slice.
    pub fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self, LinalgError> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(LinalgError::LengthMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self {
            inner: Mat::from_fn(rows, cols, |i, j| data[i * cols + j]),
        })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Get element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        self.check_index(row, col)?;
        Ok(self.inner.read(row, col))
    }

    /// Set element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), LinalgError> {
        self.check_index(row, col)?;
        self.inner.write(row, col, value);
        Ok(())
    }

    /// Overwrite every element with zero.
    pub fn clear(&mut self) {
        self.fill(0.0);
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: f64) {
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                self.inner.write(i, j, value);
            }
        }
    }

    /// Element-wise addition: self + other.
    pub fn add(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
        self.check_same_shape(other, "addition")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise subtraction: self - other.
    pub fn sub(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
        self.check_same_shape(other, "subtraction")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Matrix-matrix product: self * other.
    ///
    /// Each cell is a plain running sum over the shared dimension.
    pub fn mat_mul(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
        if self.ncols() != other.nrows() {
            return Err(self.mismatch(other, "multiplication"));
        }
        let inner = Mat::from_fn(self.nrows(), other.ncols(), |i, j| {
            let mut s = 0.0;
            for k in 0..self.ncols() {
                s += self.inner.read(i, k) * other.inner.read(k, j);
            }
            s
        });
        Ok(DenseMatrix { inner })
    }

    /// Matrix-vector product: self * v -> result vector.
    pub fn mat_vec(&self, v: &[f64]) -> Result<Vec<f64>, LinalgError> {
        if self.ncols() != v.len() {
            return Err(LinalgError::DimensionMismatch {
                op: "matrix-vector product",
                left_rows: self.nrows(),
                left_cols: self.ncols(),
                right_rows: v.len(),
                right_cols: 1,
            });
        }
        let n = self.nrows();
        let mut result = vec![0.0; n];
        for j in 0..self.ncols() {
            let vj = v[j];
            for i in 0..n {
                result[i] += self.inner.read(i, j) * vj;
            }
        }
        Ok(result)
    }

    /// Scalar multiplication.
    pub fn scale(&self, s: f64) -> DenseMatrix {
        self.map(|v| v * s)
    }

    /// In-place addition; `self` is left untouched on error.
    pub fn add_assign(&mut self, other: &DenseMatrix) -> Result<(), LinalgError> {
        *self = self.add(other)?;
        Ok(())
    }

    /// In-place subtraction; `self` is left untouched on error.
    pub fn sub_assign(&mut self, other: &DenseMatrix) -> Result<(), LinalgError> {
        *self = self.sub(other)?;
        Ok(())
    }

    /// In-place product `self = self * other`; the shape may change.
    pub fn mul_assign(&mut self, other: &DenseMatrix) -> Result<(), LinalgError> {
        *self = self.mat_mul(other)?;
        Ok(())
    }

    /// Sum of each column.
    pub fn col_sums(&self) -> Vec<f64> {
        (0..self.ncols())
            .map(|j| (0..self.nrows()).map(|i| self.inner.read(i, j)).sum())
            .collect()
    }

    /// Extract column as a Vec<f64>.
    pub fn col(&self, j: usize) -> Result<Vec<f64>, LinalgError> {
        self.check_index(0, j)?;
        Ok((0..self.nrows()).map(|i| self.inner.read(i, j)).collect())
    }

    /// Extract row as a Vec<f64>.
    pub fn row(&self, i: usize) -> Result<Vec<f64>, LinalgError> {
        self.check_index(i, 0)?;
        Ok((0..self.ncols()).map(|j| self.inner.read(i, j)).collect())
    }

    /// Tolerant equality: same shape and every element pair within
    /// [`EQUALITY_TOLERANCE`].
    pub fn approx_eq(&self, other: &DenseMatrix) -> bool {
        if self.nrows() != other.nrows() || self.ncols() != other.ncols() {
            return false;
        }
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                let diff = (self.inner.read(i, j) - other.inner.read(i, j)).abs();
                if diff.is_nan() || diff > EQUALITY_TOLERANCE {
                    return false;
                }
            }
        }
        true
    }

    /// Add 1.0 to every element and return the updated matrix.
    pub fn increment_all(&mut self) -> &mut Self {
        self.shift_all(1.0);
        self
    }

    /// Subtract 1.0 from every element and return the updated matrix.
    pub fn decrement_all(&mut self) -> &mut Self {
        self.shift_all(-1.0);
        self
    }

    /// Add 1.0 to every element, returning the matrix as it was before.
    pub fn post_increment_all(&mut self) -> DenseMatrix {
        let previous = self.clone();
        self.shift_all(1.0);
        previous
    }

    /// Subtract 1.0 from every element, returning the matrix as it was before.
    pub fn post_decrement_all(&mut self) -> DenseMatrix {
        let previous = self.clone();
        self.shift_all(-1.0);
        previous
    }

    /// A copy with 1.0 added to every element.
    pub fn incremented(&self) -> DenseMatrix {
        self.map(|v| v + 1.0)
    }

    /// A copy with 1.0 subtracted from every element.
    pub fn decremented(&self) -> DenseMatrix {
        self.map(|v| v - 1.0)
    }

    /// Copy of the elements in row-major order.
    pub fn to_row_major(&self) -> Vec<f64> {
        let mut data = Vec::with_capacity(self.nrows() * self.ncols());
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                data.push(self.inner.read(i, j));
            }
        }
        data
    }

    fn shift_all(&mut self, delta: f64) {
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                let v = self.inner.read(i, j);
                self.inner.write(i, j, v + delta);
            }
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> DenseMatrix {
        let inner = Mat::from_fn(self.nrows(), self.ncols(), |i, j| f(self.inner.read(i, j)));
        DenseMatrix { inner }
    }

    fn zip_with(&self, other: &DenseMatrix, f: impl Fn(f64, f64) -> f64) -> DenseMatrix {
        let inner = Mat::from_fn(self.nrows(), self.ncols(), |i, j| {
            f(self.inner.read(i, j), other.inner.read(i, j))
        });
        DenseMatrix { inner }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), LinalgError> {
        if row >= self.nrows() || col >= self.ncols() {
            return Err(LinalgError::IndexOutOfBounds {
                row,
                col,
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &DenseMatrix, op: &'static str) -> Result<(), LinalgError> {
        if self.nrows() != other.nrows() || self.ncols() != other.ncols() {
            return Err(self.mismatch(other, op));
        }
        Ok(())
    }

    fn mismatch(&self, other: &DenseMatrix, op: &'static str) -> LinalgError {
        LinalgError::DimensionMismatch {
            op,
            left_rows: self.nrows(),
            left_cols: self.ncols(),
            right_rows: other.nrows(),
            right_cols: other.ncols(),
        }
    }
}

impl PartialEq for DenseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl std::fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                write!(f, "{:.2} ", self.inner.read(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(), LinalgError> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Exact integer square root of `len`, if one exists.
fn integer_sqrt(len: usize) -> Option<usize> {
    let approx = (len as f64).sqrt().round() as usize;
    // Rounding in the float sqrt can be off by one for large inputs.
    [approx.saturating_sub(1), approx, approx + 1]
        .into_iter()
        .find(|&n| n.checked_mul(n) == Some(len))
}
