//! Dense square matrix used by every linear-system routine.
//!
//! [`Matrix`] stores `n × n` coefficients in row-major order. Shape is
//! validated once at construction so the solvers only need to check
//! right-hand-side and initial-guess lengths.
//!
//! Entries are not checked for finiteness. A NaN or inf coefficient flows
//! through the solvers the same way a degenerate pivot does.

use std::ops::{Index, IndexMut};
use super::errors::LinearSystemError;
use super::common::check_len;


#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n:    usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from a slice of rows.
    ///
    /// # Errors
    /// ├ [`LinearSystemError::EmptyMatrix`] - `rows` is empty.
    /// └ [`LinearSystemError::NotSquare`]   - a row length differs from the row count.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, LinearSystemError> {
        let n = rows.len();
        if n == 0 {
            return Err(LinearSystemError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(LinearSystemError::NotSquare { rows: n, cols: row.len() });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { n, data })
    }

    /// Builds an `n × n` matrix from row-major data.
    pub fn from_row_major(n: usize, data: Vec<f64>) -> Result<Self, LinearSystemError> {
        if n == 0 {
            return Err(LinearSystemError::EmptyMatrix);
        }
        check_len(n * n, data.len())?;
        Ok(Self { n, data })
    }

    /// `n × n` zero matrix.
    ///
    /// # Errors
    /// └ [`LinearSystemError::EmptyMatrix`] - `n == 0`.
    pub fn zeros(n: usize) -> Result<Self, LinearSystemError> {
        if n == 0 {
            return Err(LinearSystemError::EmptyMatrix);
        }
        Ok(Self { n, data: vec![0.0; n * n] })
    }

    /// `n × n` identity. Same errors as [`Matrix::zeros`].
    pub fn identity(n: usize) -> Result<Self, LinearSystemError> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    // getters
    #[inline] pub fn n(&self) -> usize { self.n }
    #[inline] pub fn get(&self, i: usize, j: usize) -> f64 { self[(i, j)] }
    #[inline] pub fn as_slice(&self) -> &[f64] { &self.data }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let n = self.n;
        &mut self.data[i * n..(i + 1) * n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let n = self.n;
        for c in 0..n {
            self.data.swap(i * n + c, j * n + c);
        }
    }

    /// Copy of `self` with column `j` replaced by `v`.
    pub fn with_column(&self, j: usize, v: &[f64]) -> Result<Self, LinearSystemError> {
        check_len(self.n, v.len())?;
        let mut m = self.clone();
        for (i, &vi) in v.iter().enumerate() {
            m[(i, j)] = vi;
        }
        Ok(m)
    }

    /// `A · x`
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>, LinearSystemError> {
        check_len(self.n, x.len())?;
        Ok(self.rows().map(|row| dot(row, x)).collect())
    }

    /// `A · B`
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, LinearSystemError> {
        check_len(self.n, other.n)?;
        let n = self.n;
        let mut out = Matrix::zeros(n)?;
        for i in 0..n {
            for k in 0..n {
                let aik = self[(i, k)];
                for j in 0..n {
                    out[(i, j)] += aik * other[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// `max_i |(A·x)_i − b_i|`, NaN if any residual is NaN.
    pub fn max_residual(&self, x: &[f64], b: &[f64]) -> Result<f64, LinearSystemError> {
        check_len(self.n, b.len())?;
        let ax = self.mul_vec(x)?;
        Ok(max_abs_diff(&ax, b))
    }

    /// Determinant via partial-pivot elimination on a working copy.
    ///
    /// `det(A) = sign(P) · Π pivots`. Returns exactly `0.0` as soon as a
    /// column has no nonzero candidate pivot.
    pub fn determinant(&self) -> f64 {
        let n = self.n;
        let mut m = self.clone();
        let mut det = 1.0;

        for k in 0..n {
            let mut p    = k;
            let mut best = m[(k, k)].abs();
            for r in k + 1..n {
                let v = m[(r, k)].abs();
                if v > best {
                    best = v;
                    p = r;
                }
            }

            if m[(p, k)] == 0.0 {
                return 0.0;
            }
            if p != k {
                m.swap_rows(p, k);
                det = -det;
            }

            let pivot = m[(k, k)];
            det *= pivot;

            for r in k + 1..n {
                let factor = m[(r, k)] / pivot;
                for c in k + 1..n {
                    let update = factor * m[(k, c)];
                    m[(r, c)] -= update;
                }
            }
        }

        det
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(j < self.n, "column {j} out of range for n={}", self.n);
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(j < self.n, "column {j} out of range for n={}", self.n);
        &mut self.data[i * self.n + j]
    }
}


#[inline]
pub(crate) fn dot(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v).map(|(a, b)| a * b).sum()
}

/// `max_i |u_i − v_i|`, propagating NaN.
pub(crate) fn max_abs_diff(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v).fold(0.0, |acc: f64, (a, b)| {
        let d = (a - b).abs();
        if d.is_nan() || d > acc { d } else { acc }
    })
}
