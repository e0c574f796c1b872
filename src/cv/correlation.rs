use itertools::Itertools;
use ndarray::Array2;

use qrs_core::{ComplexScalar, QResult};
use qrs_core::quantum::QOp;

use crate::error::{CvError, Result};
use super::{field_basis, quadratures};

/// Computes
/// out[row, col] = f(row, col)
/// over an n x n grid in row major order
fn outer_indexed<T, F>(n: usize, mut f: F) -> Result<Array2<T>>
where F: FnMut(usize, usize) -> Result<T>
{
    let entries = (0..n).cartesian_product(0..n)
        .map(|(row, col)| f(row, col))
        .collect::<Result<Vec<T>>>()?;
    let len = entries.len();
    Array2::from_shape_vec((n, n), entries)
        .map_err(|_| CvError::Shape{expected: n, found: (len, 1)})
}

/// The covariance matrix of the operators in `basis` in the state `rho`,
///   C[row, col] = < {b_col, b_row} > - <b_col><b_row>
/// where {,} is the anticommutator.
///
/// For a Hermitian basis the entries are real up to round-off and the matrix is
/// symmetric.
pub fn covariance_matrix<N, O>(basis: &[O], rho: &O) -> Result<Array2<N>>
where N: ComplexScalar,
      O: QOp<N>
{
    let means = basis.iter()
        .map(|op| op.qexpect(rho))
        .collect::<QResult<Vec<N>>>()?;

    outer_indexed(basis.len(), |row, col| {
        let (op1, op2) = (&basis[col], &basis[row]);
        let mut anti = op1.qmul(op2)?;
        anti.qaxpy(N::one(), &op2.qmul(op1)?)?;
        Ok(anti.qexpect(rho)? - means[col] * means[row])
    })
}

/// The matrix of operator products
///   M[row, col] = b_col * b_row
pub fn symbolic_correlation_matrix<N, O>(basis: &[O]) -> Result<Array2<O>>
where N: ComplexScalar,
      O: QOp<N>
{
    outer_indexed(basis.len(),
                  |row, col| Ok(basis[col].qmul(&basis[row])?))
}

/// The expectation values of `symbolic_correlation_matrix` in the state `rho`
///   M[row, col] = < b_col * b_row >
pub fn numeric_correlation_matrix<N, O>(basis: &[O], rho: &O) -> Result<Array2<N>>
where N: ComplexScalar,
      O: QOp<N>
{
    outer_indexed(basis.len(),
                  |row, col| Ok(basis[col].qmul(&basis[row])?.qexpect(rho)?))
}

/// Correlation matrix of the field operators `[a1, a1^dag, a2, a2^dag]` in `rho`
pub fn correlation_matrix_field<N, O>(a1: &O, a2: &O, rho: &O) -> Result<Array2<N>>
where N: ComplexScalar,
      O: QOp<N>
{
    numeric_correlation_matrix(&field_basis(a1, a2), rho)
}

/// Operator products of the field operators `[a1, a1^dag, a2, a2^dag]`
pub fn correlation_matrix_field_ops<N, O>(a1: &O, a2: &O) -> Result<Array2<O>>
where N: ComplexScalar,
      O: QOp<N>
{
    symbolic_correlation_matrix(&field_basis(a1, a2))
}

/// Correlation matrix of the quadratures `[x1, p1, x2, p2]` in `rho`
pub fn correlation_matrix_quadrature<N, O>(a1: &O, a2: &O, rho: &O) -> Result<Array2<N>>
where N: ComplexScalar,
      O: QOp<N>
{
    numeric_correlation_matrix(&quadratures(a1, a2)?, rho)
}

/// Operator products of the quadratures `[x1, p1, x2, p2]`
pub fn correlation_matrix_quadrature_ops<N, O>(a1: &O, a2: &O) -> Result<Array2<O>>
where N: ComplexScalar,
      O: QOp<N>
{
    symbolic_correlation_matrix(&quadratures(a1, a2)?)
}
