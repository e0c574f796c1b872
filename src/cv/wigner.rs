use log::trace;
use nalgebra::Matrix4;
use ndarray::Array2;

use qrs_core::ComplexScalar;
use qrs_core::quantum::QOp;

use crate::error::{CvError, Result};
use super::correlation::covariance_matrix;
use super::quadratures;

/// A precomputed quadrature correlation matrix R, as returned by
/// `correlation_matrix_quadrature` or `correlation_matrix_quadrature_ops`
#[derive(Debug)]
pub enum Correlations<'a, N, O>{
    Numeric(&'a Array2<N>),
    Operators(&'a Array2<O>),
}

// Manual impls: only references are held, so no bounds on N or O
impl<'a, N, O> Clone for Correlations<'a, N, O>{
    fn clone(&self) -> Self { *self }
}
impl<'a, N, O> Copy for Correlations<'a, N, O>{ }

/// The inputs from which a Wigner covariance matrix can be computed
#[derive(Debug)]
pub enum WignerInput<'a, N, O>{
    /// Numeric quadrature correlation matrix
    Correlation(&'a Array2<N>),
    /// Operator-valued quadrature correlation matrix, evaluated in `rho`
    CorrelationOps{ r: &'a Array2<O>, rho: &'a O },
    /// Field operators of the two modes and the state
    FieldOperators{ a1: &'a O, a2: &'a O, rho: &'a O },
}

impl<'a, N, O> WignerInput<'a, N, O>{
    /// Selects the input variant from whichever arguments are present.
    /// A correlation matrix takes precedence over field operators, and
    /// anything that needs an expectation value needs `rho`. A numeric
    /// correlation matrix is already evaluated, so passing `rho` with it is
    /// `CvError::UnusedDensityMatrix`.
    pub fn from_parts(
        a1: Option<&'a O>,
        a2: Option<&'a O>,
        r: Option<Correlations<'a, N, O>>,
        rho: Option<&'a O>
    ) -> Result<Self>{
        match (r, a1, a2, rho) {
            (Some(Correlations::Numeric(_)), _, _, Some(_)) =>
                Err(CvError::UnusedDensityMatrix),
            (Some(Correlations::Numeric(r)), _, _, None) => {
                check_correlation_shape(r.dim())?;
                Ok(WignerInput::Correlation(r))
            },
            (Some(Correlations::Operators(r)), _, _, Some(rho)) => {
                check_correlation_shape(r.dim())?;
                Ok(WignerInput::CorrelationOps{r, rho})
            },
            (Some(Correlations::Operators(_)), _, _, None) =>
                Err(CvError::MissingDensityMatrix("an operator-valued correlation matrix (R)")),
            (None, Some(a1), Some(a2), Some(rho)) =>
                Ok(WignerInput::FieldOperators{a1, a2, rho}),
            (None, Some(_), Some(_), None) =>
                Err(CvError::MissingDensityMatrix("field operators (a1 and a2)")),
            _ => Err(CvError::MissingOperands)
        }
    }
}

fn check_correlation_shape(dim: (usize, usize)) -> Result<()>{
    if dim != (4, 4) {
        return Err(CvError::Shape{expected: 4, found: dim});
    }
    Ok(())
}

/// The Wigner covariance matrix of two modes in the quadrature basis
/// `[x1, p1, x2, p2]`,
///   V[j, i] = Re (R[i, j] + R[j, i])
/// for a correlation matrix R, or the real part of `covariance_matrix`
/// when the field operators are given.
pub fn wigner_covariance_matrix<N, O>(input: WignerInput<N, O>) -> Result<Matrix4<N::R>>
where N: ComplexScalar,
      O: QOp<N>
{
    let v = match input {
        WignerInput::Correlation(r) => {
            check_correlation_shape(r.dim())?;
            Matrix4::from_fn(|j, i| (r[[i, j]] + r[[j, i]]).real())
        },
        WignerInput::CorrelationOps{r, rho} => {
            check_correlation_shape(r.dim())?;
            let mut v = Matrix4::zeros();
            for j in 0..4{
                for i in 0..4{
                    let mut sym = r[[i, j]].clone();
                    sym.qaxpy(N::one(), &r[[j, i]])?;
                    v[(j, i)] = sym.qexpect(rho)?.real();
                }
            }
            v
        },
        WignerInput::FieldOperators{a1, a2, rho} => {
            let c = covariance_matrix(&quadratures(a1, a2)?, rho)?;
            Matrix4::from_fn(|i, j| c[[i, j]].real())
        }
    };
    trace!("Wigner covariance matrix: {}", v);

    Ok(v)
}
