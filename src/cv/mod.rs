//! Continuous-variable statistics of two bosonic modes: correlation and
//! covariance matrices of field and quadrature operators, the Wigner
//! covariance matrix and the logarithmic negativity derived from it.
//!
//! The quadratures of a mode with annihilation operator `a` are
//! ```math
//!     x = (a + a^\dagger)/\sqrt{2}, \qquad p = i (a - a^\dagger)/\sqrt{2}
//! ```
//! so that the vacuum has `<x^2> = <p^2> = 1/2` and Wigner covariance matrix
//! equal to the identity.

use nalgebra::{convert, ComplexField};

use qrs_core::{ComplexScalar, QResult};
use qrs_core::quantum::QOp;

pub mod correlation;
pub mod negativity;
pub mod wigner;

pub use correlation::*;
pub use negativity::*;
pub use wigner::*;

/// The field basis `[a1, a1^dag, a2, a2^dag]`
pub fn field_basis<N, O>(a1: &O, a2: &O) -> [O; 4]
where N: ComplexScalar,
      O: QOp<N>
{
    [a1.clone(), a1.dag(), a2.clone(), a2.dag()]
}

/// The quadrature pair (x, p) of a single mode
pub fn quadrature_pair<N, O>(a: &O) -> QResult<(O, O)>
where N: ComplexScalar,
      O: QOp<N>
{
    let s = N::from_real(convert::<f64, N::R>(0.5).sqrt());
    let is = N::i() * s;
    let ad = a.dag();

    let mut x = ad.clone();
    x.qaxby(s, a, s)?;
    let mut p = ad;
    p.qaxby(is, a, -is)?;

    Ok((x, p))
}

/// The quadrature basis `[x1, p1, x2, p2]` of two modes
pub fn quadratures<N, O>(a1: &O, a2: &O) -> QResult<[O; 4]>
where N: ComplexScalar,
      O: QOp<N>
{
    let (x1, p1) = quadrature_pair(a1)?;
    let (x2, p2) = quadrature_pair(a2)?;
    Ok([x1, p1, x2, p2])
}

#[cfg(test)]
mod tests{
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use qrs_core::reps::matrix::Op;

    use crate::base::bosonic::destroy;
    use super::*;

    #[test]
    fn test_quadratures_are_canonical(){
        let n = 8;
        let a = destroy::<Complex64>(n);
        let (x, p) = quadrature_pair(&a).unwrap();
        assert_relative_eq!(x.dag(), x, epsilon=1e-14);
        assert_relative_eq!(p.dag(), p, epsilon=1e-14);
        // [x, p] = -i with this sign of p, away from the truncation edge
        let comm : Op<Complex64> = &x * &p - &p * &x;
        for k in 0..n-1{
            assert_relative_eq!(comm[(k, k)], -Complex64::i(), epsilon=1e-12);
        }
    }

    #[test]
    fn test_field_basis_order(){
        let a = destroy::<Complex64>(3);
        let b = &a * Complex64::new(2.0, 0.0);
        let basis = field_basis(&a, &b);
        assert_relative_eq!(basis[1], a.adjoint());
        assert_relative_eq!(basis[2], b);
        assert_relative_eq!(basis[3], b.adjoint());
    }
}
