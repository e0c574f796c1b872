use log::{debug, trace};
use nalgebra::{Matrix4, convert};
use serde::{Deserialize, Serialize};

use qrs_core::RealScalar;

use crate::error::{CvError, Result};

/// Tolerances for the square roots in `wigner_logarithm_negativity`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NegativityConfig<R>{
    /// Negative radicands no larger than `rel_tol * max(1, scale)` in magnitude
    /// are treated as round-off and clamped to zero
    pub rel_tol: R
}

impl<R: RealScalar> Default for NegativityConfig<R>{
    fn default() -> Self {
        NegativityConfig{ rel_tol: convert::<f64, R>(f64::EPSILON).sqrt() }
    }
}

fn clamp_round_off<R: RealScalar>(quantity: &'static str, value: R, scale: R, rel_tol: R)
    -> Result<R>
{
    if value >= R::zero() {
        return Ok(value);
    }
    let one : R = convert(1.0);
    if -value <= rel_tol * scale.max(one) {
        debug!("{} = {} clamped to zero", quantity, value);
        return Ok(R::zero());
    }
    Err(CvError::domain(quantity, value))
}

/// The smaller symplectic eigenvalue of the partially transposed two-mode
/// state with Wigner covariance matrix `v`. With
///   sigma = det A + det B - 2 det C,   V = [ A  C ]
///                                          [ C' B ]
/// it is the smaller root of nu^4 - sigma nu^2 + det V = 0, evaluated as
///   nu^2 = 2 det V / (sigma + sqrt(sigma^2 - 4 det V))
/// which stays accurate when nu is small against the entries of V.
pub fn partial_transpose_symplectic_eigenvalue<R: RealScalar>(
    v: &Matrix4<R>,
    config: &NegativityConfig<R>
) -> Result<R>{
    if let Some(x) = v.iter().find(|x| !x.is_finite()) {
        return Err(CvError::domain("covariance matrix entry", *x));
    }
    let two : R = convert(2.0);
    let four : R = convert(4.0);

    let det_a = v.fixed_slice::<2, 2>(0, 0).clone_owned().determinant();
    let det_b = v.fixed_slice::<2, 2>(2, 2).clone_owned().determinant();
    let det_c = v.fixed_slice::<2, 2>(0, 2).clone_owned().determinant();
    let det_v = v.determinant();
    if !(det_v > R::zero()) {
        return Err(CvError::domain("covariance matrix determinant", det_v));
    }

    let sigma = det_a + det_b - two * det_c;
    let sigma_sq = sigma * sigma;
    let disc = clamp_round_off("symplectic discriminant",
                               sigma_sq - four * det_v, sigma_sq, config.rel_tol)?;
    let denom = sigma + disc.sqrt();
    if !(denom > R::zero()) {
        return Err(CvError::domain("symplectic invariant", sigma));
    }
    let nu = (two * det_v / denom).sqrt();
    trace!("sigma = {}, det V = {}, nu = {}", sigma, det_v, nu);
    if !(nu > R::zero()) {
        return Err(CvError::domain("symplectic eigenvalue", nu));
    }

    Ok(nu)
}

/// Logarithmic negativity of a two-mode state from its Wigner covariance matrix,
///   E = max(0, -ln(2 nu))
/// with nu from `partial_transpose_symplectic_eigenvalue`
pub fn wigner_logarithm_negativity<R: RealScalar>(v: &Matrix4<R>) -> Result<R>{
    wigner_logarithm_negativity_with(v, &NegativityConfig::default())
}

pub fn wigner_logarithm_negativity_with<R: RealScalar>(
    v: &Matrix4<R>,
    config: &NegativityConfig<R>
) -> Result<R>{
    let nu = partial_transpose_symplectic_eigenvalue(v, config)?;
    let two : R = convert(2.0);
    let lognu = -(two * nu).ln();

    Ok(lognu.max(R::zero()))
}
