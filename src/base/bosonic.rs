//! Bosonic modes in a Fock space truncated to `n` levels

use nalgebra::{convert, ComplexField};
use num_traits::{One, Zero};

use qrs_core::{ComplexScalar, QError, QResult};
use qrs_core::quantum::TensorProd;
use qrs_core::reps::matrix::{Ket, Op, ket2dm, tensor_list};

use crate::error::{CvError, Result};

fn real<N: ComplexScalar>(x: f64) -> N::R{
    convert::<f64, N::R>(x)
}

/// Annihilation operator, a|k> = sqrt(k)|k-1>
pub fn destroy<N: ComplexScalar>(n: usize) -> Op<N>{
    Op::from_fn(n, n,
        |i, j| if j == i + 1 { N::from_real(real::<N>(j as f64).sqrt()) } else { N::zero() })
}

/// Creation operator, the adjoint of `destroy`
pub fn create<N: ComplexScalar>(n: usize) -> Op<N>{
    destroy::<N>(n).adjoint()
}

/// Number operator
pub fn num<N: ComplexScalar>(n: usize) -> Op<N>{
    Op::from_diagonal(&Ket::from_fn(n, |k, _| N::from_real(real::<N>(k as f64))))
}

pub fn qeye<N: ComplexScalar>(n: usize) -> Op<N>{
    Op::identity(n, n)
}

/// Fock state |k>
pub fn fock<N: ComplexScalar>(n: usize, k: usize) -> QResult<Ket<N>>{
    if k >= n {
        return Err(QError::BasisIndex{index: k, dim: n});
    }
    let mut ket = Ket::zeros(n);
    ket[k] = N::one();
    Ok(ket)
}

pub fn fock_dm<N: ComplexScalar>(n: usize, k: usize) -> QResult<Op<N>>{
    Ok(ket2dm(&fock::<N>(n, k)?))
}

/// Coherent state |alpha>, built from its Fock amplitudes
///   c_k = alpha^k / sqrt(k!)
/// and normalized within the truncated space.
pub fn coherent<N: ComplexScalar>(n: usize, alpha: N) -> Ket<N>{
    let mut ket : Ket<N> = Ket::zeros(n);
    let mut ck = N::one();
    for k in 0..n{
        if k > 0 {
            ck = ck * alpha / N::from_real(real::<N>(k as f64).sqrt());
        }
        ket[k] = ck;
    }
    ket.normalize_mut();
    ket
}

pub fn coherent_dm<N: ComplexScalar>(n: usize, alpha: N) -> Op<N>{
    ket2dm(&coherent(n, alpha))
}

/// Thermal state with mean occupation `nbar`, with Boltzmann weights
///   p_k = nbar^k / (1 + nbar)^(k+1)
/// renormalized within the truncated space.
pub fn thermal_dm<N: ComplexScalar>(n: usize, nbar: N::R) -> Result<Op<N>>{
    if !(nbar >= N::R::zero()) {
        return Err(CvError::domain("mean thermal occupation", nbar));
    }
    let one = N::R::one();
    let mut weights = Ket::from_fn(n,
        |k, _| nbar.powi(k as i32) / (one + nbar).powi(k as i32 + 1));
    let z = weights.iter().fold(N::R::zero(), |acc, &w| acc + w);
    weights /= z;

    Ok(Op::from_diagonal(&weights.map(N::from_real)))
}

/// The pair (a1, a2) of annihilation operators of two modes on the
/// space mode1 (x) mode2, each truncated to `n` levels
pub fn two_mode_destroy<N: ComplexScalar>(n: usize) -> QResult<(Op<N>, Op<N>)>{
    let a = destroy::<N>(n);
    let id = qeye::<N>(n);
    let a1 = tensor_list(&[a.clone(), id.clone()])?;
    let a2 = tensor_list(&[id, a])?;
    Ok((a1, a2))
}

/// Product state |psi1> (x) |psi2>
pub fn product_ket<N: ComplexScalar>(psi1: &Ket<N>, psi2: &Ket<N>) -> Ket<N>{
    TensorProd::tensor_ref(psi1, psi2)
}

/// Two-mode squeezed vacuum with squeezing parameter r
///   |psi> = sqrt(1 - l^2) sum_k l^k |k, k>,   l = tanh r
/// normalized within the truncated space.
pub fn two_mode_squeezed_vacuum<N: ComplexScalar>(n: usize, r: N::R) -> Ket<N>{
    let lambda = N::from_real(r.tanh());
    let mut ket : Ket<N> = Ket::zeros(n * n);
    let mut lk = N::one();
    for k in 0..n{
        ket[k * n + k] = lk;
        lk = lk * lambda;
    }
    ket.normalize_mut();
    ket
}

#[cfg(test)]
mod tests{
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use qrs_core::quantum::{QKet, QOp};

    use super::*;

    #[test]
    fn test_ladder_commutator(){
        let n = 6;
        let a = destroy::<Complex64>(n);
        let ad = create::<Complex64>(n);
        let comm = &a * &ad - &ad * &a;
        // [a, a^dag] = 1 everywhere except the truncation edge
        for k in 0..n-1{
            assert_relative_eq!(comm[(k, k)], Complex64::new(1.0, 0.0), epsilon=1e-12);
        }
        assert_relative_eq!(&ad * &a, num::<Complex64>(n), epsilon=1e-12);
    }

    #[test]
    fn test_fock_states(){
        let f2 = fock::<Complex64>(4, 2).unwrap();
        let f3 = fock::<Complex64>(4, 3).unwrap();
        assert_relative_eq!(f2.qdot(&f3).unwrap(), Complex64::new(0.0, 0.0));
        assert_relative_eq!(num::<Complex64>(4).ket_expect(&f3).unwrap(),
                            Complex64::new(3.0, 0.0), epsilon=1e-12);
        assert_eq!(fock::<Complex64>(4, 4), Err(QError::BasisIndex{index: 4, dim: 4}));
    }

    #[test]
    fn test_coherent_mean_field(){
        let alpha = Complex64::new(0.3, -0.4);
        let rho = coherent_dm(20, alpha);
        let a = destroy::<Complex64>(20);
        assert_relative_eq!(a.qexpect(&rho).unwrap(), alpha, epsilon=1e-10);
        assert_relative_eq!(rho.qtrace().unwrap().re, 1.0, epsilon=1e-12);
    }

    #[test]
    fn test_thermal_occupation(){
        let rho = thermal_dm::<Complex64>(40, 0.5).unwrap();
        let nbar = num::<Complex64>(40).qexpect(&rho).unwrap();
        assert_relative_eq!(nbar.re, 0.5, epsilon=1e-8);
        assert!(thermal_dm::<Complex64>(4, -0.1).is_err());
    }

    #[test]
    fn test_two_mode_operators_commute(){
        let (a1, a2) = two_mode_destroy::<Complex64>(3).unwrap();
        assert_eq!(a1.shape(), (9, 9));
        assert_relative_eq!(&a1 * &a2, &a2 * &a1, epsilon=1e-12);
        let psi = product_ket(&fock(3, 1).unwrap(), &fock(3, 0).unwrap());
        let n1 = a1.dag().qmul(&a1).unwrap();
        assert_relative_eq!(n1.ket_expect(&psi).unwrap().re, 1.0, epsilon=1e-12);
    }

    #[test]
    fn test_two_mode_squeezed_pair_correlation(){
        let r = 0.3;
        let n = 14;
        let psi = two_mode_squeezed_vacuum::<Complex64>(n, r);
        let (a1, a2) = two_mode_destroy::<Complex64>(n).unwrap();
        let pair = a1.qmul(&a2).unwrap().ket_expect(&psi).unwrap();
        // <a1 a2> = sinh(r) cosh(r)
        assert_relative_eq!(pair.re, r.sinh() * r.cosh(), epsilon=1e-8);
    }
}
