use num_complex::Complex;

/// RealScalar and ComplexScalar are the base traits that must be
/// implemented by the scalars of all QReps
pub trait RealScalar :
 nalgebra::RealField + Copy
{ }
impl<R> RealScalar for R where R:
  nalgebra::RealField + Copy
{ }

/// Only complex fields are quantum scalars: quadratures and
/// conjugation need an imaginary unit.
pub trait ComplexScalar :
nalgebra::ComplexField<RealField=<Self as ComplexScalar>::R> + Copy
{
    type R : RealScalar + Into<Self>;

    fn i() -> Self;
}

impl ComplexScalar for Complex<f32>{
    type R = f32;
    fn i() -> Complex<f32>{
        return Complex::i();
    }
}
impl ComplexScalar for Complex<f64>{
    type R = f64;
    fn i() -> Complex<f64>{
        return Complex::i();
    }
}
