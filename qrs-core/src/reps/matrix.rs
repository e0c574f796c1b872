use std::marker::PhantomData;

use itertools::Itertools;
use nalgebra::{DMatrix, DVector};

use crate::ComplexScalar;
use crate::error::{QError, QResult};
use crate::quantum::*;

pub type Ket<N> = DVector<N>;
pub type Op<N> =  DMatrix<N>;

#[derive(Clone)]
pub struct DenseQRep<N: ComplexScalar>
{ _phantom: PhantomData<N> }

fn check_shape(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> QResult<()>{
    if lhs != rhs {
        return Err(QError::DimensionMismatch{op, lhs, rhs});
    }
    Ok(())
}

fn check_square<N: ComplexScalar>(op: &Op<N>) -> QResult<usize>{
    let (nrows, ncols) = op.shape();
    if nrows != ncols {
        return Err(QError::NotSquare(nrows, ncols));
    }
    Ok(nrows)
}

impl<N: ComplexScalar > QRep<N> for DenseQRep<N>
{
    type KetRep = Ket<N>;
    type OpRep = Op<N>;

    fn khemv(op: &Self::OpRep, alpha: N,
             x: & Self::KetRep, y: &mut Self::KetRep, beta: N) -> QResult<()>{
        check_shape("khemv", (op.ncols(), 1), (x.len(), 1))?;
        check_shape("khemv", (op.nrows(), 1), (y.len(), 1))?;
        y.gemv(alpha, op, x, beta);
        Ok(())
    }

    fn ket2dm(ket: &Self::KetRep) -> Self::OpRep {
        ket2dm(ket)
    }
}

pub fn ket2dm<N: ComplexScalar>(ket: &Ket<N>) -> Op<N>{
    ket * ket.adjoint()
}

impl<N: ComplexScalar> QObj<N> for Op<N>
{
    type Rep = DenseQRep<N>;
    type Dims = (usize, usize);

    fn qdim(&self) -> Self::Dims {
        self.shape()
    }

    fn qaxpy(&mut self, a: N, x: &Self) -> QResult<()> {
        check_shape("qaxpy", self.shape(), x.shape())?;
        *self += x * a;
        Ok(())
    }

    fn qscal(&mut self, a: N) {
        *self *= a;
    }

    fn qaxby(&mut self, a: N, x: &Self, b: N) -> QResult<()> {
        check_shape("qaxby", self.shape(), x.shape())?;
        if b.is_zero(){
            self.copy_from(x);
            *self *= a;
        } else {
            *self *= b;
            *self += x * a;
        }
        Ok(())
    }
}

impl<N: ComplexScalar> QObj<N> for Ket<N>
{
    type Rep = DenseQRep<N>;
    type Dims = usize;

    fn qdim(&self) -> Self::Dims {
        self.len()
    }

    fn qaxpy(&mut self, a: N, x: &Self) -> QResult<()> {
        check_shape("qaxpy", (self.len(), 1), (x.len(), 1))?;
        self.axpy(a, x, N::one());
        Ok(())
    }

    fn qscal(&mut self, a: N) {
        *self *= a;
    }

    fn qaxby(&mut self, a: N, x: &Self, b: N) -> QResult<()> {
        check_shape("qaxby", (self.len(), 1), (x.len(), 1))?;
        self.axpy(a, x, b);
        Ok(())
    }
}

impl<N: ComplexScalar> QKet<N> for Ket<N>
{
    fn qdot(&self, other: &Self) -> QResult<N> {
        check_shape("qdot", (self.len(), 1), (other.len(), 1))?;
        Ok(self.dotc(other))
    }
}

impl<N: ComplexScalar> QOp<N> for Op<N>
{
    fn dag(&self) -> Self {
        self.adjoint()
    }

    fn qmul(&self, rhs: &Self) -> QResult<Self> {
        if self.ncols() != rhs.nrows() {
            return Err(QError::DimensionMismatch{op: "qmul", lhs: self.shape(), rhs: rhs.shape()});
        }
        Ok(self * rhs)
    }

    fn qtrace(&self) -> QResult<N> {
        check_square(self)?;
        Ok(self.trace())
    }

    fn qexpect(&self, rho: &Self) -> QResult<N> {
        check_square(self)?;
        check_shape("qexpect", self.shape(), rho.shape())?;
        // Tr(A rho) = sum_ij A_ij rho_ji
        let rho_t = rho.transpose();
        Ok(self.iter().zip_eq(rho_t.iter())
            .fold(N::zero(), |acc, (&a, &r)| acc + a * r))
    }

    fn ket_expect(&self, psi: &Ket<N>) -> QResult<N> {
        let mut a_psi = Ket::zeros(self.nrows());
        DenseQRep::khemv(self, N::one(), psi, &mut a_psi, N::zero())?;
        psi.qdot(&a_psi)
    }
}

impl<N: ComplexScalar>
TensorProd<N, Op<N>>
for Op<N>
{
    type Result = Op<N>;

    fn tensor(a: Self, b:  Op<N>) -> Self::Result{
        a.kronecker(&b)
    }

    fn tensor_ref(a: &Self, b: & Op<N>)-> Self::Result{
        a.kronecker(b)
    }
}

impl<N: ComplexScalar>
TensorProd<N, Ket<N>>
for Ket<N>{
    type Result = Ket<N>;

    fn tensor(a: Self, b:  Ket<N>) -> Self::Result{
        a.kronecker(&b)
    }

    fn tensor_ref(a: &Self, b: & Ket<N>)-> Self::Result{
        a.kronecker(b)
    }
}

/// Evaluate the tensor product of the slice of operators
/// where the first operator is the *most significant* factor. That is, if the
/// argument is `[s0, s1, ..., sn]` then the tensor operator is
/// ```math
///     S = s_0 \otimes s_1 \otimes \ldots \otimes s_n
/// ```
pub fn tensor_list<N: ComplexScalar>(ops: &[ Op<N>]) -> QResult<Op<N>>{
    let (first, rest) = match ops.split_first(){
        Some(split) => split,
        None => return Err(QError::EmptyTensor)
    };
    let mut v = first.clone();
    for u in rest.iter(){
        v = TensorProd::tensor_ref(&v, u)
    }

    Ok(v)
}
