use crate::ComplexScalar;
use crate::error::QResult;

/// Trait implementing all common operations of a quantum object
/// In general, this includes any linear operations
pub trait QObj<N: ComplexScalar> :
Sized + Clone
{
    type Rep: QRep<N>;
    type Dims: Sized + Copy + PartialEq + std::fmt::Debug;

    /// The dimensions of the quantum object
    fn qdim(&self) -> Self::Dims;

    /// y <- ax + y
    fn qaxpy(&mut self, a: N, x: &Self) -> QResult<()>;

    /// x <- a x
    fn qscal(&mut self, a: N);

    /// y <- ax + by
    fn qaxby(&mut self, a: N, x: &Self, b: N) -> QResult<()>;
}

/// Quantum Representation Trait
/// Implemented for zero-size/small structures to define how kets and
/// operators of the same representation act on each other.
pub trait QRep <N: ComplexScalar>: Clone{
    type KetRep:    QKet<N, Rep=Self>;
    type OpRep:     QOp<N, Rep=Self>;

    /// Takes the dot product of the conjugate of u with v
    fn qdot(u: &Self::KetRep, v: &Self::KetRep) -> QResult<N>{
        u.qdot(v)
    }

    /// y <- alpha * op * x + beta * y
    fn khemv(op: &Self::OpRep, alpha: N, x: &Self::KetRep, y: &mut Self::KetRep, beta: N)
        -> QResult<()>;

    /// The pure state projector |ket><ket|
    fn ket2dm(ket: &Self::KetRep) -> Self::OpRep;
}

pub trait TensorProd<N: ComplexScalar, RHS=Self> : QObj<N>{
    type Result: QObj<N>;

    fn tensor(a: Self, b: RHS) -> Self::Result;
    fn tensor_ref(a: &Self, b: &RHS) -> Self::Result;
}

pub trait QKet<N: ComplexScalar>: QObj<N>
{
    /// <self|other>
    fn qdot(&self, other: &Self) -> QResult<N>;
}

/// Operators: the algebra (composition and adjoint) on top of the
/// linear operations of QObj, and expectation values in a state.
pub trait QOp<N: ComplexScalar> : QObj<N>
{
    /// Hermitian conjugate
    fn dag(&self) -> Self;

    /// The composition self * rhs
    fn qmul(&self, rhs: &Self) -> QResult<Self>;

    fn qtrace(&self) -> QResult<N>;

    /// Tr(self * rho)
    fn qexpect(&self, rho: &Self) -> QResult<N>;

    /// <psi| self |psi>
    fn ket_expect(&self, psi: &<Self::Rep as QRep<N>>::KetRep) -> QResult<N>;
}

/// Expectation value of op in the density matrix rho
pub fn expect<N, Q>(op: &Q, rho: &Q) -> QResult<N>
    where N: ComplexScalar,
          Q: QOp<N>
{
    op.qexpect(rho)
}

pub fn qdot<N, QK>(bra: &QK, ket: &QK) -> QResult<N>
    where N: ComplexScalar,
          QK: QKet<N>
{
    bra.qdot(ket)
}
