use thiserror::Error;

/// Failures of the operator algebra
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QError{
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch{
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize)
    },

    #[error("operator is not square: {0}x{1}")]
    NotSquare(usize, usize),

    #[error("basis index {index} is out of range for dimension {dim}")]
    BasisIndex{ index: usize, dim: usize },

    #[error("tensor product of an empty list")]
    EmptyTensor,
}

pub type QResult<T> = Result<T, QError>;
