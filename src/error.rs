use qrs_core::{QError, RealScalar, SupersetOf};
use thiserror::Error;

/// Errors of the continuous-variable routines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CvError{
    #[error("Must give either field operators (a1 and a2) or a precomputed correlation matrix (R)")]
    MissingOperands,

    #[error("Must give rho if using {0}")]
    MissingDensityMatrix(&'static str),

    #[error("rho has no use with a numeric correlation matrix (R)")]
    UnusedDensityMatrix,

    #[error("expected a {expected}x{expected} matrix, found {}x{}", .found.0, .found.1)]
    Shape{ expected: usize, found: (usize, usize) },

    #[error("{quantity} is outside the real domain (value {value})")]
    Domain{ quantity: &'static str, value: f64 },

    #[error(transparent)]
    Algebra(#[from] QError),
}

pub type Result<T> = std::result::Result<T, CvError>;

impl CvError{
    pub(crate) fn domain<R: RealScalar>(quantity: &'static str, value: R) -> Self{
        let value = SupersetOf::<f64>::to_subset(&value).unwrap_or(f64::NAN);
        CvError::Domain{quantity, value}
    }
}
