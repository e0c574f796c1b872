//! Gaussian statistics of two-mode bosonic states: correlation matrices of
//! field and quadrature operators, the Wigner covariance matrix, and the
//! logarithmic negativity of a two-mode state.
//!
//! Operators and states can be of any representation implementing
//! `qrs_core::quantum::QOp`; `base::bosonic` provides the dense Fock-space
//! operators and states.
extern crate nalgebra;
extern crate log;

pub use qrs_core::{ComplexField, RealField};
pub use qrs_core::{ComplexScalar, RealScalar, QError};

pub mod base;
pub mod cv;
pub mod error;

pub use error::{CvError, Result};
