pub mod error;
pub mod quantum;
pub mod reps;
pub mod util;

pub use simba::scalar::{RealField, ComplexField, SubsetOf, SupersetOf, ClosedAdd, ClosedMul};

pub use error::{QError, QResult};
pub use util::scalar::{RealScalar, ComplexScalar};
