/// Specific implementations of QRep
///
pub mod matrix;
