//! Logarithmic negativity of a truncated two-mode squeezed vacuum against
//! the squeezing parameter, compared with the untruncated value 2r - ln 2.
use log::info;
use num_complex::Complex64 as c64;

use qrs_core::reps::matrix::ket2dm;
use qrs_cv::base::bosonic::{two_mode_destroy, two_mode_squeezed_vacuum};
use qrs_cv::cv::{wigner_covariance_matrix, wigner_logarithm_negativity, WignerInput};

fn main() -> Result<(), Box<dyn std::error::Error>>{
    simple_logger::SimpleLogger::new().init()?;
    let n = 16;
    let (a1, a2) = two_mode_destroy::<c64>(n)?;
    info!("Fock cutoff {} per mode", n);

    println!("{:>6}  {:>12}  {:>12}", "r", "E_N", "2r - ln 2");
    for k in 0..=10{
        let r = 0.1 * k as f64;
        let rho = ket2dm(&two_mode_squeezed_vacuum::<c64>(n, r));
        let v = wigner_covariance_matrix(WignerInput::FieldOperators{a1: &a1, a2: &a2, rho: &rho})?;
        let e = wigner_logarithm_negativity(&v)?;
        let exact = (2.0 * r - std::f64::consts::LN_2).max(0.0);
        println!("{:>6.2}  {:>12.8}  {:>12.8}", r, e, exact);
    }
    Ok(())
}
