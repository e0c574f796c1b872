use criterion::{BenchmarkId, Criterion, black_box};
use nalgebra::Matrix4;
use num_complex::Complex64 as c64;
use rand::prelude::*;
use rand_distr::Uniform;
use rand_xoshiro::Xoshiro256Plus;

use qrs_core::reps::matrix::*;
use qrs_cv::base::bosonic::{two_mode_destroy, two_mode_squeezed_vacuum};
use qrs_cv::cv::*;

pub fn bench_two_mode_squeezed_8(c: &mut Criterion){
    bench_two_mode_squeezed(c, 8);
}

pub fn bench_two_mode_squeezed_16(c: &mut Criterion){
    bench_two_mode_squeezed(c, 16);
}

fn bench_two_mode_squeezed(c: &mut Criterion, n: usize){
    let group_name = format!("Wigner covariance: two-mode squeezed vacuum {0}x{0}", n);
    let mut group = c.benchmark_group(group_name);

    let (a1, a2) = two_mode_destroy::<c64>(n).unwrap();
    let rho = ket2dm(&two_mode_squeezed_vacuum::<c64>(n, 0.5));
    let r = correlation_matrix_quadrature(&a1, &a2, &rho).unwrap();
    let r_ops = correlation_matrix_quadrature_ops(&a1, &a2).unwrap();

    group.bench_function(BenchmarkId::new("Field operators", n),
        |b| b.iter(|| wigner_covariance_matrix(
            WignerInput::FieldOperators{a1: &a1, a2: &a2, rho: &rho}).unwrap()));
    group.bench_function(BenchmarkId::new("Operator correlations", n),
        |b| b.iter(|| wigner_covariance_matrix(
            WignerInput::CorrelationOps{r: &r_ops, rho: &rho}).unwrap()));
    group.bench_function(BenchmarkId::new("Numeric correlations", n),
        |b| b.iter(|| wigner_covariance_matrix::<c64, Op<c64>>(
            WignerInput::Correlation(&r)).unwrap()));
    group.finish();
}

pub fn bench_log_negativity(c: &mut Criterion){
    let mut rng = Xoshiro256Plus::seed_from_u64(1234);
    let dist = Uniform::new(0.0, 2.0);
    let vs : Vec<Matrix4<f64>> = (0..100).map(|_| {
        let r : f64 = rng.sample(dist);
        let (ch, sh) = ((2.0 * r).cosh(), (2.0 * r).sinh());
        Matrix4::new(
            ch,  0.0, sh,  0.0,
            0.0, ch,  0.0, -sh,
            sh,  0.0, ch,  0.0,
            0.0, -sh, 0.0, ch)
    }).collect();

    c.bench_function("Logarithmic negativity x100", |b| b.iter(
        || for v in vs.iter(){
            black_box(wigner_logarithm_negativity(v).unwrap());
        }));
}
