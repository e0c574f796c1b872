#[macro_use]
extern crate criterion;
extern crate qrs_cv;

mod util;
use util::gaussian::{bench_two_mode_squeezed_8, bench_two_mode_squeezed_16,
                     bench_log_negativity};
use criterion::Criterion;
use std::time::Duration;

criterion_group!{   name=benches;
                    config=Criterion::default().sample_size(24)
                        .measurement_time(Duration::new(10, 0));
                    targets=bench_two_mode_squeezed_8, bench_two_mode_squeezed_16,
                    bench_log_negativity
}

criterion_main!(benches);
