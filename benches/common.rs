use criterion::Criterion;
use std::time::Duration;

/// Quick profile by default; set `ORDKEY_BENCH_FULL` for criterion's defaults.
pub fn bench_config() -> Criterion {
    if std::env::var_os("ORDKEY_BENCH_FULL").is_some() {
        return Criterion::default();
    }
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_millis(1500))
        .warm_up_time(Duration::from_millis(300))
}
