/// Installs a test logger showing this crate's load progress and skipped-file warnings.
#[allow(dead_code)]
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("wacom_hwdb=debug"),
    )
    .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
    .is_test(true)
    .try_init();
}
