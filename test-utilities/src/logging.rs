// Installs the logger before any test in a binary linking this crate runs,
// so clock reads that get renormalized show up in test output.
#[ctor::ctor(anonymous)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .parse_env(env_logger::Env::default().default_filter_or("info,timing=trace"))
        .format_level(true)
        .format_source_path(true)
        .format_module_path(false)
        .format_timestamp_micros()
        // Keep stdout for log lines, panics go to stderr
        .target(env_logger::Target::Stdout)
        .is_test(true)
        .try_init();
}
