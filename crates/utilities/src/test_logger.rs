/// Constructs a logger for tests. Initialisation is allowed to fail since
/// tests run in parallel and another test may already have installed it.
pub fn test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
