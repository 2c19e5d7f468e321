//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g.
/// `RUST_LOG=bosphorus::generation=debug`.
///
/// # Example
/// ```
/// bosphorus::core::logging::init();
/// log::info!("Scene build started");
/// ```
pub fn init() {
    // try_init so repeated calls from tests and binaries don't panic
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
