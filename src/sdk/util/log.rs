use env_logger::{Builder, Env};
use std::env;

const DEFAULT_LEVEL: &str = "info";

pub fn init_logging() {
    let level = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
