use std::io;
use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const STDOUT_FILTER: &str = "info,web_request=info,generation=info,tower_http=info";
const FILE_FILTER: &str = "info,web_request=debug,generation=debug,tower_http=debug";

pub fn configure_logging(log_dir: &Path) {
    // RUST_LOG overrides the stdout filter only; the file keeps full detail.
    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STDOUT_FILTER));

    // Stdout log configuration
    let stdout_log = fmt::layer()
        .with_writer(io::stdout)
        .with_filter(stdout_filter);

    // File log configuration
    let file_appender = rolling::daily(log_dir, "insurance-decoded.log");
    let file_log = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(EnvFilter::new(FILE_FILTER));

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .init();
}
