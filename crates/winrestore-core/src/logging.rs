use tracing_subscriber::EnvFilter;

/// Install the JSON log subscriber on stderr.
///
/// `RUST_LOG` takes precedence. Without it, quiet mode only shows warnings
/// and errors; otherwise info-level events from both crates are shown.
pub fn init_logging(quiet: bool) {
    let default_directives = if quiet {
        "winrestore=warn,winrestore_core=warn"
    } else {
        "winrestore=info,winrestore_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    // A second initialization (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
