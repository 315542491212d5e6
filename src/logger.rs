use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Output goes to stderr so it never mixes
/// with the menu dialogue on stdout. `RUST_LOG` wins over `verbose`.
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose { "angka_cli=debug" } else { "angka_cli=error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
