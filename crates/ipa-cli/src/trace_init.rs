#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the tracing subscriber. JSON lines go to `log_dir` when given,
/// otherwise to stderr. Filter defaults to `ipa_core=debug`, overridable via
/// `RUST_LOG`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ipa_core=debug,ipa_cli=debug"));
        let builder = tracing_subscriber::fmt()
            .json()
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter);
        match log_dir {
            Some(dir) => builder
                .with_writer(tracing_appender::rolling::never(dir, "ipatool-trace.jsonl"))
                .init(),
            None => builder.with_writer(std::io::stderr).init(),
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
