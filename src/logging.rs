use tracing::{Dispatch, Level};
use tracing_subscriber::EnvFilter;

/// Diagnostic subscriber for this run, or `None` to discard all events.
///
/// When verbose, events at DEBUG and above go to stderr; `RUST_LOG`
/// directives are honoured on top of that.
pub fn dispatch(verbose: bool) -> Option<Dispatch> {
    if !verbose {
        return None;
    }

    let filter = EnvFilter::from_default_env().add_directive(Level::DEBUG.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    Some(Dispatch::new(subscriber))
}

/// Run `f` with the diagnostic subscriber for `verbose` installed.
pub fn with_logging<T>(verbose: bool, f: impl FnOnce() -> T) -> T {
    match dispatch(verbose) {
        Some(dispatch) => tracing::dispatcher::with_default(&dispatch, f),
        None => f(),
    }
}
