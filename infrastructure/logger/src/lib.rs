use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target of every domain log line, e.g. `RUST_LOG=pricelist::domain=debug`.
pub const DOMAIN_TARGET: &str = "pricelist::domain";

/// Forwards the domain `Logger` port to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: DOMAIN_TARGET, "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: DOMAIN_TARGET, "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: DOMAIN_TARGET, "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: DOMAIN_TARGET, "{message}");
    }
}
