use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logging to `tracing` under the `marketplace` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "marketplace", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "marketplace", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "marketplace", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "marketplace", "{}", message);
    }
}
