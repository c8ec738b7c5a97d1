//! Observational diagnostics emitted by schema operations.
//!
//! Schema customization never fails hard; degraded lookups surface through
//! these hooks instead. Implementations must not affect control flow or
//! return values.

/// Structured diagnostics sink with the four conventional levels.
pub trait Diagnostics {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Routes diagnostics through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn warn(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}
}
