/// Diagnostic sink for the store.
///
/// Recoverable failures (unreadable side-store, dropped writes) are reported
/// here at `warn` and never surface to the caller.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
