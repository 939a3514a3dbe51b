/// User-facing feedback triggered by store mutations.
///
/// Calls are fire-and-forget: implementations must never fail the mutation
/// that triggered them, and may do nothing when no UI is attached.
pub trait Notifier: Send + Sync {
    /// Shows a transient message to the user.
    fn toast(&self, message: &str);
    /// Briefly highlights the cart indicator. The highlight reverts on its own.
    fn pulse_cart_indicator(&self);
}

/// Notifier for headless sessions.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn toast(&self, _message: &str) {}
    fn pulse_cart_indicator(&self) {}
}
