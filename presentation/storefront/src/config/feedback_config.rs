use std::time::Duration;

const DEFAULT_PULSE_MS: u64 = 300;
const DEFAULT_TOAST_CAPACITY: usize = 5;

/// Timing and capacity of the add-to-cart feedback
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackConfig {
    pub pulse_duration: Duration,
    pub toast_capacity: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            pulse_duration: Duration::from_millis(DEFAULT_PULSE_MS),
            toast_capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}

impl FeedbackConfig {
    /// Load feedback configuration from a variable lookup
    ///
    /// Variables:
    /// - STOREFRONT_PULSE_MS: cart indicator pulse length (default: 300)
    /// - STOREFRONT_TOAST_CAPACITY: toasts kept on screen (default: 5)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pulse_ms = lookup("STOREFRONT_PULSE_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PULSE_MS);
        let toast_capacity = lookup("STOREFRONT_TOAST_CAPACITY")
            .and_then(|v| v.parse().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_TOAST_CAPACITY);

        Self {
            pulse_duration: Duration::from_millis(pulse_ms),
            toast_capacity,
        }
    }
}
