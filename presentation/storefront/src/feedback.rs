use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use business::domain::notifier::Notifier;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::feedback_config::FeedbackConfig;

/// A transient message queued for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
}

/// Highlight state of the header cart badge.
///
/// Each pulse gets a generation number; a revert only clears the highlight
/// if no newer pulse started in the meantime.
#[derive(Debug, Default)]
pub struct CartIndicator {
    pulsing: AtomicBool,
    generation: AtomicU64,
}

impl CartIndicator {
    pub fn is_pulsing(&self) -> bool {
        self.pulsing.load(Ordering::Acquire)
    }

    fn start(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.pulsing.store(true, Ordering::Release);
        generation
    }

    fn revert(&self, generation: u64) {
        if self.generation.load(Ordering::Acquire) == generation {
            self.pulsing.store(false, Ordering::Release);
        }
    }
}

/// [`Notifier`] backing the storefront header: a bounded toast queue and the
/// cart indicator pulse.
pub struct FeedbackNotifier {
    toasts: Mutex<VecDeque<Toast>>,
    capacity: usize,
    indicator: Arc<CartIndicator>,
    pulse_duration: Duration,
}

impl FeedbackNotifier {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::with_capacity(config.toast_capacity)),
            capacity: config.toast_capacity.max(1),
            indicator: Arc::new(CartIndicator::default()),
            pulse_duration: config.pulse_duration,
        }
    }

    /// Toasts currently shown, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Removes a toast; returns false when it was already gone.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let Ok(mut toasts) = self.toasts.lock() else {
            return false;
        };
        let before = toasts.len();
        toasts.retain(|toast| toast.id != id);
        toasts.len() != before
    }

    pub fn indicator(&self) -> Arc<CartIndicator> {
        self.indicator.clone()
    }
}

impl Notifier for FeedbackNotifier {
    fn toast(&self, message: &str) {
        info!("Toast: {}", message);
        let Ok(mut toasts) = self.toasts.lock() else {
            return;
        };
        toasts.push_back(Toast {
            id: Uuid::new_v4(),
            message: message.to_string(),
        });
        while toasts.len() > self.capacity {
            toasts.pop_front();
        }
    }

    fn pulse_cart_indicator(&self) {
        let generation = self.indicator.start();

        // Headless callers have no runtime to time the revert; end the pulse now.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let indicator = self.indicator.clone();
                let delay = self.pulse_duration;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    indicator.revert(generation);
                });
            }
            Err(_) => {
                debug!("No runtime for cart indicator pulse, reverting immediately");
                self.indicator.revert(generation);
            }
        }
    }
}
