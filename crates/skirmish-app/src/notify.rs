//! Notification sinks: where step notifications go after the engine is
//! done with them.
//!
//! Sinks may fail (a playback device going away, say). The rate-limited
//! wrapper logs and swallows those failures so the battle never sees them.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use skirmish_core::events::Notification;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("playback device unavailable: {0}")]
    Device(String),
    #[error("sink closed")]
    Closed,
}

/// Consumer of discrete battle notifications.
pub trait NotificationSink {
    fn play(&mut self, notification: &Notification) -> Result<(), SinkError>;
}

/// Minimum spacing between two notifications of the same kind.
pub fn cooldown(notification: &Notification) -> Duration {
    let ms = match notification {
        Notification::Move { .. } => 50,
        Notification::Attack { .. } => 100,
        Notification::SniperShot { .. } => 100,
        Notification::Hit { .. } => 0,
        Notification::Trap { .. } => 150,
        Notification::Damage { .. } => 80,
        Notification::Win | Notification::Lose => 0,
    };
    Duration::from_millis(ms)
}

/// Writes every notification to the log at `debug` level.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn play(&mut self, notification: &Notification) -> Result<(), SinkError> {
        debug!(tag = notification.tag(), ?notification, "notification");
        Ok(())
    }
}

/// Drops notifications that arrive inside their kind's cooldown window and
/// swallows errors from the wrapped sink.
#[derive(Debug)]
pub struct RateLimitedSink<S> {
    inner: S,
    last_played: HashMap<&'static str, Instant>,
}

impl<S: NotificationSink> RateLimitedSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last_played: HashMap::new(),
        }
    }

    /// Forward `notification` if its cooldown has elapsed at `now`.
    /// Returns whether the inner sink played it.
    pub fn notify_at(&mut self, notification: &Notification, now: Instant) -> bool {
        let tag = notification.tag();
        if let Some(&last) = self.last_played.get(tag) {
            if now.saturating_duration_since(last) < cooldown(notification) {
                return false;
            }
        }

        match self.inner.play(notification) {
            Ok(()) => {
                self.last_played.insert(tag, now);
                true
            }
            Err(err) => {
                warn!(tag, %err, "notification dropped");
                false
            }
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}
