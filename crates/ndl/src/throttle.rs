use std::{
    thread,
    time::{Duration, Instant},
};

use log::trace;

/// Minimum-interval gate in front of requests to the catalog.
///
/// The first [`Throttle::wait`] returns immediately. Each later call sleeps until at least
/// `interval` has passed since the previous call returned. A zero interval never sleeps.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Creates a gate allowing one request per `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// A gate that never waits.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The minimum interval between two requests.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the next request may be made.
    pub fn wait(&mut self) {
        if let Some(remaining) = self
            .last
            .map(|last| self.interval.saturating_sub(last.elapsed()))
            .filter(|remaining| !remaining.is_zero())
        {
            trace!("Waiting {}ms before the next request", remaining.as_millis());
            thread::sleep(remaining);
        }
        self.last = Some(Instant::now());
    }
}
