//! Time sources used to schedule controller timers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Monotonic time source measured from an arbitrary, fixed origin.
pub trait Clock {
	fn now(&self) -> Duration;
}

/// Wall-clock backed [`Clock`] that starts counting when constructed.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
	origin: Instant,
}

impl SystemClock {
	pub fn new() -> Self {
		Self {
			origin: Instant::now(),
		}
	}
}

impl Default for SystemClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for SystemClock {
	fn now(&self) -> Duration {
		self.origin.elapsed()
	}
}

/// Clock that only moves when told to. Clones share the same time, so a test
/// can keep one handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
	nanos: Arc<AtomicU64>,
}

impl ManualClock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn advance(&self, by: Duration) {
		let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
		self.nanos.fetch_add(nanos, Ordering::SeqCst);
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Duration {
		Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn manual_clock_clones_share_time() {
		let clock = ManualClock::new();
		let handle = clock.clone();
		handle.advance(Duration::from_millis(150));
		assert_eq!(clock.now(), Duration::from_millis(150));
	}

	#[test]
	fn sub_millisecond_steps_accumulate() {
		let clock = ManualClock::new();
		clock.advance(Duration::from_micros(999));
		assert_eq!(clock.now(), Duration::from_micros(999));
		clock.advance(Duration::from_micros(1));
		assert_eq!(clock.now(), Duration::from_millis(1));
	}

	#[test]
	fn system_clock_is_monotonic() {
		let clock = SystemClock::new();
		let first = clock.now();
		assert!(clock.now() >= first);
	}
}
