//! Cancellable one-shot timers keyed by purpose.
//!
//! The queue never runs callbacks itself. The owner polls it with the current
//! time and reacts to each due key, which keeps every effect on the owner's
//! thread and lets it read fresh state at fire time.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

/// Handle returned when a timer is scheduled. Only the most recent schedule
/// of a key is live; older handles compare unequal to whatever fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Entry {
	deadline: Duration,
	handle: TimerHandle,
}

#[derive(Debug)]
pub struct TimerQueue<K> {
	entries: HashMap<K, Entry>,
	next_handle: u64,
}

impl<K> Default for TimerQueue<K> {
	fn default() -> Self {
		Self {
			entries: HashMap::new(),
			next_handle: 0,
		}
	}
}

impl<K: Eq + Hash + Clone> TimerQueue<K> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Schedule `key` to fire at `deadline`, replacing any pending timer for
	/// the same key.
	pub fn schedule(&mut self, key: K, deadline: Duration) -> TimerHandle {
		self.next_handle = self.next_handle.wrapping_add(1);
		let handle = TimerHandle(self.next_handle);
		self.entries.insert(key, Entry { deadline, handle });
		handle
	}

	/// Cancel the pending timer for `key`. Returns whether one was pending.
	pub fn cancel(&mut self, key: &K) -> bool {
		self.entries.remove(key).is_some()
	}

	pub fn cancel_all(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Earliest pending deadline, useful for sizing an event-loop poll.
	pub fn next_deadline(&self) -> Option<Duration> {
		self.entries.values().map(|entry| entry.deadline).min()
	}

	/// Remove and return the earliest timer whose deadline is at or before
	/// `now`. Ties resolve in scheduling order.
	pub fn pop_due(&mut self, now: Duration) -> Option<(K, TimerHandle)> {
		let key = self
			.entries
			.iter()
			.filter(|(_, entry)| entry.deadline <= now)
			.min_by_key(|(_, entry)| (entry.deadline, entry.handle.0))
			.map(|(key, _)| key.clone())?;
		let entry = self.entries.remove(&key)?;
		Some((key, entry.handle))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ms(value: u64) -> Duration {
		Duration::from_millis(value)
	}

	#[test]
	fn rescheduling_replaces_the_pending_timer() {
		let mut queue = TimerQueue::new();
		queue.schedule("debounce", ms(200));
		let latest = queue.schedule("debounce", ms(350));

		assert_eq!(queue.len(), 1);
		assert_eq!(queue.pop_due(ms(200)), None);
		assert_eq!(queue.pop_due(ms(350)), Some(("debounce", latest)));
		assert!(queue.is_empty());
	}

	#[test]
	fn due_timers_pop_in_deadline_order() {
		let mut queue = TimerQueue::new();
		queue.schedule("late", ms(30));
		queue.schedule("early", ms(10));
		queue.schedule("middle", ms(20));

		let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(100)))
			.map(|(key, _)| key)
			.collect();
		assert_eq!(order, vec!["early", "middle", "late"]);
	}

	#[test]
	fn cancel_all_empties_the_queue() {
		let mut queue = TimerQueue::new();
		queue.schedule(1, ms(5));
		queue.schedule(2, ms(5));
		queue.cancel_all();

		assert_eq!(queue.next_deadline(), None);
		assert_eq!(queue.pop_due(ms(1_000)), None);
	}

	#[test]
	fn cancel_reports_whether_a_timer_was_pending() {
		let mut queue = TimerQueue::new();
		queue.schedule('a', ms(5));
		assert!(queue.cancel(&'a'));
		assert!(!queue.cancel(&'a'));
	}
}
