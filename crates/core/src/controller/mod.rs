//! Search, selection and copy-state controller behind the viewer.
//!
//! [`ViewerController`] owns the loaded items, the query, the active item and
//! the per-item "copied" flags. Front-ends feed it input events, read derived
//! state through getters, and drive its timers by calling
//! [`ViewerController::tick`] with a [`Clock`] that advances.
//!
//! Misuse policy: every mutating operation on a controller that has not been
//! initialized (or has been torn down) is a logged no-op, except
//! [`ViewerController::request_copy`], which reports [`CopyError::Inactive`].

mod config;
mod error;
mod events;
mod session;


use std::time::Duration;

pub use config::{DEFAULT_COPY_RESET, DEFAULT_DEBOUNCE, ViewerConfig};
pub use error::CopyError;
pub use events::ViewerEvent;
use events::Listener;
use session::Session;

use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::item::{Item, ItemId};
use crate::layout::LayoutState;
use crate::timers::{TimerHandle, TimerQueue};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TimerKey {
	Debounce,
	CopyReset(ItemId),
}

pub struct ViewerController {
	config: ViewerConfig,
	clock: Box<dyn Clock>,
	clipboard: Box<dyn Clipboard>,
	timers: TimerQueue<TimerKey>,
	session: Option<Session>,
	layout: LayoutState,
	listeners: Vec<Listener>,
}

impl ViewerController {
	pub fn new(
		config: ViewerConfig,
		clock: impl Clock + 'static,
		clipboard: impl Clipboard + 'static,
	) -> Self {
		Self {
			config,
			clock: Box::new(clock),
			clipboard: Box::new(clipboard),
			timers: TimerQueue::new(),
			session: None,
			layout: LayoutState::new(config.layout),
			listeners: Vec::new(),
		}
	}

	pub fn config(&self) -> &ViewerConfig {
		&self.config
	}

	/// Load `items` as the working set with every item visible.
	///
	/// Calling this again before [`teardown`](Self::teardown) is ignored and
	/// returns `false`; the first collection stays in place.
	pub fn initialize(&mut self, items: Vec<Item>) -> bool {
		if self.session.is_some() {
			log::warn!("viewer already initialized, ignoring {} items", items.len());
			return false;
		}
		log::info!("viewer initialized with {} items", items.len());
		self.session = Some(Session::new(items));
		true
	}

	pub fn is_initialized(&self) -> bool {
		self.session.is_some()
	}

	/// Register a listener for [`ViewerEvent`]s. Listeners are dropped by
	/// [`teardown`](Self::teardown).
	pub fn subscribe(&mut self, listener: impl FnMut(&ViewerEvent) + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Record `text` as the current query and restart the debounce window.
	/// The filter is recomputed once the window elapses without another edit.
	pub fn set_query(&mut self, text: impl Into<String>) {
		let deadline = self.clock.now() + self.config.debounce;
		let Some(session) = self.session.as_mut() else {
			log::debug!("set_query ignored: viewer not initialized");
			return;
		};
		session.query = text.into();
		session.pending_debounce = Some(self.timers.schedule(TimerKey::Debounce, deadline));
	}

	/// Empty the query and show every item immediately, skipping the debounce.
	pub fn clear_query(&mut self) {
		let Some(session) = self.session.as_mut() else {
			log::debug!("clear_query ignored: viewer not initialized");
			return;
		};
		session.query.clear();
		self.apply_query_now();
	}

	/// Apply a pending query edit right away. Returns `false` when nothing was
	/// waiting on the debounce timer.
	pub fn flush_query(&mut self) -> bool {
		let pending = self
			.session
			.as_ref()
			.is_some_and(|session| session.pending_debounce.is_some());
		if pending {
			self.apply_query_now();
		}
		pending
	}

	/// Make `id` the active item and ask the front-end to scroll to it.
	///
	/// Ids that are unknown or filtered out are ignored: the UI may act on a
	/// row before a pending filter settles, and that must not fail.
	pub fn select_item(&mut self, id: &str) -> bool {
		let Some(session) = self.session.as_mut() else {
			log::debug!("select_item ignored: viewer not initialized");
			return false;
		};
		let Some(position) = session.filtered_position(id) else {
			log::debug!("select_item ignored: '{id}' is not visible");
			return false;
		};
		let id = session.items[session.filtered[position]].id.clone();
		session.active = Some(id.clone());
		self.layout.item_selected();
		self.emit(ViewerEvent::ScrollTo { id });
		true
	}

	/// Copy the code of item `id` to the clipboard.
	pub fn copy_item(&mut self, id: &str) -> Result<(), CopyError> {
		let Some(session) = self.session.as_ref() else {
			return Err(CopyError::Inactive);
		};
		let Some(item) = session.item(id) else {
			return Err(CopyError::UnknownItem(ItemId::new(id)));
		};
		let code = item.code.clone();
		self.request_copy(id, &code)
	}

	/// Write `text` to the clipboard on behalf of item `id`.
	///
	/// On success the item is flagged as copied until the copy-reset window
	/// elapses; a repeated success restarts that window. Failures leave the
	/// flag untouched and are returned, never raised.
	pub fn request_copy(&mut self, id: &str, text: &str) -> Result<(), CopyError> {
		let deadline = self.clock.now() + self.config.copy_reset;
		let Some(session) = self.session.as_mut() else {
			return Err(CopyError::Inactive);
		};
		let Some(item) = session.item(id) else {
			return Err(CopyError::UnknownItem(ItemId::new(id)));
		};
		let id = item.id.clone();

		if let Err(err) = self.clipboard.copy(text) {
			log::warn!("copying '{id}' failed: {err}");
			self.emit(ViewerEvent::CopyResult { id, ok: false });
			return Err(err.into());
		}

		let handle = self
			.timers
			.schedule(TimerKey::CopyReset(id.clone()), deadline);
		session.copied.insert(id.clone());
		session.copy_timers.insert(id.clone(), handle);
		self.emit(ViewerEvent::CopyResult { id, ok: true });
		Ok(())
	}

	/// Fire every timer that is due. Returns how many fired.
	pub fn tick(&mut self) -> usize {
		let now = self.clock.now();
		let mut fired = 0;
		while let Some((key, handle)) = self.timers.pop_due(now) {
			fired += 1;
			match key {
				TimerKey::Debounce => self.debounce_elapsed(handle),
				TimerKey::CopyReset(id) => self.copy_reset_elapsed(id, handle),
			}
		}
		fired
	}

	/// Time until the next timer is due, if any is pending.
	pub fn time_until_next_timer(&self) -> Option<Duration> {
		let deadline = self.timers.next_deadline()?;
		Some(deadline.saturating_sub(self.clock.now()))
	}

	/// Cancel every timer, drop listeners and discard all state. The
	/// controller can be initialized again afterwards.
	pub fn teardown(&mut self) {
		let cancelled = self.timers.len();
		self.timers.cancel_all();
		self.listeners.clear();
		self.layout = LayoutState::new(self.config.layout);
		if self.session.take().is_some() {
			log::info!("viewer torn down, {cancelled} timers cancelled");
		}
	}

	pub fn items(&self) -> &[Item] {
		self.session
			.as_ref()
			.map(|session| session.items.as_slice())
			.unwrap_or_default()
	}

	pub fn item(&self, id: &str) -> Option<&Item> {
		self.session.as_ref()?.item(id)
	}

	/// Items matching the last applied query, in collection order.
	pub fn filtered_items(&self) -> Vec<&Item> {
		let Some(session) = self.session.as_ref() else {
			return Vec::new();
		};
		session
			.filtered
			.iter()
			.map(|&position| &session.items[position])
			.collect()
	}

	pub fn filtered_len(&self) -> usize {
		self.session
			.as_ref()
			.map_or(0, |session| session.filtered.len())
	}

	/// Position of `id` within [`filtered_items`](Self::filtered_items).
	pub fn filtered_position(&self, id: &str) -> Option<usize> {
		self.session.as_ref()?.filtered_position(id)
	}

	pub fn active_item_id(&self) -> Option<&ItemId> {
		self.session.as_ref()?.active.as_ref()
	}

	pub fn active_item(&self) -> Option<&Item> {
		let id = self.active_item_id()?;
		self.item(id.as_str())
	}

	pub fn copy_state(&self, id: &str) -> bool {
		self.session
			.as_ref()
			.is_some_and(|session| session.copied.contains(id))
	}

	pub fn current_query(&self) -> &str {
		self.session
			.as_ref()
			.map_or("", |session| session.query.as_str())
	}

	/// Query the filtered view currently reflects.
	pub fn applied_query(&self) -> &str {
		self.session
			.as_ref()
			.map_or("", |session| session.applied_query.as_str())
	}

	pub fn has_pending_query(&self) -> bool {
		self.session
			.as_ref()
			.is_some_and(|session| session.pending_debounce.is_some())
	}

	pub fn layout(&self) -> &LayoutState {
		&self.layout
	}

	pub fn layout_mut(&mut self) -> &mut LayoutState {
		&mut self.layout
	}

	fn debounce_elapsed(&mut self, handle: TimerHandle) {
		let current = self
			.session
			.as_ref()
			.is_some_and(|session| session.pending_debounce == Some(handle));
		if current {
			self.apply_query_now();
		}
	}

	fn copy_reset_elapsed(&mut self, id: ItemId, handle: TimerHandle) {
		let Some(session) = self.session.as_mut() else {
			return;
		};
		if session.copy_timers.get(&id) != Some(&handle) {
			return;
		}
		session.copy_timers.remove(&id);
		session.copied.remove(&id);
		self.emit(ViewerEvent::CopyStateReset { id });
	}

	/// Cancel any pending debounce and recompute the filtered view from the
	/// latest query.
	fn apply_query_now(&mut self) {
		self.timers.cancel(&TimerKey::Debounce);
		let Some(session) = self.session.as_mut() else {
			return;
		};
		session.pending_debounce = None;
		self.recompute_filtered();
	}

	fn recompute_filtered(&mut self) {
		let Some(session) = self.session.as_mut() else {
			return;
		};
		if let Some(dropped) = session.recompute() {
			log::debug!("active item '{dropped}' filtered out");
		}
		let visible = session.filtered.len();
		log::debug!("filter '{}' matched {visible} items", session.applied_query);
		self.emit(ViewerEvent::FilterApplied { visible });
	}

	fn emit(&mut self, event: ViewerEvent) {
		for listener in &mut self.listeners {
			listener(&event);
		}
	}
}
