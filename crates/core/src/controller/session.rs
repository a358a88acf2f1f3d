use std::collections::{HashMap, HashSet};

use crate::item::{Item, ItemId};
use crate::matcher::SearchIndex;
use crate::timers::TimerHandle;

/// Everything the controller owns between `initialize` and `teardown`.
pub(super) struct Session {
	pub(super) items: Vec<Item>,
	index: SearchIndex,
	positions: HashMap<ItemId, usize>,
	/// Latest query text, updated on every edit.
	pub(super) query: String,
	/// Query the current `filtered` list was computed from.
	pub(super) applied_query: String,
	/// Indices into `items`, ascending.
	pub(super) filtered: Vec<usize>,
	pub(super) active: Option<ItemId>,
	pub(super) copied: HashSet<ItemId>,
	pub(super) pending_debounce: Option<TimerHandle>,
	pub(super) copy_timers: HashMap<ItemId, TimerHandle>,
}

impl Session {
	pub(super) fn new(items: Vec<Item>) -> Self {
		let index = SearchIndex::build(&items);
		let positions = items
			.iter()
			.enumerate()
			.map(|(position, item)| (item.id.clone(), position))
			.collect();
		let filtered = (0..items.len()).collect();
		Self {
			items,
			index,
			positions,
			query: String::new(),
			applied_query: String::new(),
			filtered,
			active: None,
			copied: HashSet::new(),
			pending_debounce: None,
			copy_timers: HashMap::new(),
		}
	}

	pub(super) fn item(&self, id: &str) -> Option<&Item> {
		self.positions.get(id).map(|&position| &self.items[position])
	}

	/// Position of `id` within the filtered view.
	pub(super) fn filtered_position(&self, id: &str) -> Option<usize> {
		let position = *self.positions.get(id)?;
		self.filtered.binary_search(&position).ok()
	}

	pub(super) fn is_visible(&self, id: &str) -> bool {
		self.filtered_position(id).is_some()
	}

	/// Re-run the filter against the latest query. Returns the id that lost
	/// its active status, if any.
	pub(super) fn recompute(&mut self) -> Option<ItemId> {
		self.filtered = self.index.filter(&self.query);
		self.applied_query.clone_from(&self.query);
		let hidden = self
			.active
			.as_ref()
			.is_some_and(|active| !self.is_visible(active.as_str()));
		if hidden { self.active.take() } else { None }
	}
}
