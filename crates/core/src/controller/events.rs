use crate::item::ItemId;

/// Side effects the controller announces to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
	/// A selection succeeded; the code pane should bring `id` into view.
	ScrollTo { id: ItemId },
	/// A clipboard write for `id` resolved.
	CopyResult { id: ItemId, ok: bool },
	/// The filtered view was recomputed and now holds `visible` items.
	FilterApplied { visible: usize },
	/// The copied flag of `id` expired.
	CopyStateReset { id: ItemId },
}

pub(crate) type Listener = Box<dyn FnMut(&ViewerEvent)>;
