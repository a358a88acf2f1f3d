use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::item::ItemId;

/// Reasons a copy request did not mark its item as copied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
	#[error("the viewer is not initialized")]
	Inactive,
	#[error("no snippet with id '{0}'")]
	UnknownItem(ItemId),
	#[error(transparent)]
	Clipboard(#[from] ClipboardError),
}
