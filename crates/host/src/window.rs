//! Window identity and classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for one open window, minted by the host.
///
/// Identity is the only thing the policy ever reads: two windows showing
/// the same file are distinct if the host created them as separate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "window-{}", self.0)
	}
}

/// Classification of a host window.
///
/// The recycling policy only ever tracks [`WindowKind::Document`]; tool
/// panes, pickers, terminals, and the like are invisible to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowKind {
	/// A document view (an editable buffer tab).
	Document,
	/// Any non-document window.
	Other,
}

impl WindowKind {
	/// Returns true for document views.
	pub fn is_document(self) -> bool {
		matches!(self, WindowKind::Document)
	}
}
