//! Recycler configuration.

use serde::{Deserialize, Serialize};

/// Default maximum number of open document windows.
pub const DEFAULT_CAPACITY: usize = 10;

/// Policy configuration, fixed at coordinator construction.
///
/// Hosts typically embed this in their own config file; missing fields fall
/// back to defaults. There is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecyclerConfig {
	/// Maximum number of document windows kept open before eviction
	/// pressure triggers. Zero is legal and means every creation event
	/// closes all closable document windows.
	pub capacity: usize,
}

impl Default for RecyclerConfig {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
		}
	}
}
