//! Recency-ordered registry of tracked document windows.

use tabcycle_host::WindowId;

/// Ordered set of live document windows, least-recently-used first.
///
/// Order is strictly insertion/re-insertion order: the most recent
/// [`RecencyRegistry::touch`] wins, which is the only tie-break the policy
/// needs since membership is by identity. Holds no duplicates.
#[derive(Debug, Default, Clone)]
pub struct RecencyRegistry {
	/// Tracked windows, index 0 = least recently used.
	windows: Vec<WindowId>,
}

impl RecencyRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks `id` as most-recently-used.
	///
	/// Absent windows are appended at the tail; present windows move to the
	/// tail. Touching the same window twice in a row is a no-op the second
	/// time.
	pub fn touch(&mut self, id: WindowId) {
		if let Some(pos) = self.windows.iter().position(|&w| w == id) {
			self.windows.remove(pos);
		}
		self.windows.push(id);
	}

	/// Removes `id` if tracked; absent windows are a no-op, not an error.
	pub fn remove(&mut self, id: WindowId) {
		self.windows.retain(|&w| w != id);
	}

	/// Returns true if `id` is tracked.
	pub fn contains(&self, id: WindowId) -> bool {
		self.windows.contains(&id)
	}

	/// Returns the least-recently-used window, if any. Does not mutate.
	pub fn least_recently_used(&self) -> Option<WindowId> {
		self.windows.first().copied()
	}

	/// Returns the number of tracked windows.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	/// Returns true if no windows are tracked.
	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Iterates tracked windows from least- to most-recently-used.
	pub fn iter(&self) -> impl Iterator<Item = WindowId> + '_ {
		self.windows.iter().copied()
	}
}
