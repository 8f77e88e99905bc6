//! Mutual-exclusion wrapper for hosts with concurrent event dispatch.

use std::sync::Arc;

use parking_lot::Mutex;
use tabcycle_host::{EventSource, HostSession, WindowEvent};

use crate::config::RecyclerConfig;
use crate::coordinator::EvictionCoordinator;

/// An [`EvictionCoordinator`] behind a single lock spanning every handler
/// operation.
///
/// The bare coordinator assumes the host never runs two handlers at once.
/// Hosts that dispatch notifications from multiple threads route them
/// through this wrapper instead, which serializes handlers and the eviction
/// loop on one mutex.
///
/// Close acknowledgments are return values of [`HostSession::close`] and
/// are absorbed under the already-held lock, so a host must not call back
/// into these handlers from inside `close`; doing so would deadlock.
#[derive(Debug, Clone)]
pub struct SharedCoordinator {
	inner: Arc<Mutex<EvictionCoordinator>>,
}

impl SharedCoordinator {
	/// Creates a shared coordinator with an empty registry.
	pub fn new(config: RecyclerConfig) -> Self {
		Self {
			inner: Arc::new(Mutex::new(EvictionCoordinator::new(config))),
		}
	}

	/// Subscribes to the host event source. Idempotent.
	pub fn init<H: EventSource>(&self, host: &mut H) {
		self.inner.lock().init(host);
	}

	/// Unsubscribes from the host event source. Idempotent.
	pub fn teardown<H: EventSource>(&self, host: &mut H) {
		self.inner.lock().teardown(host);
	}

	/// Dispatches one host notification under the lock.
	pub fn handle_event<H: HostSession>(&self, host: &mut H, event: WindowEvent) {
		self.inner.lock().handle_event(host, event);
	}

	/// Runs `f` against a consistent snapshot of the coordinator.
	pub fn with<R>(&self, f: impl FnOnce(&EvictionCoordinator) -> R) -> R {
		f(&self.inner.lock())
	}
}
