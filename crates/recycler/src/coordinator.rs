//! Event handling and the eviction loop.
//!
//! [`EvictionCoordinator`] consumes host lifecycle notifications, keeps the
//! [`RecencyRegistry`] current, and enforces the capacity bound after each
//! creation event by closing least-recently-used windows.
//!
//! # Reentrancy contract
//!
//! A host close tears the window down before returning, so the closing
//! notification for an evicted window arrives *inside* the eviction loop.
//! [`HostSession::close`] hands those synchronous notifications back as its
//! return value and the loop absorbs them before its progress check, which
//! is what lets "the registry did not shrink" mean "this victim cannot be
//! evicted right now".

use tabcycle_host::{EventSource, HostSession, SubscriptionId, WindowEvent, WindowId};

use crate::config::RecyclerConfig;
use crate::registry::RecencyRegistry;

/// Drives the recency registry from host events and evicts over-capacity
/// document windows.
///
/// All handlers run on the host's dispatch thread; the coordinator does no
/// locking of its own. Hosts with genuinely concurrent dispatch wrap it in
/// [`SharedCoordinator`](crate::SharedCoordinator) instead.
#[derive(Debug)]
pub struct EvictionCoordinator {
	registry: RecencyRegistry,
	capacity: usize,
	subscription: Option<SubscriptionId>,
}

impl EvictionCoordinator {
	/// Creates a coordinator with an empty registry. Call
	/// [`EvictionCoordinator::init`] to start receiving events.
	pub fn new(config: RecyclerConfig) -> Self {
		Self {
			registry: RecencyRegistry::new(),
			capacity: config.capacity,
			subscription: None,
		}
	}

	/// Subscribes to the host event source. Idempotent: a second `init`
	/// without an intervening teardown is a no-op.
	pub fn init<H: EventSource>(&mut self, host: &mut H) {
		if self.subscription.is_none() {
			self.subscription = Some(host.subscribe());
			tracing::debug!(capacity = self.capacity, "recycler attached");
		}
	}

	/// Unsubscribes from the host event source. Idempotent.
	pub fn teardown<H: EventSource>(&mut self, host: &mut H) {
		if let Some(sub) = self.subscription.take() {
			host.unsubscribe(sub);
			tracing::debug!("recycler detached");
		}
	}

	/// Dispatches one host notification to the matching handler.
	pub fn handle_event<H: HostSession>(&mut self, host: &mut H, event: WindowEvent) {
		match event {
			WindowEvent::Activated { gained, lost } => self.on_window_activated(host, gained, lost),
			WindowEvent::Created(id) => self.on_window_created(host, id),
			WindowEvent::Closing(id) => self.on_window_closing(id),
		}
	}

	/// Focus moved: mark the newly focused document window as
	/// most-recently-used. Non-document windows are ignored, as is `lost`.
	pub fn on_window_activated<H: HostSession>(
		&mut self,
		host: &H,
		gained: Option<WindowId>,
		_lost: Option<WindowId>,
	) {
		let Some(id) = gained else { return };
		if !host.window_kind(id).is_document() {
			return;
		}
		self.registry.touch(id);
		tracing::trace!(window = %id, tracked = self.registry.len(), "window activated");
	}

	/// A window was created: absorb any untracked document windows the
	/// host has open, then evict until the capacity bound holds or an
	/// eviction attempt makes no progress.
	pub fn on_window_created<H: HostSession>(&mut self, host: &mut H, id: WindowId) {
		if !host.window_kind(id).is_document() {
			return;
		}
		tracing::trace!(window = %id, "document window created");
		self.sync_registry(host);
		self.evict_over_capacity(host);
	}

	/// A window is going away: drop it from the registry.
	///
	/// The registry only ever holds document windows, so membership is the
	/// authoritative filter here. This also covers the eviction loop's own
	/// victim, whose kind the host may no longer report once the close is
	/// in flight.
	pub fn on_window_closing(&mut self, id: WindowId) {
		if !self.registry.contains(id) {
			return;
		}
		self.registry.remove(id);
		tracing::trace!(window = %id, tracked = self.registry.len(), "window closing");
	}

	/// Appends every open document window the registry does not know yet,
	/// in the host's reported order.
	///
	/// Creation notifications can be missed or arrive out of order around
	/// host startup; re-enumerating on every creation event heals that.
	/// Discovered windows land at the tail like any new entry, which is an
	/// accepted approximation of their true recency.
	fn sync_registry<H: HostSession>(&mut self, host: &H) {
		for id in host.open_windows() {
			if host.window_kind(id).is_document() && !self.registry.contains(id) {
				self.registry.touch(id);
				tracing::trace!(window = %id, "tracking pre-existing window");
			}
		}
	}

	/// Closes least-recently-used windows until the registry fits the
	/// capacity bound.
	///
	/// Close failures are suppressed; a refused close shows up as an
	/// attempt after which the registry did not shrink, which stops the
	/// loop for this round rather than hammering a stuck window. Capacity
	/// may remain exceeded until the next creation event.
	fn evict_over_capacity<H: HostSession>(&mut self, host: &mut H) {
		while self.registry.len() > self.capacity {
			let Some(victim) = self.registry.least_recently_used() else {
				break;
			};
			let before = self.registry.len();
			match host.close(victim) {
				Ok(notifications) => {
					for event in notifications {
						self.absorb_close_notification(host, event);
					}
				}
				Err(err) => {
					tracing::debug!(window = %victim, error = %err, "close refused");
				}
			}
			if self.registry.len() >= before {
				tracing::debug!(
					window = %victim,
					tracked = self.registry.len(),
					capacity = self.capacity,
					"eviction made no progress; leaving capacity exceeded"
				);
				break;
			}
			tracing::debug!(window = %victim, tracked = self.registry.len(), "evicted window");
		}
	}

	/// Applies one notification raised synchronously while a close was in
	/// flight.
	///
	/// Registry updates only — no nested eviction pass for a `Created`
	/// raised mid-close; the outer loop re-checks capacity on its next
	/// iteration anyway. Progress is measured by registry size, so a close
	/// that takes related windows down with it counts.
	fn absorb_close_notification<H: HostSession>(&mut self, host: &H, event: WindowEvent) {
		match event {
			WindowEvent::Activated { gained, lost } => self.on_window_activated(host, gained, lost),
			WindowEvent::Created(id) => {
				if host.window_kind(id).is_document() {
					self.registry.touch(id);
				}
			}
			WindowEvent::Closing(id) => self.on_window_closing(id),
		}
	}

	/// Read access to the recency registry, least-recently-used first.
	pub fn registry(&self) -> &RecencyRegistry {
		&self.registry
	}

	/// The configured capacity bound.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns true while subscribed to the host event source.
	pub fn is_attached(&self) -> bool {
		self.subscription.is_some()
	}
}
