//! End-to-end recycling scenarios against a scripted host.
//!
//! These drive the coordinator through the same event sequences a live
//! editor session would produce: windows created and focused over time,
//! closes that succeed, refuse, or take companion windows down with them.

use pretty_assertions::assert_eq;
use tabcycle_host::{
	CloseError, EventSource, HostSession, SubscriptionId, WindowEvent, WindowId, WindowKind,
};
use tabcycle_recycler::{EvictionCoordinator, RecyclerConfig};

/// In-memory host session. A close removes the window and raises its
/// `Closing` notification synchronously, mirroring how editors tear the
/// view down before the close call returns. Windows listed in `refuse`
/// fail to close instead; `companions` maps a window to others the host
/// tears down along with it (a tab group, a linked preview).
#[derive(Default)]
struct ScriptedHost {
	windows: Vec<(WindowId, WindowKind)>,
	refuse: Vec<WindowId>,
	companions: Vec<(WindowId, WindowId)>,
	close_attempts: Vec<WindowId>,
	next_subscription: u64,
}

impl ScriptedHost {
	fn open_document(&mut self, id: WindowId) {
		self.windows.push((id, WindowKind::Document));
	}

	fn remove(&mut self, id: WindowId) {
		self.windows.retain(|&(w, _)| w != id);
	}
}

impl HostSession for ScriptedHost {
	fn open_windows(&self) -> Vec<WindowId> {
		self.windows.iter().map(|&(id, _)| id).collect()
	}

	fn window_kind(&self, id: WindowId) -> WindowKind {
		self.windows
			.iter()
			.find(|&&(w, _)| w == id)
			.map(|&(_, kind)| kind)
			.unwrap_or(WindowKind::Other)
	}

	fn close(&mut self, id: WindowId) -> Result<Vec<WindowEvent>, CloseError> {
		self.close_attempts.push(id);
		if self.refuse.contains(&id) {
			return Err(CloseError::Refused(id));
		}
		self.remove(id);
		let mut raised = vec![WindowEvent::Closing(id)];
		let linked: Vec<WindowId> = self
			.companions
			.iter()
			.filter(|&&(owner, _)| owner == id)
			.map(|&(_, other)| other)
			.collect();
		for other in linked {
			self.remove(other);
			raised.push(WindowEvent::Closing(other));
		}
		Ok(raised)
	}
}

impl EventSource for ScriptedHost {
	fn subscribe(&mut self) -> SubscriptionId {
		self.next_subscription += 1;
		SubscriptionId(self.next_subscription)
	}

	fn unsubscribe(&mut self, _id: SubscriptionId) {}
}

/// Opens a document in the host and delivers the created + activated
/// events the way an editor would.
fn open_and_focus(c: &mut EvictionCoordinator, host: &mut ScriptedHost, id: WindowId) {
	host.open_document(id);
	c.handle_event(host, WindowEvent::Created(id));
	c.handle_event(
		host,
		WindowEvent::Activated {
			gained: Some(id),
			lost: None,
		},
	);
}

fn tracked(c: &EvictionCoordinator) -> Vec<WindowId> {
	c.registry().iter().collect()
}

#[test]
fn test_capacity_two_evicts_oldest_on_third_create() {
	let mut host = ScriptedHost::default();
	let mut c = EvictionCoordinator::new(RecyclerConfig { capacity: 2 });
	c.init(&mut host);

	open_and_focus(&mut c, &mut host, WindowId(1));
	open_and_focus(&mut c, &mut host, WindowId(2));
	open_and_focus(&mut c, &mut host, WindowId(3));

	assert_eq!(host.close_attempts, vec![WindowId(1)]);
	assert_eq!(tracked(&c), vec![WindowId(2), WindowId(3)]);
	assert_eq!(host.open_windows(), vec![WindowId(2), WindowId(3)]);
}

#[test]
fn test_capacity_two_refused_close_leaves_three_open() {
	let mut host = ScriptedHost::default();
	host.refuse = vec![WindowId(1), WindowId(2), WindowId(3)];
	let mut c = EvictionCoordinator::new(RecyclerConfig { capacity: 2 });
	c.init(&mut host);

	open_and_focus(&mut c, &mut host, WindowId(1));
	open_and_focus(&mut c, &mut host, WindowId(2));
	open_and_focus(&mut c, &mut host, WindowId(3));

	// One attempt against the least-recently-used window, then the round
	// stops; nothing else gets hammered.
	assert_eq!(host.close_attempts, vec![WindowId(1)]);
	assert_eq!(c.registry().len(), 3);
}

#[test]
fn test_capacity_one_end_to_end() {
	let mut host = ScriptedHost::default();
	let mut c = EvictionCoordinator::new(RecyclerConfig { capacity: 1 });
	c.init(&mut host);

	open_and_focus(&mut c, &mut host, WindowId(1));
	assert_eq!(tracked(&c), vec![WindowId(1)]);

	open_and_focus(&mut c, &mut host, WindowId(2));
	assert_eq!(tracked(&c), vec![WindowId(2)]);
	assert_eq!(host.close_attempts, vec![WindowId(1)]);
	assert_eq!(host.open_windows(), vec![WindowId(2)]);
}

#[test]
fn test_missed_creation_events_healed_by_sync() {
	let mut host = ScriptedHost::default();
	// Three documents were already open before the recycler attached.
	host.open_document(WindowId(7));
	host.open_document(WindowId(8));
	host.open_document(WindowId(9));

	let mut c = EvictionCoordinator::new(RecyclerConfig { capacity: 10 });
	c.init(&mut host);
	assert!(c.registry().is_empty());

	// First creation event absorbs them in the host's reported order.
	open_and_focus(&mut c, &mut host, WindowId(10));
	assert_eq!(
		tracked(&c),
		vec![WindowId(7), WindowId(8), WindowId(9), WindowId(10)]
	);
}

#[test]
fn test_companion_close_counts_as_progress() {
	let mut host = ScriptedHost::default();
	// Closing window 1 takes window 2 down with it.
	host.companions = vec![(WindowId(1), WindowId(2))];
	let mut c = EvictionCoordinator::new(RecyclerConfig { capacity: 2 });
	c.init(&mut host);

	open_and_focus(&mut c, &mut host, WindowId(1));
	open_and_focus(&mut c, &mut host, WindowId(2));
	open_and_focus(&mut c, &mut host, WindowId(3));
	open_and_focus(&mut c, &mut host, WindowId(4));

	// The first eviction (for window 3's creation) removed both 1 and 2,
	// so window 4's creation found no pressure left.
	assert_eq!(host.close_attempts, vec![WindowId(1)]);
	assert_eq!(tracked(&c), vec![WindowId(3), WindowId(4)]);
}

#[test]
fn test_capacity_zero_closes_every_document() {
	let mut host = ScriptedHost::default();
	let mut c = EvictionCoordinator::new(RecyclerConfig { capacity: 0 });
	c.init(&mut host);

	open_and_focus(&mut c, &mut host, WindowId(1));
	assert!(c.registry().is_empty());
	assert!(host.open_windows().is_empty());
}
