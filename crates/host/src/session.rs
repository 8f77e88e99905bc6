//! Session and event-source traits implemented by host adapters.

use crate::{CloseError, WindowEvent, WindowId, WindowKind};

/// Opaque token returned by [`EventSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Queries and commands the policy issues against the live host session.
pub trait HostSession {
	/// Enumerates every window the host currently has open, in the host's
	/// own reporting order. Includes non-document windows; callers filter
	/// by [`HostSession::window_kind`].
	fn open_windows(&self) -> Vec<WindowId>;

	/// Classifies a window. Windows the host no longer knows are reported
	/// as [`WindowKind::Other`].
	fn window_kind(&self, id: WindowId) -> WindowKind;

	/// Asks the host to close a window.
	///
	/// On success, returns the lifecycle notifications the host raised
	/// synchronously while closing: at minimum `Closing(id)` when the
	/// window actually went away, plus notifications for any related
	/// windows the host tore down with it. The caller applies these before
	/// deciding whether the close made progress.
	///
	/// A host may also "succeed" without closing anything (for example, a
	/// save prompt left the window open without raising an error); that
	/// surfaces as an empty notification list.
	///
	/// This call may block on user interaction (save prompts). The policy
	/// tolerates that without timeout and only reacts to the eventual
	/// outcome.
	fn close(&mut self, id: WindowId) -> Result<Vec<WindowEvent>, CloseError>;
}

/// Registration for window lifecycle notifications.
///
/// Subscribing tells the host to start forwarding [`WindowEvent`]s to the
/// caller on its dispatch thread; unsubscribing stops delivery. The pair
/// bounds the coordinator's lifetime explicitly instead of tying it to
/// ambient object lifetime.
pub trait EventSource {
	/// Starts event delivery and returns a token for [`EventSource::unsubscribe`].
	fn subscribe(&mut self) -> SubscriptionId;

	/// Stops event delivery for a prior subscription. Unknown tokens are
	/// ignored.
	fn unsubscribe(&mut self, id: SubscriptionId);
}
