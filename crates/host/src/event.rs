//! Window lifecycle notifications.

use serde::{Deserialize, Serialize};

use crate::WindowId;

/// A lifecycle notification delivered by the host event source.
///
/// Delivery order is the host's business: the policy assumes nothing beyond
/// "a [`WindowEvent::Closing`] for a window eventually arrives if the host
/// removes it". Missed or reordered notifications are healed by the
/// coordinator's registry sync on the next creation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEvent {
	/// Focus moved between windows. Either side may be absent, e.g. when
	/// the first window opens or the host itself loses focus.
	Activated {
		/// The window that gained focus.
		gained: Option<WindowId>,
		/// The window that lost focus. Unused by the policy; carried for
		/// symmetry with the host's notification signature.
		lost: Option<WindowId>,
	},
	/// A new window was created.
	Created(WindowId),
	/// A window is being removed by the host.
	Closing(WindowId),
}
