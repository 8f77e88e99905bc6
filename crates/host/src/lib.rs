//! Host editor boundary for the tab recycler.
//!
//! The policy core never talks to an editor directly; it sees the host
//! through the traits defined here. A host adapter implements
//! [`HostSession`] (enumeration, kind classification, close) and
//! [`EventSource`] (lifecycle notification registration), and forwards
//! [`WindowEvent`]s to the coordinator on its own dispatch thread.

mod error;
mod event;
mod session;
mod window;

pub use error::CloseError;
pub use event::WindowEvent;
pub use session::{EventSource, HostSession, SubscriptionId};
pub use window::{WindowId, WindowKind};
