//! Error types for host close operations.

use thiserror::Error;

use crate::WindowId;

/// Errors a host may raise when asked to close a window.
///
/// All of these are recoverable from the policy's point of view: a failed
/// close aborts the current eviction round and is never retried within it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloseError {
	/// The user declined a save-changes prompt, or the host otherwise
	/// refused to discard the window.
	#[error("{0} refused to close")]
	Refused(WindowId),

	/// The host no longer knows the window.
	#[error("{0} is not an open window")]
	UnknownWindow(WindowId),
}
