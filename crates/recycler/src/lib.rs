//! Bounded-recency eviction policy for open document windows.
//!
//! Keeps the number of concurrently open document views under a configured
//! maximum: whenever a new document window is created and the limit is
//! exceeded, the least-recently-used one is closed automatically. Closes
//! that fail (a user declining a save prompt, say) abort the round instead
//! of being retried.
//!
//! # Design
//!
//! Two pieces, in dependency order:
//! - [`RecencyRegistry`] orders live window handles from least- to
//!   most-recently-used. It knows nothing about eviction or the host.
//! - [`EvictionCoordinator`] consumes host lifecycle events, drives the
//!   registry, and runs the eviction loop after creation events.
//!
//! The host side of the boundary lives in `tabcycle-host`: the coordinator
//! only sees the editor through [`HostSession`](tabcycle_host::HostSession)
//! and [`EventSource`](tabcycle_host::EventSource).

mod config;
mod coordinator;
mod registry;
mod shared;

pub use config::{DEFAULT_CAPACITY, RecyclerConfig};
pub use coordinator::EvictionCoordinator;
pub use registry::RecencyRegistry;
pub use shared::SharedCoordinator;
