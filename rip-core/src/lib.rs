//! rip-core is an I/O free distance-vector routing table engine.
//!
//! The crate maintains a router's table as updates arrive from neighbours,
//! applies split horizon with poisoned reverse when preparing outbound
//! advertisements, and ages routes out through per-row deadlines. It does
//! not open sockets, frame packets or run timers: the host delivers decoded
//! neighbour tables, the neighbour/port configuration and the current time,
//! and drains prepared advertisements and table change events.

pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod router;
pub mod updater;
