use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::row::RouterId;

/// Although this is an error enum, these should be treated as warnings: the
/// update path never aborts on them, lookups degrade to sentinel values (port
/// 0, cost 0) and processing of the remaining rows continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingWarning {
    /// No output port is configured for this router, the row is installed
    /// with port 0. Either the neighbour table is incomplete, or the row was
    /// relayed by a router we are not directly connected to.
    #[error("no output port configured for router {router_id}, falling back to port 0")]
    UnknownOutputPort { router_id: RouterId },
    /// No link cost is configured for this router, the recovered row keeps
    /// cost 0 until the next regular update overwrites it.
    #[error("no link cost configured for router {router_id}, falling back to cost 0")]
    UnknownLinkCost { router_id: RouterId },
}

/// Table change notifications queued by [`crate::router::Router`] for the
/// host to surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableEvent {
    /// the route timed out and is now advertised as unreachable
    RouteExpired { dest: RouterId },
    /// the row was removed from the table
    RouteRemoved { dest: RouterId },
}
