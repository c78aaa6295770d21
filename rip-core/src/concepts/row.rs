use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framework::ProtocolParams;

/// Identity of a router on the routing network, MUST be unique per network
pub type RouterId = u16;

/// A single destination entry in a routing table.
///
/// The two deadlines are the row's timers: `timeout_at` guards route
/// freshness (a route that is not re-advertised before it passes is
/// poisoned), `delete_at` schedules the removal of a poisoned row. `None`
/// means the timer is not armed. Deadlines are monotonic and never persist
/// across a freeze/restore, a thawed row stays put until its timers are
/// re-armed by the next update.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutingTableRow {
    pub dest_router_id: RouterId,
    /// distance to the destination, 16 (infinity) marks it unreachable.
    /// Outbound copies may carry costs above 16 after the link cost is added
    pub link_cost: u16,
    pub next_hop_router_id: RouterId,
    /// local output port towards the next hop, 0 if none is configured
    pub next_hop_port_number: u16,
    /// the neighbour that advertised this route to us
    pub learned_from: RouterId,
    /// set once the deletion deadline passes, swept by the removal pass
    pub flagged_for_deletion: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub timeout_at: Option<Instant>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub delete_at: Option<Instant>,
}

impl RoutingTableRow {
    /// Arms (or re-arms) the route timeout deadline.
    pub fn reset_timeout_timer(&mut self, now: Instant, params: &ProtocolParams) {
        self.timeout_at = Some(now + params.route_timeout);
    }

    /// Arms (or re-arms) the deletion deadline.
    pub fn arm_deletion_timer(&mut self, now: Instant, params: &ProtocolParams) {
        self.delete_at = Some(now + params.deletion_delay);
    }

    pub fn timeout_expired(&self, now: Instant) -> bool {
        self.timeout_at.is_some_and(|at| at <= now)
    }

    pub fn deletion_expired(&self, now: Instant) -> bool {
        self.delete_at.is_some_and(|at| at <= now)
    }
}
