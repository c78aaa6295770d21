#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::row::RouterId;

/// Static configuration of one directly connected neighbour: where to reach
/// it and what the link costs. Owned by the host configuration layer, read
/// only to the routing core.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputPort {
    pub router_id: RouterId,
    pub port_number: u16,
    /// Direct link cost to this neighbour. Lower is better, must not be 0
    pub link_cost: u16,
}

/// Looks up the output port towards `router_id`. Linear scan, the port table
/// is small and static.
pub fn port_to(ports: &[OutputPort], router_id: RouterId) -> Option<u16> {
    ports
        .iter()
        .find(|port| port.router_id == router_id)
        .map(|port| port.port_number)
}

/// Looks up the direct link cost to `router_id`.
pub fn link_cost_to(ports: &[OutputPort], router_id: RouterId) -> Option<u16> {
    ports
        .iter()
        .find(|port| port.router_id == router_id)
        .map(|port| port.link_cost)
}
