#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::row::RouterId;
use crate::concepts::table::RoutingTable;

/// A routing table prepared for one specific neighbour: link cost already
/// added and routes learned from that neighbour poisoned. The host serializes
/// and transmits it out of `port_number`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutboundAdvertisement {
    /// the neighbour this table is destined for
    pub neighbour: RouterId,
    /// send via this local port
    pub port_number: u16,
    pub table: RoutingTable,
}
