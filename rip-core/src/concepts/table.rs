#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::row::{RouterId, RoutingTableRow};

/// The routing table of one router.
///
/// Rows are ordered and exclusively owned, at most one row per destination in
/// steady state. The update functions in [`crate::updater`] mutate a table in
/// place; a table received from a neighbour is the same type, decoded by an
/// external transport.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutingTable {
    pub my_router_id: RouterId,
    pub rows: Vec<RoutingTableRow>,
}

impl RoutingTable {
    pub fn new(my_router_id: RouterId) -> Self {
        Self {
            my_router_id,
            rows: Vec::new(),
        }
    }

    pub fn row(&self, dest: RouterId) -> Option<&RoutingTableRow> {
        self.rows.iter().find(|row| row.dest_router_id == dest)
    }

    pub fn row_mut(&mut self, dest: RouterId) -> Option<&mut RoutingTableRow> {
        self.rows.iter_mut().find(|row| row.dest_router_id == dest)
    }

    pub fn cost_to(&self, dest: RouterId) -> Option<u16> {
        self.row(dest).map(|row| row.link_cost)
    }

    pub fn next_hop_to(&self, dest: RouterId) -> Option<RouterId> {
        self.row(dest).map(|row| row.next_hop_router_id)
    }
}
