use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::advert::OutboundAdvertisement;
use crate::concepts::port::OutputPort;
use crate::concepts::row::{RouterId, RoutingTableRow};
use crate::concepts::table::RoutingTable;
use crate::feedback::TableEvent;
use crate::framework::ProtocolParams;
use crate::updater;

/// Single owner of one router's table.
///
/// Every mutation of the table funnels through this struct, so the host
/// needs no locking: periodic advertisement, incoming updates, neighbour
/// loss and timer sweeps are all plain method calls on the one owner.
/// Prepared advertisements and table change notifications accumulate in
/// `outbound` and `events` until the host drains them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Router {
    pub table: RoutingTable,
    pub ports: Vec<OutputPort>,
    pub params: ProtocolParams,
    pub outbound: Vec<OutboundAdvertisement>,
    pub events: Vec<TableEvent>,
}

impl Router {
    pub fn new(my_router_id: RouterId, ports: Vec<OutputPort>, params: ProtocolParams) -> Self {
        Self {
            table: RoutingTable::new(my_router_id),
            ports,
            params,
            outbound: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Seeds the table: a cost-0 row for this router itself plus one row per
    /// configured port. Only call once.
    ///
    /// The self row carries no timeout. Neighbours advertise it back
    /// poisoned (they learned it from us), so it would never be refreshed;
    /// it also lets neighbours re-learn the direct route after theirs has
    /// been deleted.
    pub fn init(&mut self, now: Instant) {
        let my_router_id = self.table.my_router_id;
        self.table.rows.push(RoutingTableRow {
            dest_router_id: my_router_id,
            link_cost: 0,
            next_hop_router_id: my_router_id,
            next_hop_port_number: 0,
            learned_from: my_router_id,
            flagged_for_deletion: false,
            timeout_at: None,
            delete_at: None,
        });
        for port in &self.ports {
            let mut row = RoutingTableRow {
                dest_router_id: port.router_id,
                link_cost: port.link_cost,
                next_hop_router_id: port.router_id,
                next_hop_port_number: port.port_number,
                learned_from: port.router_id,
                flagged_for_deletion: false,
                timeout_at: None,
                delete_at: None,
            };
            row.reset_timeout_timer(now, &self.params);
            self.table.rows.push(row);
        }
    }

    /// Queues one advertisement per configured port: a copy of the table
    /// with the outgoing link cost added, then routes learned from that
    /// neighbour poisoned.
    pub fn advertise(&mut self) {
        for port in &self.ports {
            let mut copy = self.table.clone();
            updater::add_link_cost(&mut copy, port.link_cost);
            updater::poison_reverse(&mut copy, port.router_id);
            self.outbound.push(OutboundAdvertisement {
                neighbour: port.router_id,
                port_number: port.port_number,
                table: copy,
            });
        }
    }

    /// Merges a table received from a neighbour into the master table.
    pub fn handle_incoming(&mut self, received: &RoutingTable, now: Instant) {
        let my_router_id = self.table.my_router_id;
        updater::process_incoming_table(
            &mut self.table,
            received,
            my_router_id,
            &self.ports,
            now,
            &self.params,
        );
    }

    /// Poisons every route through a neighbour the host has detected as
    /// down and schedules those rows for removal.
    pub fn neighbour_down(&mut self, router_id: RouterId, now: Instant) {
        updater::mark_rows_invalid(&mut self.table, router_id, now, &self.params);
    }

    /// Fires the per-row timers and sweeps flagged rows, queueing a
    /// notification per affected route.
    pub fn tick(&mut self, now: Instant) {
        for dest in updater::expire_timers(&mut self.table, now, &self.params) {
            self.events.push(TableEvent::RouteExpired { dest });
        }
        for dest in updater::remove_flagged_rows(&mut self.table) {
            self.events.push(TableEvent::RouteRemoved { dest });
        }
    }
}
