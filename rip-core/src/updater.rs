use std::time::Instant;

use log::{debug, trace, warn};

use crate::concepts::port::{link_cost_to, port_to, OutputPort};
use crate::concepts::row::{RouterId, RoutingTableRow};
use crate::concepts::table::RoutingTable;
use crate::feedback::RoutingWarning;
use crate::framework::ProtocolParams;

/// Metric value treated as unreachable. Costs above it can appear on
/// outbound copies after [`add_link_cost`], every guard below only ever
/// tests `< INFINITY`, so anything at or past 16 counts as unreachable.
pub const INFINITY: u16 = 16;

/// Sets metrics to infinity for every route that was learned from the
/// neighbour this table is about to be sent to. This implements split
/// horizon with poisoned reverse.
///
/// Call this on a per-neighbour copy of the table, never on the master
/// table: the poisoning is only correct for the one neighbour.
pub fn poison_reverse(table: &mut RoutingTable, neighbour: RouterId) {
    for row in &mut table.rows {
        if row.learned_from == neighbour {
            row.link_cost = INFINITY;
        }
    }
}

/// Adds the cost of the outgoing link to every row before advertisement.
///
/// Deliberately does not clamp at [`INFINITY`]; poisoned rows leave here
/// with a cost above 16 and receivers treat them as unreachable all the
/// same.
pub fn add_link_cost(table: &mut RoutingTable, link_cost: u16) {
    for row in &mut table.rows {
        row.link_cost = row.link_cost.saturating_add(link_cost);
    }
}

/// Removes every row whose deletion deadline has flagged it, in one pass.
/// Returns the destinations of the removed rows so the host can surface
/// them; the relative order of the surviving rows is unchanged.
pub fn remove_flagged_rows(table: &mut RoutingTable) -> Vec<RouterId> {
    let mut removed = Vec::new();
    table.rows.retain(|row| {
        if row.flagged_for_deletion {
            debug!("removed route to {}", row.dest_router_id);
            removed.push(row.dest_router_id);
            false
        } else {
            true
        }
    });
    removed
}

/// Marks every route through a lost neighbour as unreachable and schedules
/// its removal. Called by the host when it detects that `router_id` is down.
pub fn mark_rows_invalid(
    table: &mut RoutingTable,
    router_id: RouterId,
    now: Instant,
    params: &ProtocolParams,
) {
    for row in &mut table.rows {
        if row.next_hop_router_id == router_id {
            debug!(
                "neighbour {router_id} is down, poisoning route to {}",
                row.dest_router_id
            );
            row.link_cost = INFINITY;
            row.arm_deletion_timer(now, params);
        }
    }
}

/// The distance-vector merge: folds a table received from a neighbour into
/// `current`.
///
/// Received costs already include the link to the sender (the sender runs
/// [`add_link_cost`] before transmitting), so they compare directly against
/// the installed costs. Per received row:
///
/// - a strictly cheaper route replaces the installed one, unless the
///   installed one is currently poisoned (equal costs never replace, and a
///   poisoned row only recovers through the paths below);
/// - a not-cheaper but reachable re-advertisement re-arms the installed
///   row's timeout, keeping the route alive;
/// - if the sender itself is a destination whose row is poisoned, the row
///   recovers: timeout re-armed and cost restored from the configured link
///   to its next hop;
/// - an unknown destination is installed as a new row unless it is already
///   unreachable.
///
/// Replaced and inserted rows take the sender as next hop and learned-from,
/// resolve their output port from `ports`, and start with a fresh timeout.
/// Lookups that find nothing fall back to 0 and processing continues.
pub fn process_incoming_table(
    current: &mut RoutingTable,
    received: &RoutingTable,
    my_router_id: RouterId,
    ports: &[OutputPort],
    now: Instant,
    params: &ProtocolParams,
) {
    trace!(
        "router {my_router_id}: merging {} rows from {}",
        received.rows.len(),
        received.my_router_id
    );
    for update in &received.rows {
        let mut matched = false;
        // staged index, applied after the scan so the scan never observes
        // its own mutations
        let mut replace_at = None;

        for (idx, row) in current.rows.iter_mut().enumerate() {
            if update.dest_router_id == row.dest_router_id {
                matched = true;

                if update.link_cost < row.link_cost && row.link_cost != INFINITY {
                    replace_at = Some(idx);
                } else if update.link_cost < INFINITY {
                    // a valid entry for this destination that is not
                    // cheaper: keep the installed route, just re-arm its
                    // timeout
                    row.reset_timeout_timer(now, params);
                }
            }

            // the sender has come back online, restore the link cost of its
            // row if it is still in the table
            if received.my_router_id == row.dest_router_id && row.link_cost == INFINITY {
                debug!("neighbour {} recovered", row.dest_router_id);
                row.reset_timeout_timer(now, params);
                row.link_cost = link_cost_or_sentinel(ports, row.next_hop_router_id);
            }
        }

        if let Some(idx) = replace_at {
            trace!(
                "replacing route to {} via {}, cost {}",
                update.dest_router_id,
                received.my_router_id,
                update.link_cost
            );
            current.rows[idx] = adopt_row(update, received.my_router_id, ports, now, params);
        } else if !matched && update.link_cost < INFINITY {
            trace!(
                "new route to {} via {}, cost {}",
                update.dest_router_id,
                received.my_router_id,
                update.link_cost
            );
            current
                .rows
                .push(adopt_row(update, received.my_router_id, ports, now, params));
        }
        // an unknown destination advertised at infinity is dropped, never
        // learn a route that is already unreachable
    }
}

/// Sweeps the per-row deadlines. Rows whose timeout has passed are poisoned
/// and their deletion deadline armed; rows whose deletion deadline has
/// passed are flagged for the removal pass. Returns the destinations that
/// newly timed out.
pub fn expire_timers(
    table: &mut RoutingTable,
    now: Instant,
    params: &ProtocolParams,
) -> Vec<RouterId> {
    let mut expired = Vec::new();
    for row in &mut table.rows {
        if row.link_cost != INFINITY && row.timeout_expired(now) {
            debug!("route to {} timed out", row.dest_router_id);
            row.link_cost = INFINITY;
            row.timeout_at = None;
            row.arm_deletion_timer(now, params);
            expired.push(row.dest_router_id);
        }
        if row.deletion_expired(now) {
            row.flagged_for_deletion = true;
            row.delete_at = None;
        }
    }
    expired
}

/// Rewrites a received row for installation: the sender becomes next hop and
/// learned-from, the port is resolved from the neighbour table and the
/// timeout starts fresh.
fn adopt_row(
    update: &RoutingTableRow,
    sender: RouterId,
    ports: &[OutputPort],
    now: Instant,
    params: &ProtocolParams,
) -> RoutingTableRow {
    let mut row = update.clone();
    row.next_hop_router_id = sender;
    row.learned_from = sender;
    row.next_hop_port_number = port_or_sentinel(ports, sender);
    row.flagged_for_deletion = false;
    row.delete_at = None;
    row.reset_timeout_timer(now, params);
    row
}

fn port_or_sentinel(ports: &[OutputPort], router_id: RouterId) -> u16 {
    port_to(ports, router_id).unwrap_or_else(|| {
        warn!("{}", RoutingWarning::UnknownOutputPort { router_id });
        0
    })
}

fn link_cost_or_sentinel(ports: &[OutputPort], router_id: RouterId) -> u16 {
    link_cost_to(ports, router_id).unwrap_or_else(|| {
        warn!("{}", RoutingWarning::UnknownLinkCost { router_id });
        0
    })
}
