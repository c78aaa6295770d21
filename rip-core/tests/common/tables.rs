use rip_core::concepts::port::OutputPort;
use rip_core::concepts::row::{RouterId, RoutingTableRow};
use rip_core::concepts::table::RoutingTable;

pub fn row(dest: RouterId, cost: u16, next_hop: RouterId, learned_from: RouterId) -> RoutingTableRow {
    RoutingTableRow {
        dest_router_id: dest,
        link_cost: cost,
        next_hop_router_id: next_hop,
        next_hop_port_number: 0,
        learned_from,
        flagged_for_deletion: false,
        timeout_at: None,
        delete_at: None,
    }
}

pub fn table(my_router_id: RouterId, rows: Vec<RoutingTableRow>) -> RoutingTable {
    RoutingTable { my_router_id, rows }
}

pub fn port(router_id: RouterId, port_number: u16, link_cost: u16) -> OutputPort {
    OutputPort {
        router_id,
        port_number,
        link_cost,
    }
}
