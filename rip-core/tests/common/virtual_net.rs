use std::time::Instant;

use rip_core::concepts::port::OutputPort;
use rip_core::concepts::row::RouterId;
use rip_core::framework::ProtocolParams;
use rip_core::router::Router;

/// An in-process network of routers: advertisements are delivered instantly
/// and losslessly between the configured link endpoints.
pub struct VirtualNet {
    pub routers: Vec<Router>,
}

impl VirtualNet {
    /// `links` are `(a, b, cost)` edges; both endpoints get an output port
    /// for the link.
    pub fn create(
        nodes: &[RouterId],
        links: &[(RouterId, RouterId, u16)],
        now: Instant,
    ) -> VirtualNet {
        let routers = nodes
            .iter()
            .map(|&id| {
                let mut ports = Vec::new();
                for (i, &(a, b, cost)) in links.iter().enumerate() {
                    if a == id || b == id {
                        let peer = if a == id { b } else { a };
                        ports.push(OutputPort {
                            router_id: peer,
                            port_number: 1024 + i as u16,
                            link_cost: cost,
                        });
                    }
                }
                let mut router = Router::new(id, ports, ProtocolParams::default());
                router.init(now);
                router
            })
            .collect();
        VirtualNet { routers }
    }

    pub fn router(&self, id: RouterId) -> &Router {
        self.routers
            .iter()
            .find(|r| r.table.my_router_id == id)
            .unwrap_or_else(|| panic!("no node {id} found"))
    }

    pub fn router_mut(&mut self, id: RouterId) -> &mut Router {
        self.routers
            .iter_mut()
            .find(|r| r.table.my_router_id == id)
            .unwrap_or_else(|| panic!("no node {id} found"))
    }

    pub fn cost_to(&self, at: RouterId, dest: RouterId) -> u16 {
        self.router(at)
            .table
            .cost_to(dest)
            .unwrap_or_else(|| panic!("no route from {at} to {dest}"))
    }

    pub fn next_hop(&self, at: RouterId, dest: RouterId) -> RouterId {
        self.router(at)
            .table
            .next_hop_to(dest)
            .unwrap_or_else(|| panic!("no route from {at} to {dest}"))
    }

    /// Takes a router out of the network: it stops advertising and stops
    /// receiving. Push it back onto `routers` to rejoin.
    pub fn remove_node(&mut self, id: RouterId) -> Router {
        let idx = self
            .routers
            .iter()
            .position(|r| r.table.my_router_id == id)
            .unwrap_or_else(|| panic!("no node {id} found"));
        self.routers.remove(idx)
    }

    /// One advertisement round: every router queues its per-neighbour
    /// tables, then everything queued is delivered.
    pub fn tick(&mut self, now: Instant) {
        let mut deliveries = Vec::new();
        for router in &mut self.routers {
            router.advertise();
            deliveries.append(&mut router.outbound);
        }
        for advert in deliveries {
            if let Some(peer) = self
                .routers
                .iter_mut()
                .find(|r| r.table.my_router_id == advert.neighbour)
            {
                peer.handle_incoming(&advert.table, now);
            }
        }
    }

    pub fn tick_n(&mut self, times: u32, now: Instant) {
        for _ in 0..times {
            self.tick(now);
        }
    }
}
