use std::time::{Duration, Instant};

use rip_core::concepts::port::OutputPort;
use rip_core::framework::ProtocolParams;
use rip_core::router::Router;

fn port(router_id: u16, port_number: u16, link_cost: u16) -> OutputPort {
    OutputPort {
        router_id,
        port_number,
        link_cost,
    }
}

fn main() {
    // we have the following connections: 1 <-> 2 <-> 3

    let now = Instant::now();
    let params = ProtocolParams::default();

    let mut routers = vec![
        Router::new(1, vec![port(2, 3001, 1)], params.clone()),
        Router::new(2, vec![port(1, 3002, 1), port(3, 3003, 2)], params.clone()),
        Router::new(3, vec![port(2, 3004, 2)], params),
    ];
    for router in &mut routers {
        router.init(now);
    }

    // lets simulate routing!

    for step in 0..3 {
        // everyone prepares a poisoned per-neighbour advertisement
        let mut adverts = Vec::new();
        for router in &mut routers {
            router.advertise();
            adverts.append(&mut router.outbound);
        }

        // deliver them. in this simple example the port number isn't really
        // used, the neighbour id is enough to find the recipient
        for advert in adverts {
            if let Some(recipient) = routers
                .iter_mut()
                .find(|r| r.table.my_router_id == advert.neighbour)
            {
                recipient.handle_incoming(&advert.table, now);
            }
        }

        // lets observe router 1's table:
        println!("router 1's routes in step {step}:");
        for row in &routers[0].table.rows {
            println!(
                " - {}: cost {}, next hop {} (port {})",
                row.dest_router_id, row.link_cost, row.next_hop_router_id, row.next_hop_port_number
            );
        }
    }

    // router 2 loses its link to 3
    let later = now + Duration::from_secs(30);
    routers[1].neighbour_down(3, later);
    println!("after the 2-3 link goes down:");
    for row in &routers[1].table.rows {
        println!(
            " - {}: cost {}, next hop {}",
            row.dest_router_id, row.link_cost, row.next_hop_router_id
        );
    }

    // once the deletion deadline passes, the next sweep drops the route
    let much_later = later + Duration::from_secs(121);
    routers[1].tick(much_later);
    for event in routers[1].events.drain(..) {
        println!("router 2 event: {event:?}");
    }

    // OUTPUT:
    // router 1's routes in step 0:
    //  - 1: cost 0, next hop 1 (port 0)
    //  - 2: cost 1, next hop 2 (port 3001)
    //  - 3: cost 3, next hop 2 (port 3001)
    // ...
    // after the 2-3 link goes down:
    //  - 2: cost 0, next hop 2
    //  - 1: cost 1, next hop 1
    //  - 3: cost 16, next hop 3
    // router 2 event: RouteRemoved { dest: 3 }
}
