use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Protocol timer parameters, defaults per RFC 2453 section 3.8.
///
/// The core never sleeps on these; the host owns the clock and passes `now`
/// into every time-dependent operation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProtocolParams {
    /// a route not re-advertised within this window is poisoned
    pub route_timeout: Duration,
    /// a poisoned route is kept (and re-advertised as unreachable) this long
    /// before it is flagged for removal
    pub deletion_delay: Duration,
    /// suggested period between full-table advertisements, read by hosts only
    pub update_interval: Duration,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            route_timeout: Duration::from_secs(180),
            deletion_delay: Duration::from_secs(120),
            update_interval: Duration::from_secs(30),
        }
    }
}
