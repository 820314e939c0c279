//! Protocol-qualified flow keys (5-tuples).

use std::fmt;

use crate::endpoint::Endpoint;
use crate::flow::pair::FlowPair;

/// Protocol, source and destination: the key for connection and NAT tables.
///
/// Ordered by protocol first, then source, then destination, so all flows of
/// one protocol are contiguous in an ordered map.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Flow {
    protocol: u8,
    pair: FlowPair,
}

impl Flow {
    pub fn new(
        protocol: u8,
        source: impl Into<Endpoint>,
        destination: impl Into<Endpoint>,
    ) -> Self {
        Self::from_pair(protocol, FlowPair::new(source, destination))
    }

    pub const fn from_pair(protocol: u8, pair: FlowPair) -> Self {
        Self { protocol, pair }
    }

    pub const fn protocol(&self) -> u8 {
        self.protocol
    }

    pub const fn pair(&self) -> FlowPair {
        self.pair
    }

    pub const fn source(&self) -> Endpoint {
        self.pair.source()
    }

    pub const fn destination(&self) -> Endpoint {
        self.pair.destination()
    }

    /// The reply-direction key, protocol unchanged.
    pub const fn reverse(&self) -> Self {
        Self::from_pair(self.protocol, self.pair.reverse())
    }

    /// See [`FlowPair::canonical`].
    pub fn canonical(&self) -> Self {
        Self::from_pair(self.protocol, self.pair.canonical())
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}|{}]",
            self.protocol,
            self.pair.source(),
            self.pair.destination()
        )
    }
}
