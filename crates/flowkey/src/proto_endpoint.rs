//! Protocol-tagged endpoints.

use std::fmt;

use crate::address::Address;
use crate::endpoint::{Endpoint, WireEndpoint};

/// An endpoint qualified by a protocol tag: a half-specified flow key.
///
/// Ordered by protocol, then address, then port.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ProtoEndpoint {
    protocol: u8,
    endpoint: Endpoint,
}

impl ProtoEndpoint {
    /// Accepts anything an [`Endpoint`] converts from.
    pub fn new(protocol: u8, endpoint: impl Into<Endpoint>) -> Self {
        Self {
            protocol,
            endpoint: endpoint.into(),
        }
    }

    /// Tag a caller's wire-level endpoint, see [`Endpoint::from_wire`].
    pub fn from_wire<W: WireEndpoint + ?Sized>(protocol: u8, wire: &W) -> Self {
        Self::new(protocol, Endpoint::from_wire(wire))
    }

    pub const fn protocol(&self) -> u8 {
        self.protocol
    }

    pub const fn address(&self) -> Address {
        self.endpoint.address()
    }

    pub const fn port(&self) -> u16 {
        self.endpoint.port()
    }

    /// Drop the protocol, keeping the plain endpoint.
    pub const fn to_endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

impl fmt::Display for ProtoEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.protocol, self.endpoint)
    }
}

impl From<ProtoEndpoint> for Endpoint {
    fn from(three: ProtoEndpoint) -> Self {
        three.to_endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{TCP, UDP};
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    /// Capture-layer header view carrying only what a key needs.
    struct UdpHeader {
        src: [u8; 4],
        sport: u16,
    }

    impl WireEndpoint for UdpHeader {
        fn address(&self) -> IpAddr {
            IpAddr::V4(Ipv4Addr::from(self.src))
        }

        fn port(&self) -> u16 {
            self.sport
        }
    }

    #[test]
    fn test_from_custom_wire_type() {
        let header = UdpHeader {
            src: [172, 16, 0, 4],
            sport: 123,
        };
        let endpoint = Endpoint::from_wire(&header);
        assert_eq!(endpoint, Endpoint::parse("172.16.0.4", 123).unwrap());

        let three = ProtoEndpoint::from_wire(UDP, &header);
        assert_eq!(three, ProtoEndpoint::new(UDP, endpoint));
        assert_eq!(three.to_string(), "[17|172.16.0.4:123]");
    }

    #[test]
    fn test_projection() {
        let endpoint = Endpoint::parse("10.9.8.7", 5353).unwrap();
        let three = ProtoEndpoint::new(UDP, endpoint);
        assert_eq!(three.to_endpoint(), endpoint);
        assert_eq!(Endpoint::from(three), endpoint);
        assert_eq!(three.address(), endpoint.address());
        assert_eq!(three.port(), 5353);
    }

    #[test]
    fn test_accepts_endpoint_forms() {
        let socket: SocketAddr = "10.0.0.1:80".parse().unwrap();
        let a = ProtoEndpoint::new(TCP, socket);
        let b = ProtoEndpoint::new(TCP, (0x0a00_0001u32, 80u16));
        assert_eq!(a, b);
    }

    #[test]
    fn test_protocol_dominates_order() {
        let low = ProtoEndpoint::new(TCP, Endpoint::parse("10.0.0.9", 9).unwrap());
        let high = ProtoEndpoint::new(UDP, Endpoint::parse("10.0.0.1", 1).unwrap());
        assert!(low < high);
    }

    #[test]
    fn test_render() {
        let three = ProtoEndpoint::new(TCP, Endpoint::parse("10.0.0.1", 80).unwrap());
        assert_eq!(three.to_string(), "[6|10.0.0.1:80]");
    }
}
