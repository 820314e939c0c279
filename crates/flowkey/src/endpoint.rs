//! Host and port pairs.

use std::fmt;
use std::net::{IpAddr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;

use crate::address::Address;
use crate::error::{Error, Result};

/// Anything on the wire side that names one end of a connection.
///
/// Lets collaborators hand their own socket types to [`Endpoint::from_wire`]
/// without going through text.
pub trait WireEndpoint {
    fn address(&self) -> IpAddr;
    fn port(&self) -> u16;
}

impl WireEndpoint for SocketAddr {
    fn address(&self) -> IpAddr {
        self.ip()
    }

    fn port(&self) -> u16 {
        SocketAddr::port(self)
    }
}

impl WireEndpoint for SocketAddrV4 {
    fn address(&self) -> IpAddr {
        IpAddr::V4(*self.ip())
    }

    fn port(&self) -> u16 {
        SocketAddrV4::port(self)
    }
}

/// Scope and flow label are not part of the endpoint.
impl WireEndpoint for SocketAddrV6 {
    fn address(&self) -> IpAddr {
        IpAddr::V6(*self.ip())
    }

    fn port(&self) -> u16 {
        SocketAddrV6::port(self)
    }
}

/// One side of a connection: an address and a port.
///
/// Ordered by address, then port. The default is `0.0.0.0:0`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Endpoint {
    address: Address,
    port: u16,
}

impl Endpoint {
    pub fn new(address: impl Into<Address>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    /// Adapt a wire-level endpoint.
    pub fn from_wire<W: WireEndpoint + ?Sized>(wire: &W) -> Self {
        Self::new(wire.address(), wire.port())
    }

    /// Parse the address text and pair it with `port`.
    pub fn parse(address: &str, port: u16) -> Result<Self> {
        Ok(Self::new(Address::parse(address)?, port))
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address.ip(), self.port)
    }
}

impl fmt::Display for Endpoint {
    /// `<address>:<port>`. Diagnostic only: v6 hosts are not bracketed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    /// Accepts `a.b.c.d:port` and `[v6]:port`.
    fn from_str(s: &str) -> Result<Self> {
        s.parse::<SocketAddr>()
            .map(Self::from)
            .map_err(|_| Error::InvalidEndpointFormat(s.to_owned()))
    }
}

impl<A: Into<Address>> From<(A, u16)> for Endpoint {
    fn from((address, port): (A, u16)) -> Self {
        Self::new(address, port)
    }
}

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Self::from_wire(&addr)
    }
}

impl From<SocketAddrV4> for Endpoint {
    fn from(addr: SocketAddrV4) -> Self {
        Self::from_wire(&addr)
    }
}

/// `flowinfo` and `scope_id` are discarded, so `fe80::1%2:80` and
/// `fe80::1%3:80` become the same key.
impl From<SocketAddrV6> for Endpoint {
    fn from(addr: SocketAddrV6) -> Self {
        Self::from_wire(&addr)
    }
}

impl From<Endpoint> for SocketAddr {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.to_socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_default_endpoint() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.address(), Address::default());
        assert_eq!(endpoint.port(), 0);
        assert_eq!(endpoint.to_string(), "0.0.0.0:0");
    }

    #[test]
    fn test_order_is_address_then_port() {
        let a = Endpoint::parse("10.0.0.1", 9000).unwrap();
        let b = Endpoint::parse("10.0.0.2", 80).unwrap();
        let c = Endpoint::parse("10.0.0.2", 443).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_from_wire_types() {
        let v4 = SocketAddrV4::new(Ipv4Addr::new(192, 0, 2, 7), 53);
        assert_eq!(Endpoint::from(v4), Endpoint::parse("192.0.2.7", 53).unwrap());

        let v6 = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 8080, 0, 0);
        let endpoint = Endpoint::from(v6);
        assert_eq!(endpoint.to_string(), "::1:8080");
        assert_eq!(SocketAddr::from(endpoint), SocketAddr::V6(v6));
    }

    #[test]
    fn test_v6_scope_is_discarded() {
        let ip: Ipv6Addr = "fe80::1".parse().unwrap();
        let a = Endpoint::from(SocketAddrV6::new(ip, 80, 0, 2));
        let b = Endpoint::from(SocketAddrV6::new(ip, 80, 7, 3));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "fe80::1:80");
    }

    #[test]
    fn test_from_str() {
        let endpoint: Endpoint = "[2001:db8::5]:443".parse().unwrap();
        assert_eq!(endpoint.address().to_string(), "2001:db8::5");
        assert_eq!(endpoint.port(), 443);

        assert_eq!(
            "10.0.0.1".parse::<Endpoint>(),
            Err(Error::InvalidEndpointFormat("10.0.0.1".into()))
        );
        assert_eq!(
            "10.0.0.1:70000".parse::<Endpoint>(),
            Err(Error::InvalidEndpointFormat("10.0.0.1:70000".into()))
        );
    }

    #[test]
    fn test_tuple_conversion() {
        let endpoint = Endpoint::from((0x7f00_0001u32, 22u16));
        assert_eq!(endpoint.to_string(), "127.0.0.1:22");
    }
}
