//! Host addresses.
//!
//! `Address` wraps a v4 or v6 host address. It is the leaf of every flow key
//! and carries the only lossy conversion in the crate: the big-endian v4
//! layout used when embedding an address in a legacy socket structure.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};

/// A network host address (IPv4 or IPv6).
///
/// Ordering is the native `IpAddr` order: all v4 addresses sort before all
/// v6 addresses, then by numeric value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Address(IpAddr);

impl Address {
    /// Wrap a native address value.
    pub const fn new(ip: IpAddr) -> Self {
        Self(ip)
    }

    /// Interpret `bits` as a host-order v4 address, so `0x0a00_0001` is `10.0.0.1`.
    pub const fn from_bits(bits: u32) -> Self {
        Self(IpAddr::V4(Ipv4Addr::new(
            (bits >> 24) as u8,
            (bits >> 16) as u8,
            (bits >> 8) as u8,
            bits as u8,
        )))
    }

    /// Parse a textual IPv4 or IPv6 literal.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    /// The underlying native address.
    pub const fn ip(&self) -> IpAddr {
        self.0
    }

    pub const fn is_ipv4(&self) -> bool {
        matches!(self.0, IpAddr::V4(_))
    }

    pub const fn is_ipv6(&self) -> bool {
        matches!(self.0, IpAddr::V6(_))
    }

    /// Unmap a v4-mapped v6 address (`::ffff:a.b.c.d`) into its v4 form.
    ///
    /// Every other address is returned unchanged.
    pub fn to_canonical(&self) -> Self {
        match self.0 {
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => Self(IpAddr::V4(v4)),
                None => *self,
            },
            IpAddr::V4(_) => *self,
        }
    }

    /// The v4 address as a host-order integer.
    ///
    /// Fails with [`Error::UnsupportedAddressFamily`] for any v6 address,
    /// v4-mapped ones included.
    pub fn to_u32(&self) -> Result<u32> {
        self.v4().map(u32::from)
    }

    /// The v4 address in the network-order layout of a C `in_addr`.
    ///
    /// Same family rule as [`Address::to_u32`].
    pub fn to_in_addr(&self) -> Result<InAddr> {
        self.v4().map(|v4| InAddr::from_octets(v4.octets()))
    }

    fn v4(&self) -> Result<Ipv4Addr> {
        match self.0 {
            IpAddr::V4(v4) => Ok(v4),
            IpAddr::V6(_) => {
                tracing::trace!(address = %self.0, "rejecting v4-only conversion");
                Err(Error::UnsupportedAddressFamily(self.0))
            }
        }
    }
}

impl Default for Address {
    /// The all-zero v4 address, `0.0.0.0`.
    fn default() -> Self {
        Self::from_bits(0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<IpAddr>()
            .map(Self)
            .map_err(|_| Error::InvalidAddressFormat(s.to_owned()))
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(IpAddr::V4(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self(IpAddr::V6(ip))
    }
}

impl From<u32> for Address {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Self(IpAddr::V4(Ipv4Addr::from(octets)))
    }
}

impl From<u128> for Address {
    /// Interpret `bits` as a host-order v6 address, like `Ipv6Addr::from(u128)`.
    fn from(bits: u128) -> Self {
        Self(IpAddr::V6(Ipv6Addr::from(bits)))
    }
}

impl From<[u8; 16]> for Address {
    fn from(octets: [u8; 16]) -> Self {
        Self(IpAddr::V6(Ipv6Addr::from(octets)))
    }
}

impl From<Address> for IpAddr {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// A v4 address laid out like the C `in_addr` structure.
///
/// `s_addr` holds the four address bytes in network (big-endian) order in
/// memory, whatever the host endianness.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct InAddr {
    pub s_addr: u32,
}

impl InAddr {
    /// Build from octets in address order.
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self {
            s_addr: u32::from_ne_bytes(octets),
        }
    }

    /// The address bytes as they sit in memory.
    pub const fn octets(&self) -> [u8; 4] {
        self.s_addr.to_ne_bytes()
    }

    /// The host-order integer value of the address.
    pub const fn to_bits(&self) -> u32 {
        u32::from_be(self.s_addr)
    }
}

impl From<InAddr> for Address {
    fn from(in_addr: InAddr) -> Self {
        Self::from(in_addr.octets())
    }
}
