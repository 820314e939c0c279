//! Stable hashing of flow keys.
//!
//! `std::hash::Hash` is fine for in-process maps, but its output depends on
//! the hasher seed. Sharding flows across workers or queues needs a digest
//! that is the same in every process, so keys also implement [`StableHash`]:
//! xxh3 over a fixed byte layout.
//!
//! ```text
//! address  = family(1) || bytes(16, v4 zero-padded)
//! endpoint = address || port(2, big-endian)
//! pair     = endpoint(source) || endpoint(destination)
//! flow     = protocol(1) || pair
//! three    = protocol(1) || endpoint
//! ```

use std::net::IpAddr;

use xxhash_rust::xxh3::Xxh3;

use crate::address::Address;
use crate::endpoint::Endpoint;
use crate::flow::{Flow, FlowPair};
use crate::proto_endpoint::ProtoEndpoint;

const FAMILY_V4: u8 = 4;
const FAMILY_V6: u8 = 6;

/// Seed-independent 64-bit digest of a key.
pub trait StableHash {
    /// Feed this key's byte layout into `hasher`.
    fn write_key(&self, hasher: &mut Xxh3);

    fn stable_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        self.write_key(&mut hasher);
        hasher.digest()
    }
}

impl StableHash for Address {
    fn write_key(&self, hasher: &mut Xxh3) {
        let mut bytes = [0u8; 17];
        match self.ip() {
            IpAddr::V4(v4) => {
                bytes[0] = FAMILY_V4;
                bytes[1..5].copy_from_slice(&v4.octets());
            }
            IpAddr::V6(v6) => {
                bytes[0] = FAMILY_V6;
                bytes[1..].copy_from_slice(&v6.octets());
            }
        }
        hasher.update(&bytes);
    }
}

impl StableHash for Endpoint {
    fn write_key(&self, hasher: &mut Xxh3) {
        self.address().write_key(hasher);
        hasher.update(&self.port().to_be_bytes());
    }
}

impl StableHash for FlowPair {
    fn write_key(&self, hasher: &mut Xxh3) {
        self.source().write_key(hasher);
        self.destination().write_key(hasher);
    }
}

impl StableHash for Flow {
    fn write_key(&self, hasher: &mut Xxh3) {
        hasher.update(&[self.protocol()]);
        self.pair().write_key(hasher);
    }
}

impl StableHash for ProtoEndpoint {
    fn write_key(&self, hasher: &mut Xxh3) {
        hasher.update(&[self.protocol()]);
        self.to_endpoint().write_key(hasher);
    }
}

impl Flow {
    /// Digest shared by both directions of a connection.
    pub fn symmetric_hash(&self) -> u64 {
        self.canonical().stable_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{TCP, UDP};

    fn flow(protocol: u8) -> Flow {
        Flow::new(
            protocol,
            Endpoint::parse("10.0.0.1", 40000).unwrap(),
            Endpoint::parse("10.0.0.2", 53).unwrap(),
        )
    }

    #[test]
    fn test_equal_keys_hash_equal() {
        assert_eq!(flow(UDP).stable_hash(), flow(UDP).stable_hash());
        assert_ne!(flow(UDP).stable_hash(), flow(TCP).stable_hash());
    }

    #[test]
    fn test_direction_changes_stable_hash() {
        let f = flow(UDP);
        assert_ne!(f.stable_hash(), f.reverse().stable_hash());
    }

    #[test]
    fn test_symmetric_hash_ignores_direction() {
        let f = flow(UDP);
        assert_eq!(f.symmetric_hash(), f.reverse().symmetric_hash());
    }

    #[test]
    fn test_family_is_part_of_layout() {
        let v4 = Address::parse("0.0.0.0").unwrap();
        let v6 = Address::parse("::").unwrap();
        assert_ne!(v4.stable_hash(), v6.stable_hash());
    }

    #[test]
    fn test_three_matches_flow_prefix_layout() {
        let endpoint = Endpoint::parse("10.0.0.1", 40000).unwrap();
        let three = ProtoEndpoint::new(UDP, endpoint);

        let mut hasher = Xxh3::new();
        hasher.update(&[UDP]);
        endpoint.write_key(&mut hasher);
        assert_eq!(three.stable_hash(), hasher.digest());
    }
}
