//! IANA protocol numbers for the protocol tag of flow keys.
//!
//! Flow keys carry the raw 8-bit tag, so values outside this list are valid.

pub const ICMP: u8 = 1;
pub const TCP: u8 = 6;
pub const UDP: u8 = 17;
pub const ICMPV6: u8 = 58;
pub const SCTP: u8 = 132;

/// Short name of a well-known protocol, for log lines.
pub fn name(protocol: u8) -> Option<&'static str> {
    match protocol {
        ICMP => Some("icmp"),
        TCP => Some("tcp"),
        UDP => Some("udp"),
        ICMPV6 => Some("icmpv6"),
        SCTP => Some("sctp"),
        _ => None,
    }
}

/// Inverse of [`name`], case-insensitive.
pub fn by_name(text: &str) -> Option<u8> {
    [ICMP, TCP, UDP, ICMPV6, SCTP]
        .into_iter()
        .find(|&protocol| name(protocol).is_some_and(|n| n.eq_ignore_ascii_case(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(name(TCP), Some("tcp"));
        assert_eq!(name(UDP), Some("udp"));
        assert_eq!(name(250), None);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("TCP"), Some(TCP));
        assert_eq!(by_name("icmpv6"), Some(ICMPV6));
        assert_eq!(by_name("gre"), None);
    }
}
