//! Source/destination endpoint pairs.

use std::fmt;

use crate::endpoint::Endpoint;

/// An ordered (source, destination) pair of endpoints.
///
/// `FlowPair::new(a, b) != FlowPair::new(b, a)` unless `a == b`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct FlowPair {
    source: Endpoint,
    destination: Endpoint,
}

impl FlowPair {
    pub fn new(source: impl Into<Endpoint>, destination: impl Into<Endpoint>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub const fn source(&self) -> Endpoint {
        self.source
    }

    pub const fn destination(&self) -> Endpoint {
        self.destination
    }

    /// The same pair seen from the other side.
    pub const fn reverse(&self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
        }
    }

    /// The orientation with the smaller endpoint as source.
    ///
    /// `p.canonical() == p.reverse().canonical()` for every pair.
    pub fn canonical(&self) -> Self {
        if self.destination < self.source {
            self.reverse()
        } else {
            *self
        }
    }
}

impl fmt::Display for FlowPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.source, self.destination)
    }
}
