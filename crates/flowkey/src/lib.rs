//! Flow keys for classifying network traffic.
//!
//! This crate provides small, immutable, ordered and hashable identifiers:
//! - `Address`: a v4 or v6 host address
//! - `Endpoint`: address plus port
//! - `FlowPair`: directional (source, destination) endpoint pair
//! - `Flow`: protocol plus pair, the 5-tuple
//! - `ProtoEndpoint`: protocol plus endpoint
//!
//! All of them are `Copy` and usable directly as `BTreeMap`/`HashMap` keys.

pub mod address;
pub mod endpoint;
pub mod error;
pub mod flow;
pub mod hash;
pub mod proto_endpoint;
pub mod protocol;

pub use address::{Address, InAddr};
pub use endpoint::{Endpoint, WireEndpoint};
pub use error::{Error, Result};
pub use flow::{Flow, FlowPair};
pub use hash::StableHash;
pub use proto_endpoint::ProtoEndpoint;
