//! Directional flow keys.
//!
//! - [`FlowPair`]: source and destination endpoints
//! - [`Flow`]: a pair plus a protocol tag, the classic 5-tuple
//!
//! Both are directional. Use `reverse()` to get the reply-direction key and
//! `canonical()` for lookups that must not care about direction.

pub mod key;
pub mod pair;

pub use key::Flow;
pub use pair::FlowPair;
