//! Non-routable address classification.
//!
//! An address is rejected before any cache or network access when it is not a
//! valid IP literal, or when it falls inside one of the [`ReservedBlocks`].

mod blocks;

use std::net::IpAddr;

pub use blocks::{ReservedBlocks, RESERVED_IPV4_CIDRS, RESERVED_IPV6_CIDRS};

/// Returns true if `text` must not be looked up.
///
/// Anything that does not parse as an IPv4 or IPv6 literal is treated as
/// non-routable.
pub fn is_non_routable(text: &str, blocks: &ReservedBlocks) -> bool {
    match text.parse::<IpAddr>() {
        Ok(addr) => blocks.contains(addr),
        Err(_) => true,
    }
}
