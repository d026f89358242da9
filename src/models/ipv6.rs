//! IPv6 netmask arithmetic on native `u128` addresses.
//!
//! Mirrors [`super::ipv4`] at full 128-bit width. Nothing here ever narrows
//! an IPv6 value to a smaller integer.

use crate::error::CidrError;
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert a CIDR prefix length to an IPv6 netmask as u128.
pub fn get_cidr_mask_v6(len: u8) -> Result<u128, CidrError> {
    if len > MAX_LENGTH_V6 {
        return Err(CidrError::PrefixTooLong {
            prefix: len,
            max: MAX_LENGTH_V6,
        });
    }
    // A /0 shifts by the full width, which `<<` refuses.
    Ok(u128::MAX
        .checked_shl(u32::from(MAX_LENGTH_V6 - len))
        .unwrap_or(0))
}

/// Get the network address for a given IPv6 address and prefix length.
pub fn cut_addr_v6(addr: Ipv6Addr, len: u8) -> Result<u128, CidrError> {
    Ok(u128::from(addr) & get_cidr_mask_v6(len)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask_v6() {
        assert_eq!(get_cidr_mask_v6(0).unwrap(), 0);
        assert_eq!(get_cidr_mask_v6(1).unwrap(), 1u128 << 127);
        assert_eq!(
            get_cidr_mask_v6(32).unwrap(),
            0xFFFF_FFFF_0000_0000_0000_0000_0000_0000
        );
        assert_eq!(
            get_cidr_mask_v6(64).unwrap(),
            0xFFFF_FFFF_FFFF_FFFF_0000_0000_0000_0000
        );
        assert_eq!(get_cidr_mask_v6(128).unwrap(), u128::MAX);
        assert!(get_cidr_mask_v6(129).is_err());
    }

    #[test]
    fn test_cut_addr_v6() {
        let ip: Ipv6Addr = "2001:db8:1:2::5".parse().unwrap();
        let net: Ipv6Addr = "2001:db8::".parse().unwrap();
        assert_eq!(cut_addr_v6(ip, 32).unwrap(), u128::from(net));
        assert_eq!(cut_addr_v6(ip, 128).unwrap(), u128::from(ip));
        assert_eq!(cut_addr_v6(ip, 0).unwrap(), 0);
    }

    #[test]
    fn test_low_bits_survive_masking() {
        // bits below 2^32 must not be lost to a narrowing conversion
        let ip: Ipv6Addr = "2001:db8::ffff:ffff".parse().unwrap();
        assert_eq!(cut_addr_v6(ip, 127).unwrap() & 0xFFFF_FFFF, 0xFFFF_FFFE);
    }
}
