//! IP address and CIDR rules
//!
//! Addresses are parsed with the standard library. An IPv4-mapped IPv6
//! address (`::ffff:10.0.0.1`) counts as IPv4, not IPv6.

use std::net::IpAddr;

fn parse_ip(value: &str) -> Option<IpAddr> {
    value.parse().ok()
}

fn is_v4_like(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(_) => true,
        IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some(),
    }
}

/// Accepts `address/prefix` where the prefix is decimal and fits the family.
fn parses_as_cidr(value: &str) -> bool {
    let Some((addr, prefix)) = value.split_once('/') else {
        return false;
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Some(addr) = parse_ip(addr) else {
        return false;
    };
    let max_prefix = if addr.is_ipv4() { 32 } else { 128 };
    prefix.parse::<u32>().is_ok_and(|bits| bits <= max_prefix)
}

crate::rule! {
    /// Validates an IPv4 or IPv6 address.
    pub IsIp { value: String };
    check(self) { parse_ip(&self.value).is_some() }
    message(self) { "must be IP" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_ip(value: impl Into<String>);
}

crate::rule! {
    /// Validates an IPv4 address, including the IPv4-mapped IPv6 form.
    pub IsIpv4 { value: String };
    check(self) { parse_ip(&self.value).is_some_and(is_v4_like) }
    message(self) { "must be IPv4" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_ipv4(value: impl Into<String>);
}

crate::rule! {
    /// Validates an IPv6 address that is not IPv4-mapped.
    pub IsIpv6 { value: String };
    check(self) { parse_ip(&self.value).is_some_and(|addr| !is_v4_like(addr)) }
    message(self) { "must be IPv6" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_ipv6(value: impl Into<String>);
}

crate::rule! {
    /// Validates CIDR notation such as `10.0.0.0/8` or `2001:db8::/32`.
    pub IsCidr { value: String };
    check(self) { parses_as_cidr(&self.value) }
    message(self) { "must be CIDR" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_cidr(value: impl Into<String>);
}
