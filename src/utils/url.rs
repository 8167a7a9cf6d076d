use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::debug;
use url::{Host, Url};

use crate::{error::ValidationError, types::Validation};

const LOCALHOST_NAMES: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

// checking validity of the long url
pub fn validate_url(url: &str) -> Validation {
    let result = check_url(url);
    if let Err(e) = &result {
        debug!(url = %url, error = %e, "Rejected URL");
    }
    result.into()
}

pub(crate) fn check_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::UrlRequired);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ValidationError::MissingProtocol);
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return Err(ValidationError::InvalidUrl),
    };
    let host = parsed.host().ok_or(ValidationError::InvalidUrl)?;

    let hostname = match host {
        Host::Ipv4(ip) => {
            check_address(IpAddr::V4(ip))?;
            ip.to_string()
        }
        Host::Ipv6(ip) => {
            check_address(IpAddr::V6(ip))?;
            ip.to_string()
        }
        Host::Domain(domain) => domain.to_lowercase(),
    };
    if LOCALHOST_NAMES.contains(&hostname.as_str()) {
        return Err(ValidationError::Localhost);
    }

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::UnsupportedScheme),
    }
}

fn check_address(ip: IpAddr) -> Result<(), ValidationError> {
    if is_restricted(ip) {
        Err(ValidationError::PrivateAddress)
    } else {
        Ok(())
    }
}

/// Whether `ip` is private, loopback or link-local, using the IANA
/// special-purpose registries (non-globally-reachable blocks included).
pub fn is_restricted(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => is_restricted_v4(ip),
        IpAddr::V6(ip) => is_restricted_v6(ip),
    }
}

fn is_restricted_v4(ip: Ipv4Addr) -> bool {
    let [a, b, c, d] = ip.octets();
    ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_documentation()
        || ip.is_broadcast()
        // 0.0.0.0/8
        || a == 0
        // 192.0.0.0/29 and 192.0.0.170/31
        || (a == 192 && b == 0 && c == 0 && (d < 8 || d == 170 || d == 171))
        // 198.18.0.0/15
        || (a == 198 && (b & 0xfe) == 18)
        // 240.0.0.0/4
        || a >= 240
}

fn is_restricted_v6(ip: Ipv6Addr) -> bool {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_restricted_v4(mapped);
    }
    let seg = ip.segments();
    ip.is_loopback()
        || ip.is_unspecified()
        // fc00::/7
        || (seg[0] & 0xfe00) == 0xfc00
        // fe80::/10
        || (seg[0] & 0xffc0) == 0xfe80
        // 2001::/23, Teredo included
        || (seg[0] == 0x2001 && seg[1] < 0x0200)
        // 2001:db8::/32
        || (seg[0] == 0x2001 && seg[1] == 0x0db8)
        // 100::/64
        || (seg[0] == 0x0100 && seg[1] == 0 && seg[2] == 0 && seg[3] == 0)
}
