use crate::terminal::colors;
use colored::*;
use fleetscope_common::network::range::{AddressRange, CidrBlock};
use fleetscope_common::network::target::TargetSpec;
use std::net::Ipv4Addr;

type Detail = (String, ColoredString);

pub fn verdict(valid: bool) -> ColoredString {
    if valid {
        "valid".color(colors::VALID).bold()
    } else {
        "invalid".color(colors::INVALID).bold()
    }
}

pub fn ipv4(addr: Ipv4Addr) -> ColoredString {
    addr.to_string().color(colors::IPV4_ADDR)
}

pub fn count(count: u64) -> ColoredString {
    count.to_string().color(colors::COUNT).bold()
}

pub fn cidr(block: &CidrBlock) -> ColoredString {
    let address: ColoredString = ipv4(block.network());
    let prefix: ColoredString = block.prefix().to_string().color(colors::IPV4_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

pub fn range_to_detail(range: &AddressRange) -> Vec<Detail> {
    vec![
        ("Start".to_string(), ipv4(range.start())),
        ("End".to_string(), ipv4(range.end())),
    ]
}

pub fn cidr_to_detail(block: &CidrBlock) -> Vec<Detail> {
    vec![
        ("Block".to_string(), cidr(block)),
        ("Netmask".to_string(), ipv4(block.netmask())),
        ("Network".to_string(), ipv4(block.network())),
        ("Broadcast".to_string(), ipv4(block.broadcast())),
    ]
}

/// Key/value rows shown under a count preview.
pub fn target_to_detail(spec: &TargetSpec) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Kind".to_string(), spec.kind().normal())];

    match spec {
        TargetSpec::SingleIp { addr } => {
            details.push(("Address".to_string(), ipv4(*addr)));
        }
        TargetSpec::ExplicitList { addrs } => {
            if let (Some(first), Some(last)) = (addrs.first(), addrs.last()) {
                details.push(("First".to_string(), ipv4(*first)));
                details.push(("Last".to_string(), ipv4(*last)));
            }
        }
        TargetSpec::ShortRange { range } | TargetSpec::FullRange { range } => {
            details.extend(range_to_detail(range));
        }
        TargetSpec::Cidr { block } => {
            details.extend(cidr_to_detail(block));
        }
    }

    if let Some(total) = spec.count() {
        details.push(("Count".to_string(), count(total)));
    }

    details
}
