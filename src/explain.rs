//! Step-by-step explanations of a subnet calculation.
//!
//! Nothing here computes anything new; the lines only describe how the values passed in follow from
//! the address and mask.

use crate::addr::{Octets, OCTET_COUNT};
use crate::bit_manip::group_octets;
use crate::mask::{interesting_octet, magic_number, octet_role, prefix_length, OctetRole};
use crate::net::{usable_range, Method};


/// Explains how `subnet_id` and `broadcast` are derived from `addr` and `subnet_mask` with the given
/// method, followed by the final results.
pub fn explain(
    addr: Octets,
    subnet_mask: Octets,
    subnet_id: Octets,
    broadcast: Octets,
    method: Method,
) -> Vec<String> {
    let mut lines = match method {
        Method::Decimal => explain_decimal(addr, subnet_mask, subnet_id, broadcast),
        Method::Binary => explain_binary(addr, subnet_mask, subnet_id, broadcast),
    };

    lines.push(String::new());
    lines.push(String::from("Final results:"));
    lines.push(format!("  Subnet ID:    {}", subnet_id));
    lines.push(format!("  Broadcast:    {}", broadcast));
    match usable_range(subnet_id, broadcast) {
        Some((first, last)) => {
            lines.push(format!("  First usable: {}", first));
            lines.push(format!("  Last usable:  {}", last));
        },
        None => {
            lines.push(String::from("  no usable hosts"));
        },
    }
    lines
}

fn explain_decimal(addr: Octets, subnet_mask: Octets, subnet_id: Octets, broadcast: Octets) -> Vec<String> {
    let mut lines = Vec::new();

    let interesting = match interesting_octet(&subnet_mask) {
        Some(i) => i,
        None => {
            lines.push(String::from("This is an easy mask (only 255s and 0s):"));
            lines.push(String::from("  mask 255: copy the address octet"));
            lines.push(String::from("  mask 0: subnet ID 0, broadcast 255"));
            for i in 0..OCTET_COUNT {
                if subnet_mask[i] == 255 {
                    lines.push(format!("  Octet #{}: mask 255 => copy {} to subnet ID and broadcast", i + 1, addr[i]));
                } else {
                    lines.push(format!("  Octet #{}: mask 0 => subnet ID 0, broadcast 255", i + 1));
                }
            }
            return lines;
        },
    };

    let magic = magic_number(subnet_mask[interesting]);
    lines.push(format!("This mask has an interesting octet (#{}):", interesting + 1));
    lines.push(format!("  Magic number = 256 - {} = {}", subnet_mask[interesting], magic));
    let multiples: Vec<String> = (0..=255u32)
        .step_by(magic as usize)
        .map(|m| m.to_string())
        .collect();
    lines.push(format!("  Multiples of {}: {}", magic, multiples.join(", ")));

    lines.push(String::new());
    lines.push(String::from("Subnet ID:"));
    for i in 0..OCTET_COUNT {
        match octet_role(subnet_mask[i]) {
            OctetRole::Network => {
                lines.push(format!("  Octet #{}: mask 255 => copy address octet {}", i + 1, addr[i]));
            },
            OctetRole::Host => {
                lines.push(format!("  Octet #{}: mask 0 => 0", i + 1));
            },
            OctetRole::Interesting(m) => {
                lines.push(format!("  Octet #{}: interesting octet, address {}, mask {}", i + 1, addr[i], subnet_mask[i]));
                lines.push(format!("    largest multiple of {} not above {} => {}", m, addr[i], subnet_id[i]));
            },
        }
    }

    lines.push(String::new());
    lines.push(String::from("Broadcast address:"));
    for i in 0..OCTET_COUNT {
        match octet_role(subnet_mask[i]) {
            OctetRole::Network => {
                lines.push(format!("  Octet #{}: mask 255 => copy subnet ID octet {}", i + 1, subnet_id[i]));
            },
            OctetRole::Host => {
                lines.push(format!("  Octet #{}: mask 0 => 255", i + 1));
            },
            OctetRole::Interesting(m) => {
                lines.push(format!("  Octet #{}: interesting octet", i + 1));
                lines.push(format!("    subnet ID + magic number - 1 = {} + {} - 1 => {}", subnet_id[i], m, broadcast[i]));
            },
        }
    }

    lines
}

fn explain_binary(addr: Octets, subnet_mask: Octets, subnet_id: Octets, broadcast: Octets) -> Vec<String> {
    vec![
        String::from("Binary method:"),
        format!("  The mask has a prefix length of /{}", prefix_length(&subnet_mask)),
        String::from("  Subnet ID: copy prefix bits, set host bits to 0"),
        String::from("  Broadcast: copy prefix bits, set host bits to 1"),
        String::new(),
        format!("Address (binary):   {}", addr.to_dotted_binary()),
        format!("Mask (binary):      {}", subnet_mask.to_dotted_binary()),
        format!("Subnet ID (binary): {}", subnet_id.to_dotted_binary()),
        format!("Broadcast (binary): {}", broadcast.to_dotted_binary()),
    ]
}

/// Lays out the bits of the address, mask, subnet ID and broadcast address underneath a row that
/// marks each bit position as prefix (`P`) or host (`H`).
pub fn binary_breakdown(addr: Octets, subnet_mask: Octets, subnet_id: Octets, broadcast: Octets) -> Vec<String> {
    let prefix = prefix_length(&subnet_mask) as usize;
    let structure: String = (0..32)
        .map(|i| if i < prefix { 'P' } else { 'H' })
        .collect();

    vec![
        format!("Prefix length:   /{}", prefix),
        format!("Structure:       {}", group_octets(&structure)),
        format!("Mask:            {}", subnet_mask.to_dotted_binary()),
        format!("Address:         {}", addr.to_dotted_binary()),
        String::from("Subnet ID (copy prefix bits, host bits to 0):"),
        format!("                 {}", subnet_id.to_dotted_binary()),
        String::from("Broadcast (copy prefix bits, host bits to 1):"),
        format!("                 {}", broadcast.to_dotted_binary()),
    ]
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::net::SubnetResult;

    fn o(s: &str) -> Octets {
        s.parse().unwrap()
    }

    fn explain_calculated(addr: &str, mask: &str, method: Method) -> Vec<String> {
        let result = SubnetResult::calculate(o(addr), o(mask), method);
        explain(o(addr), o(mask), result.subnet_id(), result.broadcast(), method)
    }

    #[test]
    fn test_explain_decimal_difficult_mask() {
        let lines = explain_calculated("172.16.150.41", "255.255.192.0", Method::Decimal);

        assert_eq!("This mask has an interesting octet (#3):", lines[0]);
        assert_eq!("  Magic number = 256 - 192 = 64", lines[1]);
        assert_eq!("  Multiples of 64: 0, 64, 128, 192", lines[2]);
        assert!(lines.contains(&String::from("  Octet #1: mask 255 => copy address octet 172")));
        assert!(lines.contains(&String::from("    largest multiple of 64 not above 150 => 128")));
        assert!(lines.contains(&String::from("  Octet #4: mask 0 => 255")));
        assert!(lines.contains(&String::from("    subnet ID + magic number - 1 = 128 + 64 - 1 => 191")));
        assert!(lines.contains(&String::from("  Subnet ID:    172.16.128.0")));
        assert!(lines.contains(&String::from("  Broadcast:    172.16.191.255")));
        assert!(lines.contains(&String::from("  First usable: 172.16.128.1")));
        assert_eq!("  Last usable:  172.16.191.254", lines[lines.len() - 1]);
    }

    #[test]
    fn test_explain_decimal_easy_mask() {
        let lines = explain_calculated("10.7.99.133", "255.255.255.0", Method::Decimal);

        assert_eq!("This is an easy mask (only 255s and 0s):", lines[0]);
        assert!(lines.contains(&String::from("  Octet #3: mask 255 => copy 99 to subnet ID and broadcast")));
        assert!(lines.contains(&String::from("  Octet #4: mask 0 => subnet ID 0, broadcast 255")));
        assert!(!lines.iter().any(|l| l.contains("Magic number")));
    }

    #[test]
    fn test_explain_binary() {
        let lines = explain_calculated("192.168.5.77", "255.255.255.224", Method::Binary);

        assert_eq!("Binary method:", lines[0]);
        assert_eq!("  The mask has a prefix length of /27", lines[1]);
        assert!(lines.contains(&String::from("Address (binary):   11000000.10101000.00000101.01001101")));
        assert!(lines.contains(&String::from("Subnet ID (binary): 11000000.10101000.00000101.01000000")));
        assert!(lines.contains(&String::from("Broadcast (binary): 11000000.10101000.00000101.01011111")));
        assert!(lines.contains(&String::from("  Last usable:  192.168.5.94")));
    }

    #[test]
    fn test_explain_without_hosts() {
        let lines = explain_calculated("192.168.44.97", "255.255.255.254", Method::Decimal);
        assert_eq!("  no usable hosts", lines[lines.len() - 1]);
    }

    #[test]
    fn test_binary_breakdown() {
        let result = SubnetResult::calculate(o("10.1.4.0"), o("255.255.254.0"), Method::Binary);
        let lines = binary_breakdown(o("10.1.4.0"), o("255.255.254.0"), result.subnet_id(), result.broadcast());

        assert_eq!("Prefix length:   /23", lines[0]);
        assert_eq!("Structure:       PPPPPPPP.PPPPPPPP.PPPPPPPH.HHHHHHHH", lines[1]);
        assert_eq!("Mask:            11111111.11111111.11111110.00000000", lines[2]);
        assert_eq!("                 00001010.00000001.00000101.11111111", lines[7]);
    }
}
