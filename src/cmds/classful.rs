use crate::addr::Octets;
use crate::classful::{Applicable, ClassfulSummary};
use crate::cmds::subnet::{IP_ADDRESS_COLOR, LABEL_COLOR};
use crate::console::{Color, write_in_color};


const CLASS_COLOR: Color = Color::Magenta;
const LABEL_WIDTH: isize = 31;


/// Shows what the classful addressing rules say about each `IPADDRESS` argument.
pub fn classful(args: &[String]) -> i32 {
    if args.len() < 3 {
        crate::usage();
        return 1;
    }

    let mut addrs = Vec::with_capacity(args.len() - 2);
    for arg in &args[2..] {
        match arg.parse::<Octets>() {
            Ok(a) => addrs.push(a),
            Err(e) => {
                eprintln!("failed to parse address {:?}: {}", arg, e);
                return 1;
            },
        }
    }

    let mut is_first = true;
    for addr in addrs {
        if !is_first {
            println!();
        }
        is_first = false;

        let summary = ClassfulSummary::resolve(addr);
        for (label, value) in summary_rows(&summary) {
            write_in_color(label, Some(LABEL_COLOR), LABEL_WIDTH);
            let color = match label {
                "Class:" => CLASS_COLOR,
                _ => IP_ADDRESS_COLOR,
            };
            write_in_color(value, Some(color), 0);
            println!();
        }
        if !summary.class.is_unicast() {
            println!("This is a special class IP address, so standard network/host concepts do not apply.");
        }
    }

    0
}

fn octets_and_bits(octets: Option<usize>, bits: Option<u32>) -> Applicable<String> {
    match (octets, bits) {
        (Some(o), Some(b)) => Applicable::Value(format!("{} ({} bits)", o, b)),
        _ => Applicable::NotApplicable,
    }
}

/// Returns the labelled values describing an address under classful rules.
pub(crate) fn summary_rows(summary: &ClassfulSummary) -> Vec<(&'static str, String)> {
    let info = summary.info;
    let usable_range = summary.usable_range
        .map(|(first, last)| format!("{} to {}", first, last));

    vec![
        ("IP Address:", summary.addr.to_string()),
        ("Class:", summary.class.to_string()),
        ("Purpose:", String::from(info.purpose)),
        ("Network Octets:", octets_and_bits(info.network_octets, info.network_bits).to_string()),
        ("Host Octets:", octets_and_bits(info.host_octets, info.host_bits).to_string()),
        ("Network ID:", summary.network_id.to_string()),
        ("Broadcast Address:", summary.broadcast.to_string()),
        ("Usable IP Range:", usable_range.to_string()),
        ("Default Subnet Mask:", summary.default_mask.to_string()),
        ("Valid Network Range:", String::from(info.valid_network_range)),
        ("Total Networks in this Class:", Applicable::from(info.total_networks).to_string()),
        ("Hosts per Network:", Applicable::from(info.hosts_per_network).to_string()),
    ]
}


#[cfg(test)]
mod test {
    use super::*;

    fn rows_for(addr: &str) -> Vec<(&'static str, String)> {
        summary_rows(&ClassfulSummary::resolve(addr.parse().unwrap()))
    }

    fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_class_a_rows() {
        let rows = rows_for("10.7.99.133");
        assert_eq!("A", value(&rows, "Class:"));
        assert_eq!("Unicast (large networks)", value(&rows, "Purpose:"));
        assert_eq!("1 (8 bits)", value(&rows, "Network Octets:"));
        assert_eq!("3 (24 bits)", value(&rows, "Host Octets:"));
        assert_eq!("10.0.0.0", value(&rows, "Network ID:"));
        assert_eq!("10.255.255.255", value(&rows, "Broadcast Address:"));
        assert_eq!("10.0.0.1 to 10.255.255.254", value(&rows, "Usable IP Range:"));
        assert_eq!("255.0.0.0", value(&rows, "Default Subnet Mask:"));
        assert_eq!("126", value(&rows, "Total Networks in this Class:"));
        assert_eq!("16777214", value(&rows, "Hosts per Network:"));
    }

    #[test]
    fn test_loopback_rows() {
        let rows = rows_for("127.0.0.5");
        assert_eq!("Reserved (127.x.x.x)", value(&rows, "Class:"));
        for label in &["Network Octets:", "Network ID:", "Broadcast Address:", "Usable IP Range:", "Default Subnet Mask:"] {
            assert_eq!("N/A - Special class", value(&rows, label), "{}", label);
        }
    }
}
