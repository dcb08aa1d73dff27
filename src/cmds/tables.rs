use crate::addr::Octets;
use crate::bit_manip::bytes_to_binary;
use crate::classful::{Applicable, ClassInfo, NetworkClass};
use crate::cmds::subnet::LABEL_COLOR;
use crate::console::writeln_in_color;
use crate::mask::{contiguous_prefix, COMMON_MASK_VALUES};


const PROPERTY_WIDTH: usize = 24;
const CLASS_COLUMN_WIDTH: usize = 18;


/// Outputs the reference tables for subnetting and classful addressing.
pub fn tables(args: &[String]) -> i32 {
    if args.len() != 2 {
        crate::usage();
        return 1;
    }

    let sections = [
        ("DDN Mask Values, Magic Numbers, and Prefixes", magic_number_table()),
        ("Key Formulas", formulas()),
        ("IP Address Classes", class_table()),
        ("Key Facts for Classes A, B, and C", key_facts_table()),
    ];

    let mut is_first = true;
    for (title, lines) in &sections {
        if !is_first {
            println!();
        }
        is_first = false;

        writeln_in_color(format!("{}:", title), Some(LABEL_COLOR));
        for line in lines {
            println!("{}", line);
        }
    }

    0
}

/// Lists, for every mask octet value with a magic number (plus 255), the magic number, the
/// binary value and the prefix length it corresponds to in each octet.
pub fn magic_number_table() -> Vec<String> {
    let rule_width = 60;
    let mut lines = vec![
        "=".repeat(rule_width),
        String::from("| Mask Value | Magic Number |  Binary  | Prefix (if in...) |"),
        String::from("|            |              |          | 2nd | 3rd | 4th   |"),
        "-".repeat(rule_width),
    ];

    for &value in COMMON_MASK_VALUES.iter().chain(&[255u8]) {
        let magic = 256 - u32::from(value);
        let prefixes: Vec<String> = (1..=3)
            .map(|octet| {
                let mut values = [0u8; 4];
                for v in values.iter_mut().take(octet) {
                    *v = 255;
                }
                values[octet] = value;
                match contiguous_prefix(&Octets::new(values)) {
                    Some(pfx) => format!("/{}", pfx),
                    None => String::from("?"),
                }
            })
            .collect();

        lines.push(format!(
            "| {:<10} | {:<12} | {} | {:<3} | {:<3} | {:<5} |",
            value, magic, bytes_to_binary(&[value]), prefixes[0], prefixes[1], prefixes[2],
        ));
    }

    lines.push("=".repeat(rule_width));
    lines
}

pub fn formulas() -> Vec<String> {
    vec![
        String::from("1. Magic Number = 256 - Mask Value"),
        String::from("2. Subnet ID = (IP value / Magic Number) x Magic Number, rounded down"),
        String::from("3. Broadcast = Subnet ID + Magic Number - 1"),
        String::from("4. First Usable = Subnet ID + 1"),
        String::from("5. Last Usable = Broadcast - 1"),
    ]
}

/// Lists the first-octet values and purposes of classes A to E.
pub fn class_table() -> Vec<String> {
    let rule = format!("+{}+{}+{}+", "-".repeat(7), "-".repeat(21), "-".repeat(36));
    let mut lines = vec![
        rule.clone(),
        format!("| {:<5} | {:<19} | {:<34} |", "Class", "First Octet Values", "Purpose"),
        rule.clone(),
    ];

    let lettered = NetworkClass::ALL.iter()
        .map(|c| c.info())
        .filter(|i| !matches!(i.class, NetworkClass::ReservedZero | NetworkClass::ReservedLoopback));
    for info in lettered {
        lines.push(format!(
            "| {:<5} | {:<19} | {:<34} |",
            info.class.to_string(), format!("{}-{}", info.first_octet_min, info.first_octet_max), info.purpose,
        ));
    }

    lines.push(rule);
    lines.push(String::from("Reserved: 0.x.x.x and 127.x.x.x"));
    lines
}

fn column<F: Fn(&ClassInfo) -> String>(infos: &[&ClassInfo], f: F) -> Vec<String> {
    infos.iter()
        .map(|&info| f(info))
        .collect()
}

fn key_facts_row(property: &str, values: &[String]) -> String {
    let mut row = format!("| {:<width$} |", property, width = PROPERTY_WIDTH);
    for value in values {
        row.push_str(&format!(" {:<width$} |", value, width = CLASS_COLUMN_WIDTH));
    }
    row
}

/// Compares the key properties of classes A, B and C.
pub fn key_facts_table() -> Vec<String> {
    let classes = [NetworkClass::A, NetworkClass::B, NetworkClass::C];
    let infos: Vec<&ClassInfo> = classes.iter().map(|c| c.info()).collect();

    let rule = format!(
        "+{}+{}+{}+{}+",
        "-".repeat(PROPERTY_WIDTH + 2), "-".repeat(CLASS_COLUMN_WIDTH + 2),
        "-".repeat(CLASS_COLUMN_WIDTH + 2), "-".repeat(CLASS_COLUMN_WIDTH + 2),
    );
    let header: Vec<String> = classes.iter().map(|c| format!("Class {}", c)).collect();

    let mut lines = vec![
        rule.clone(),
        key_facts_row("Property", &header),
        rule.clone(),
    ];

    lines.push(key_facts_row(
        "First octet range",
        &column(&infos, |i| format!("{}-{}", i.first_octet_min, i.first_octet_max)),
    ));

    // the network number range is too wide for one row
    let (range_starts, range_ends): (Vec<String>, Vec<String>) = infos.iter()
        .map(|info| match info.valid_network_range.split_once('-') {
            Some((start, end)) => (String::from(start), format!("to {}", end)),
            None => (String::from(info.valid_network_range), String::new()),
        })
        .unzip();
    lines.push(key_facts_row("Valid network numbers", &range_starts));
    lines.push(key_facts_row("", &range_ends));

    lines.push(key_facts_row(
        "Total networks",
        &column(&infos, |i| Applicable::from(i.total_networks).to_string()),
    ));
    lines.push(key_facts_row(
        "Hosts per network",
        &column(&infos, |i| Applicable::from(i.hosts_per_network).to_string()),
    ));
    lines.push(key_facts_row(
        "Network octets (bits)",
        &column(&infos, |i| format!("{} ({})", Applicable::from(i.network_octets), Applicable::from(i.network_bits))),
    ));
    lines.push(key_facts_row(
        "Host octets (bits)",
        &column(&infos, |i| format!("{} ({})", Applicable::from(i.host_octets), Applicable::from(i.host_bits))),
    ));
    lines.push(key_facts_row(
        "Default mask",
        &column(&infos, |i| Applicable::from(i.default_mask).to_string()),
    ));

    lines.push(rule);
    lines
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_magic_number_table() {
        let lines = magic_number_table();
        assert_eq!(4 + 8 + 1, lines.len());
        assert!(lines.contains(&String::from("| 128        | 128          | 10000000 | /9  | /17 | /25   |")));
        assert!(lines.contains(&String::from("| 192        | 64           | 11000000 | /10 | /18 | /26   |")));
        assert!(lines.contains(&String::from("| 254        | 2            | 11111110 | /15 | /23 | /31   |")));
        assert!(lines.contains(&String::from("| 255        | 1            | 11111111 | /16 | /24 | /32   |")));
        for line in &lines {
            assert_eq!(60, line.len(), "{:?}", line);
        }
    }

    #[test]
    fn test_class_table() {
        let lines = class_table();
        assert!(lines.contains(&format!("| {:<5} | {:<19} | {:<34} |", "B", "128-191", "Unicast (medium-sized networks)")));
        assert!(lines.contains(&format!("| {:<5} | {:<19} | {:<34} |", "E", "240-255", "Reserved (formerly experimental)")));
        assert!(!lines.iter().any(|l| l.contains("127-127")));
        assert_eq!("Reserved: 0.x.x.x and 127.x.x.x", lines[lines.len() - 1]);
    }

    #[test]
    fn test_key_facts_table() {
        let lines = key_facts_table();
        let width = lines[0].len();
        for line in &lines {
            assert_eq!(width, line.len(), "{:?}", line);
        }

        let row = |property: &str| -> String {
            lines.iter()
                .find(|l| l.starts_with(&format!("| {:<24} |", property)))
                .unwrap()
                .clone()
        };
        assert!(row("Hosts per network").contains(" 16777214 "));
        assert!(row("Hosts per network").contains(" 65534 "));
        assert!(row("Default mask").contains(" 255.255.255.0 "));
        assert!(row("Network octets (bits)").contains(" 2 (16) "));
        assert!(row("Valid network numbers").contains(" 128.0.0.0 "));
        assert!(lines.iter().any(|l| l.contains(" to 223.255.255.0 ")));
    }
}
