use crate::addr::{Octets, OCTET_COUNT};
use crate::bit_manip::bytes_to_binary;
use crate::cmds::{NetworkSpec, parse_netspec_args};
use crate::console::{Color, write_in_color, writeln_in_color};
use crate::explain::binary_breakdown;
use crate::mask::{contiguous_prefix, interesting_octet, magic_number};
use crate::net::{address_count, host_count, Method, SubnetResult};


pub(crate) const LABEL_COLOR: Color = Color::White;
pub(crate) const IP_ADDRESS_COLOR: Color = Color::Blue;
pub(crate) const HOST_BITS_COLOR: Color = Color::Yellow;
pub(crate) const NET_BITS_COLOR: Color = Color::Green;
pub(crate) const MASK_BITS_COLOR: Color = Color::Red;
pub(crate) const ADDR_SEP_COLOR: Color = Color::DarkGray;

const LABEL_WIDTH: isize = 14;
const ADDRESS_WIDTH: isize = 21;


/// Shows the subnet of each `IPADDRESS/SUBNET` argument calculated with the decimal method.
pub fn subnet(args: &[String]) -> i32 {
    show_subnets(&args[1..], Method::Decimal)
}

/// Shows the subnet of each `IPADDRESS/SUBNET` argument calculated with the binary method,
/// including the address bits and a bit-by-bit breakdown.
pub fn binary(args: &[String]) -> i32 {
    if args.len() < 3 {
        crate::usage();
        return 1;
    }
    show_subnets(&args[2..], Method::Binary)
}

fn show_subnets(spec_args: &[String], method: Method) -> i32 {
    let specs = match parse_netspec_args(spec_args) {
        Some(s) => s,
        None => return 1,
    };

    let mut is_first = true;
    for spec in &specs {
        if !is_first {
            println!();
        }
        is_first = false;

        output_subnet(spec, method);
    }

    0
}

fn output_initial_columns(label: &str, address: &str) {
    write_in_color(label, Some(LABEL_COLOR), LABEL_WIDTH);
    write_in_color(address, Some(IP_ADDRESS_COLOR), ADDRESS_WIDTH);
}

/// Outputs the mask as dotted decimal, followed by its CIDR prefix if it is contiguous.
pub(crate) fn mask_with_prefix(subnet_mask: Octets) -> String {
    match contiguous_prefix(&subnet_mask) {
        Some(pfx) => format!("{} = {}", subnet_mask, pfx),
        None => subnet_mask.to_string(),
    }
}

fn output_subnet(spec: &NetworkSpec, method: Method) {
    let result = SubnetResult::calculate(spec.addr, spec.subnet_mask, method);
    let with_bits = result.method() == Method::Binary;

    let output_row = |label: &str, addr: Octets, mask: Option<Octets>, color: Option<Color>| {
        output_initial_columns(label, &addr.to_string());
        if with_bits {
            output_binary_address(addr, mask, color);
        }
        println!();
    };

    output_row("Address:", spec.addr, Some(spec.subnet_mask), None);

    output_initial_columns("Netmask:", &mask_with_prefix(spec.subnet_mask));
    if with_bits {
        output_binary_address(spec.subnet_mask, None, Some(MASK_BITS_COLOR));
    }
    println!();

    write_in_color("Interesting:", Some(LABEL_COLOR), LABEL_WIDTH);
    match interesting_octet(&spec.subnet_mask) {
        Some(i) => {
            let mask_octet = spec.subnet_mask[i];
            println!("octet #{} (mask {}, magic number {})", i + 1, mask_octet, magic_number(mask_octet));
        },
        None => {
            println!("none (easy mask)");
        },
    }

    write_in_color("Method:", Some(LABEL_COLOR), LABEL_WIDTH);
    println!("{}", result.method());

    writeln_in_color("=>", Some(LABEL_COLOR));

    output_row("Subnet ID:", result.subnet_id(), Some(spec.subnet_mask), None);

    match result.usable_range() {
        Some((first, last)) => {
            output_row("First usable:", first, None, None);
            output_row("Last usable:", last, None, None);
        },
        None => {
            writeln_in_color("no usable hosts", Some(LABEL_COLOR));
        },
    }

    output_row("Broadcast:", result.broadcast(), Some(spec.subnet_mask), None);

    if let Some(count) = address_count(&spec.subnet_mask) {
        output_initial_columns("Addresses:", &count.to_string());
        println!();
    }
    match host_count(&spec.subnet_mask) {
        Some(0) => writeln_in_color("no hosts/net", Some(LABEL_COLOR)),
        Some(count) => {
            output_initial_columns("Hosts/Net:", &count.to_string());
            println!();
        },
        None => writeln_in_color("non-contiguous mask; no host count", Some(LABEL_COLOR)),
    }

    if with_bits {
        println!();
        let breakdown = binary_breakdown(spec.addr, spec.subnet_mask, result.subnet_id(), result.broadcast());
        for line in &breakdown {
            println!("{}", line);
        }
    }
}

/// Outputs the address in binary. If a mask is given, bits under the mask are colored as network
/// bits and the rest as host bits.
pub(crate) fn output_binary_address(addr: Octets, subnet_mask: Option<Octets>, override_color: Option<Color>) {
    let addr_bytes = addr.values();
    let mask_bytes = subnet_mask.map(|m| m.values());

    for i in 0..OCTET_COUNT {
        let bits = bytes_to_binary(&[addr_bytes[i]]);

        if override_color.is_some() {
            // simply output the address
            write_in_color(bits, override_color, 0);
        } else if let Some(mb) = &mask_bytes {
            // we must differentiate
            let mask_bits = bytes_to_binary(&[mb[i]]);
            for (bit, mask_bit) in bits.chars().zip(mask_bits.chars()) {
                let color = if mask_bit == '1' {
                    NET_BITS_COLOR
                } else {
                    HOST_BITS_COLOR
                };
                write_in_color(&String::from(bit), Some(color), 0);
            }
        } else {
            write_in_color(bits, Some(HOST_BITS_COLOR), 0);
        }

        if i < OCTET_COUNT - 1 {
            // add separator (dot)
            write_in_color(".", Some(ADDR_SEP_COLOR), 0);
        }
    }
}
