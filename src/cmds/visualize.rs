use once_cell::sync::Lazy;
use regex::Regex;

use crate::cmds::parse_netspec;
use crate::cmds::subnet::{LABEL_COLOR, mask_with_prefix};
use crate::console::{Color, write_in_color, writeln_in_color};
use crate::mask::{COMMON_MASK_VALUES, interesting_octet, magic_number, octet_role, OctetRole};
use crate::net::{Method, SubnetResult};
use crate::visual::{LineConfig, render};


const HEADING_COLOR: Color = Color::Cyan;

static MASK_VALUE_REGEX: Lazy<Regex> = Lazy::new(||
    Regex::new("^[0-9]+$").unwrap()
);


/// Draws the number line for each mask octet value or `IPADDRESS/SUBNET` argument, or for every
/// common mask octet value if there are no arguments.
pub fn visualize(args: &[String]) -> i32 {
    let config = LineConfig::from_env();

    if args.len() < 3 {
        let mut is_first = true;
        for &mask_value in &COMMON_MASK_VALUES {
            if !is_first {
                println!();
            }
            is_first = false;

            let magic = 256 - u32::from(mask_value);
            writeln_in_color(
                format!("===== Mask value: {} (magic number: {}) =====", mask_value, magic),
                Some(HEADING_COLOR),
            );
            println!("{}", render(magic, None, &config));
        }
        return 0;
    }

    let mut is_first = true;
    for arg in &args[2..] {
        if !is_first {
            println!();
        }
        is_first = false;

        let success = if MASK_VALUE_REGEX.is_match(arg) {
            visualize_mask_value(arg, &config)
        } else {
            visualize_netspec(arg, &config)
        };
        if !success {
            return 1;
        }
    }

    0
}

fn visualize_mask_value(arg: &str, config: &LineConfig) -> bool {
    let mask_value: u8 = match arg.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("failed to parse mask value {:?}: {}", arg, e);
            return false;
        },
    };
    let magic = match octet_role(mask_value) {
        OctetRole::Interesting(m) => m,
        _ => {
            eprintln!("mask value {} divides nothing; expected a value between 1 and 254", mask_value);
            return false;
        },
    };

    writeln_in_color(
        format!("Visualization for mask value {} (magic number {}):", mask_value, magic),
        Some(HEADING_COLOR),
    );
    println!("{}", render(magic, None, config));
    true
}

fn visualize_netspec(arg: &str, config: &LineConfig) -> bool {
    let spec = match parse_netspec(arg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        },
    };

    let result = SubnetResult::calculate(spec.addr, spec.subnet_mask, Method::Decimal);

    let output_row = |label: &str, value: String| {
        write_in_color(label, Some(LABEL_COLOR), 19);
        println!("{}", value);
    };

    output_row("IP address:", spec.addr.to_string());
    output_row("Subnet mask:", mask_with_prefix(spec.subnet_mask));

    let i = match interesting_octet(&spec.subnet_mask) {
        Some(i) => i,
        None => {
            println!("This is an easy mask with no interesting octet.");
            output_row("Subnet ID:", result.subnet_id().to_string());
            output_row("Broadcast:", result.broadcast().to_string());
            return true;
        },
    };
    let magic = magic_number(spec.subnet_mask[i]);

    output_row("Interesting octet:", format!("#{} (value: {})", i + 1, spec.addr[i]));
    output_row("Magic number:", magic.to_string());
    output_row("Subnet ID:", result.subnet_id().to_string());
    output_row("Broadcast:", result.broadcast().to_string());
    println!();

    writeln_in_color(
        format!("Visualization for octet #{} with mask {}:", i + 1, spec.subnet_mask[i]),
        Some(HEADING_COLOR),
    );
    let highlight = (u32::from(result.subnet_id()[i]), u32::from(result.broadcast()[i]));
    println!("{}", render(magic, Some(highlight), config));
    true
}
