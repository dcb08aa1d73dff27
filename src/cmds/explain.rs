use crate::cmds::parse_netspec_args;
use crate::cmds::subnet::{LABEL_COLOR, mask_with_prefix};
use crate::console::writeln_in_color;
use crate::explain::explain as explain_steps;
use crate::net::{Method, SubnetResult};


/// Explains, step by step, how the subnet of each `IPADDRESS/SUBNET` argument is calculated.
pub fn explain(args: &[String], method: Method) -> i32 {
    if args.len() < 3 {
        crate::usage();
        return 1;
    }

    let specs = match parse_netspec_args(&args[2..]) {
        Some(s) => s,
        None => return 1,
    };

    let mut is_first = true;
    for spec in &specs {
        if !is_first {
            println!();
        }
        is_first = false;

        let result = SubnetResult::calculate(spec.addr, spec.subnet_mask, method);

        writeln_in_color(
            format!("{} with mask {} ({} method)", spec.addr, mask_with_prefix(spec.subnet_mask), method),
            Some(LABEL_COLOR),
        );
        println!();

        let steps = explain_steps(spec.addr, spec.subnet_mask, result.subnet_id(), result.broadcast(), method);
        for line in &steps {
            if line.ends_with(':') && !line.starts_with(' ') {
                // section heading
                writeln_in_color(line, Some(LABEL_COLOR));
            } else {
                println!("{}", line);
            }
        }
    }

    0
}
