mod addr;
mod bit_manip;
mod classful;
mod cmds;
mod console;
mod explain;
mod mask;
mod net;
mod visual;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::net::Method;


pub(crate) fn usage() {
    eprintln!("Usage: subnetcalc IPADDRESS/SUBNET...");
    eprintln!("       subnetcalc -b|--binary IPADDRESS/SUBNET...");
    eprintln!("       subnetcalc -x|--explain IPADDRESS/SUBNET...");
    eprintln!("       subnetcalc -X|--explain-binary IPADDRESS/SUBNET...");
    eprintln!("       subnetcalc -v|--visualize [MASKVALUE|IPADDRESS/SUBNET]...");
    eprintln!("       subnetcalc -c|--classful IPADDRESS...");
    eprintln!("       subnetcalc -t|--tables");
    eprintln!();
    eprintln!("SUBNET is one of: SUBNETMASK");
    eprintln!("                  CIDRPREFIX");
    eprintln!();
    eprintln!("Without arguments, --visualize shows every common mask value.");
}

fn init_logging() {
    // diagnostics go to stderr so they never mix with the calculation output
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("default log filter is valid");
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn do_main() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        usage();
        return 1;
    }

    if args[1] == "-b" || args[1] == "--binary" {
        crate::cmds::subnet::binary(&args)
    } else if args[1] == "-x" || args[1] == "--explain" {
        crate::cmds::explain::explain(&args, Method::Decimal)
    } else if args[1] == "-X" || args[1] == "--explain-binary" {
        crate::cmds::explain::explain(&args, Method::Binary)
    } else if args[1] == "-v" || args[1] == "--visualize" {
        crate::cmds::visualize::visualize(&args)
    } else if args[1] == "-c" || args[1] == "--classful" {
        crate::cmds::classful::classful(&args)
    } else if args[1] == "-t" || args[1] == "--tables" {
        crate::cmds::tables::tables(&args)
    } else if args[1] == "--help" {
        usage();
        0
    } else {
        crate::cmds::subnet::subnet(&args)
    }
}

fn main() {
    init_logging();
    std::process::exit(do_main());
}
