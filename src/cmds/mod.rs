pub mod classful;
pub mod explain;
pub mod subnet;
pub mod tables;
pub mod visualize;


use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::addr::{AddressParseError, BIT_COUNT, Octets};
use crate::mask::mask_from_prefix;


static WITH_SUBNET_MASK_REGEX: Lazy<Regex> = Lazy::new(||
    Regex::new("^(?P<addr>[0-9]+(?:[.][0-9]+){3})/(?P<mask>[0-9]+(?:[.][0-9]+){3})$").unwrap()
);
static WITH_CIDR_REGEX: Lazy<Regex> = Lazy::new(||
    Regex::new("^(?P<addr>[0-9]+(?:[.][0-9]+){3})/(?P<cidr>[0-9]+)$").unwrap()
);


/// An address along with the subnet mask of the network containing it, parsed from a string.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NetworkSpec {
    pub addr: Octets,
    pub subnet_mask: Octets,
}

/// An error that occurs when attempting to parse a network specification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseNetspecError {
    /// The format of the network specification was not recognized. The contained string is the
    /// argument as given.
    Unrecognized(String),

    /// The IP address could not be parsed. The contained error describes why parsing the IP address
    /// failed.
    Address(AddressParseError),

    /// The subnet mask could not be parsed. The contained error describes why parsing the mask
    /// failed.
    Mask(AddressParseError),

    /// The CIDR prefix could not be parsed. The contained error describes why parsing the prefix
    /// failed.
    CidrParse(ParseIntError),

    /// The parsed CIDR prefix is out of range. The first value is the CIDR prefix that was parsed
    /// and the second value is the maximum CIDR prefix.
    CidrRange(u32, u32),
}
impl fmt::Display for ParseNetspecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNetspecError::Unrecognized(spec)
                => write!(f, "unrecognized network specification: {:?}", spec),
            ParseNetspecError::Address(e)
                => write!(f, "failed to parse address: {}", e),
            ParseNetspecError::Mask(e)
                => write!(f, "failed to parse mask: {}", e),
            ParseNetspecError::CidrParse(e)
                => write!(f, "failed to parse CIDR prefix: {}", e),
            ParseNetspecError::CidrRange(got, max)
                => write!(f, "CIDR prefix {} is greater than the maximum ({})", got, max),
        }
    }
}
impl Error for ParseNetspecError {
}


/// Attempts to parse a single network specification (address + subnet mask or CIDR prefix).
pub fn parse_netspec(spec: &str) -> Result<NetworkSpec, ParseNetspecError> {
    if let Some(caps) = WITH_SUBNET_MASK_REGEX.captures(spec) {
        let addr_str = caps.name("addr").expect("'addr' captured").as_str();
        let mask_str = caps.name("mask").expect("'mask' captured").as_str();

        let addr: Octets = addr_str.parse()
            .map_err(|e| ParseNetspecError::Address(e))?;
        let subnet_mask: Octets = mask_str.parse()
            .map_err(|e| ParseNetspecError::Mask(e))?;

        Ok(NetworkSpec { addr, subnet_mask })
    } else if let Some(caps) = WITH_CIDR_REGEX.captures(spec) {
        let addr_str = caps.name("addr").expect("'addr' captured").as_str();
        let cidr_str = caps.name("cidr").expect("'cidr' captured").as_str();

        let addr: Octets = addr_str.parse()
            .map_err(|e| ParseNetspecError::Address(e))?;
        let cidr: u32 = cidr_str.parse()
            .map_err(|e| ParseNetspecError::CidrParse(e))?;
        let max_cidr = BIT_COUNT as u32;
        if cidr > max_cidr {
            return Err(ParseNetspecError::CidrRange(cidr, max_cidr));
        }

        Ok(NetworkSpec { addr, subnet_mask: mask_from_prefix(cidr) })
    } else {
        Err(ParseNetspecError::Unrecognized(String::from(spec)))
    }
}

/// Attempts to parse multiple network specifications, stopping at the first one that fails.
pub fn parse_netspecs<S: AsRef<str>>(spec_strs: &[S]) -> Result<Vec<NetworkSpec>, ParseNetspecError> {
    spec_strs.iter()
        .map(|s| parse_netspec(s.as_ref()))
        .collect()
}

/// Parses the network specifications in `args`, reporting the first failure on standard error.
pub(crate) fn parse_netspec_args<S: AsRef<str>>(args: &[S]) -> Option<Vec<NetworkSpec>> {
    match parse_netspecs(args) {
        Ok(specs) => Some(specs),
        Err(e) => {
            eprintln!("{}", e);
            None
        },
    }
}
