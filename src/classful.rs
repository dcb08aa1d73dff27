use std::fmt;

use tracing::debug;

use crate::addr::{Octets, OCTET_COUNT};


/// The class of an IPv4 address under classful addressing, as inferred from its first octet.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NetworkClass {
    A,
    B,
    C,
    D,
    E,
    /// Addresses starting with 0.
    ReservedZero,
    /// Addresses starting with 127 (loopback).
    ReservedLoopback,
}

impl NetworkClass {
    /// All classes and reserved prefixes, in table order.
    pub const ALL: [NetworkClass; 7] = [
        NetworkClass::A, NetworkClass::B, NetworkClass::C, NetworkClass::D, NetworkClass::E,
        NetworkClass::ReservedZero, NetworkClass::ReservedLoopback,
    ];

    /// Returns the static properties of this class.
    pub fn info(&self) -> &'static ClassInfo {
        match self {
            NetworkClass::A => &CLASS_A,
            NetworkClass::B => &CLASS_B,
            NetworkClass::C => &CLASS_C,
            NetworkClass::D => &CLASS_D,
            NetworkClass::E => &CLASS_E,
            NetworkClass::ReservedZero => &RESERVED_ZERO,
            NetworkClass::ReservedLoopback => &RESERVED_LOOPBACK,
        }
    }

    /// Whether network and host portions are meaningful for this class (A, B and C).
    pub fn is_unicast(&self) -> bool {
        self.info().network_octets.is_some()
    }
}
impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkClass::A => write!(f, "A"),
            NetworkClass::B => write!(f, "B"),
            NetworkClass::C => write!(f, "C"),
            NetworkClass::D => write!(f, "D"),
            NetworkClass::E => write!(f, "E"),
            NetworkClass::ReservedZero => write!(f, "Reserved (0.x.x.x)"),
            NetworkClass::ReservedLoopback => write!(f, "Reserved (127.x.x.x)"),
        }
    }
}


/// Fixed facts about an address class. Fields that only make sense for classes A, B and C are
/// `None` for the others.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClassInfo {
    pub class: NetworkClass,
    pub first_octet_min: u8,
    pub first_octet_max: u8,
    pub purpose: &'static str,
    pub valid_network_range: &'static str,
    pub network_octets: Option<usize>,
    pub host_octets: Option<usize>,
    pub network_bits: Option<u32>,
    pub host_bits: Option<u32>,
    pub default_mask: Option<Octets>,
    pub total_networks: Option<u32>,
    pub hosts_per_network: Option<u32>,
}

const CLASS_A: ClassInfo = ClassInfo {
    class: NetworkClass::A,
    first_octet_min: 1,
    first_octet_max: 126,
    purpose: "Unicast (large networks)",
    valid_network_range: "1.0.0.0-126.0.0.0",
    network_octets: Some(1),
    host_octets: Some(3),
    network_bits: Some(8),
    host_bits: Some(24),
    default_mask: Some(Octets::new([255, 0, 0, 0])),
    // 2^7 - 2: 0 and 127 are reserved
    total_networks: Some(126),
    hosts_per_network: Some(16_777_214),
};
const CLASS_B: ClassInfo = ClassInfo {
    class: NetworkClass::B,
    first_octet_min: 128,
    first_octet_max: 191,
    purpose: "Unicast (medium-sized networks)",
    valid_network_range: "128.0.0.0-191.255.0.0",
    network_octets: Some(2),
    host_octets: Some(2),
    network_bits: Some(16),
    host_bits: Some(16),
    default_mask: Some(Octets::new([255, 255, 0, 0])),
    total_networks: Some(16_384),
    hosts_per_network: Some(65_534),
};
const CLASS_C: ClassInfo = ClassInfo {
    class: NetworkClass::C,
    first_octet_min: 192,
    first_octet_max: 223,
    purpose: "Unicast (small networks)",
    valid_network_range: "192.0.0.0-223.255.255.0",
    network_octets: Some(3),
    host_octets: Some(1),
    network_bits: Some(24),
    host_bits: Some(8),
    default_mask: Some(Octets::new([255, 255, 255, 0])),
    total_networks: Some(2_097_152),
    hosts_per_network: Some(254),
};
const CLASS_D: ClassInfo = ClassInfo {
    class: NetworkClass::D,
    first_octet_min: 224,
    first_octet_max: 239,
    purpose: "Multicast",
    valid_network_range: "224.0.0.0-239.255.255.255",
    network_octets: None,
    host_octets: None,
    network_bits: None,
    host_bits: None,
    default_mask: None,
    total_networks: None,
    hosts_per_network: None,
};
const CLASS_E: ClassInfo = ClassInfo {
    class: NetworkClass::E,
    first_octet_min: 240,
    first_octet_max: 255,
    purpose: "Reserved (formerly experimental)",
    valid_network_range: "240.0.0.0-255.255.255.255",
    network_octets: None,
    host_octets: None,
    network_bits: None,
    host_bits: None,
    default_mask: None,
    total_networks: None,
    hosts_per_network: None,
};
const RESERVED_ZERO: ClassInfo = ClassInfo {
    class: NetworkClass::ReservedZero,
    first_octet_min: 0,
    first_octet_max: 0,
    purpose: "Reserved for special use",
    valid_network_range: "0.0.0.0-0.255.255.255",
    network_octets: None,
    host_octets: None,
    network_bits: None,
    host_bits: None,
    default_mask: None,
    total_networks: None,
    hosts_per_network: None,
};
const RESERVED_LOOPBACK: ClassInfo = ClassInfo {
    class: NetworkClass::ReservedLoopback,
    first_octet_min: 127,
    first_octet_max: 127,
    purpose: "Reserved for loopback",
    valid_network_range: "127.0.0.0-127.255.255.255",
    network_octets: None,
    host_octets: None,
    network_bits: None,
    host_bits: None,
    default_mask: None,
    total_networks: None,
    hosts_per_network: None,
};


/// A classful property that exists only for classes A, B and C.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Applicable<T> {
    Value(T),
    /// The address belongs to class D or E or to a reserved prefix.
    NotApplicable,
}

impl<T> Applicable<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Applicable<U> {
        match self {
            Applicable::Value(v) => Applicable::Value(f(v)),
            Applicable::NotApplicable => Applicable::NotApplicable,
        }
    }
}
impl<T> From<Option<T>> for Applicable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Applicable::Value(v),
            None => Applicable::NotApplicable,
        }
    }
}
impl<T: fmt::Display> fmt::Display for Applicable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicable::Value(v) => write!(f, "{}", v),
            Applicable::NotApplicable => write!(f, "N/A - Special class"),
        }
    }
}


/// Infers the class of an address from its first octet.
pub fn classify(addr: &Octets) -> NetworkClass {
    match addr[0] {
        0 => NetworkClass::ReservedZero,
        1..=126 => NetworkClass::A,
        127 => NetworkClass::ReservedLoopback,
        128..=191 => NetworkClass::B,
        192..=223 => NetworkClass::C,
        224..=239 => NetworkClass::D,
        240..=255 => NetworkClass::E,
    }
}

/// Copies the first `network_octets` octets of the address and zeroes the rest.
pub fn network_id_with(addr: &Octets, network_octets: usize) -> Octets {
    fill_host_octets(addr, network_octets, 0)
}

/// Copies the first `network_octets` octets of the address and sets the rest to 255.
pub fn broadcast_with(addr: &Octets, network_octets: usize) -> Octets {
    fill_host_octets(addr, network_octets, 255)
}

fn fill_host_octets(addr: &Octets, network_octets: usize, fill: u8) -> Octets {
    let mut values = addr.values();
    for value in values.iter_mut().skip(network_octets) {
        *value = fill;
    }
    Octets::new(values)
}

fn network_octets(addr: &Octets) -> Applicable<usize> {
    classify(addr).info().network_octets.into()
}

pub fn default_mask(addr: &Octets) -> Applicable<Octets> {
    classify(addr).info().default_mask.into()
}

pub fn network_id(addr: &Octets) -> Applicable<Octets> {
    network_octets(addr).map(|n| network_id_with(addr, n))
}

pub fn broadcast(addr: &Octets) -> Applicable<Octets> {
    network_octets(addr).map(|n| broadcast_with(addr, n))
}

/// Returns the first and last usable address of the classful network, forcing the last octet of
/// the network ID to 1 and of the broadcast address to 254.
///
/// Only the last octet is touched, which is correct because A, B and C networks always end in at
/// least one whole host octet.
pub fn usable_range(addr: &Octets) -> Applicable<(Octets, Octets)> {
    let last = OCTET_COUNT - 1;
    network_octets(addr).map(|n| (
        network_id_with(addr, n).with_octet(last, 1),
        broadcast_with(addr, n).with_octet(last, 254),
    ))
}


/// Everything the classful rules say about a single address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassfulSummary {
    pub addr: Octets,
    pub class: NetworkClass,
    pub info: &'static ClassInfo,
    pub network_id: Applicable<Octets>,
    pub broadcast: Applicable<Octets>,
    pub usable_range: Applicable<(Octets, Octets)>,
    pub default_mask: Applicable<Octets>,
}

impl ClassfulSummary {
    pub fn resolve(addr: Octets) -> ClassfulSummary {
        let class = classify(&addr);
        debug!(%addr, %class, "resolved address class");

        ClassfulSummary {
            addr,
            class,
            info: class.info(),
            network_id: network_id(&addr),
            broadcast: broadcast(&addr),
            usable_range: usable_range(&addr),
            default_mask: default_mask(&addr),
        }
    }
}
