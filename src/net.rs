use std::fmt;

use tracing::debug;

use crate::addr::{Octets, OCTET_COUNT};
use crate::mask::{contiguous_prefix, octet_role, OctetRole};


/// The procedure used to derive the subnet ID and broadcast address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// Octet by octet, using the magic number of the interesting octet.
    Decimal,

    /// Bit by bit, on the 32-bit binary representations.
    Binary,
}
impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Decimal => write!(f, "decimal"),
            Method::Binary => write!(f, "binary"),
        }
    }
}


/// The boundaries of the subnet that contains an address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubnetResult {
    method: Method,
    subnet_id: Octets,
    broadcast: Octets,
    usable_range: Option<(Octets, Octets)>,
}

impl SubnetResult {
    /// Calculates the subnet containing `addr` given `subnet_mask` using the given method.
    pub fn calculate(addr: Octets, subnet_mask: Octets, method: Method) -> SubnetResult {
        let (subnet_id, broadcast) = match method {
            Method::Decimal => {
                let subnet_id = decimal_subnet_id(addr, subnet_mask);
                (subnet_id, decimal_broadcast(subnet_id, subnet_mask))
            },
            Method::Binary => (
                binary_subnet_id(addr, subnet_mask),
                binary_broadcast(addr, subnet_mask),
            ),
        };
        let usable_range = usable_range(subnet_id, broadcast);

        debug!(
            %addr, %subnet_mask, %method, %subnet_id, %broadcast,
            has_hosts = usable_range.is_some(),
            "calculated subnet"
        );

        SubnetResult {
            method,
            subnet_id,
            broadcast,
            usable_range,
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn subnet_id(&self) -> Octets { self.subnet_id }
    pub fn broadcast(&self) -> Octets { self.broadcast }
    pub fn usable_range(&self) -> Option<(Octets, Octets)> { self.usable_range }
}


/// Calculates the subnet ID octet by octet: network octets are copied from the address, host
/// octets are zeroed and an interesting octet is rounded down to a multiple of its magic number.
///
/// Each octet is treated independently; the mask is not required to be contiguous.
pub fn decimal_subnet_id(addr: Octets, subnet_mask: Octets) -> Octets {
    let mut values = [0u8; OCTET_COUNT];
    for i in 0..OCTET_COUNT {
        values[i] = match octet_role(subnet_mask[i]) {
            OctetRole::Network => addr[i],
            OctetRole::Host => 0,
            OctetRole::Interesting(magic) => {
                let rounded_down = (u32::from(addr[i]) / magic) * magic;
                rounded_down as u8
            },
        };
    }
    Octets::new(values)
}

/// Calculates the broadcast address octet by octet from a subnet ID: network octets are carried
/// over from the subnet ID, host octets become 255 and an interesting octet becomes the last value
/// of its block.
///
/// Carrying network octets from the subnet ID is equivalent to copying them from the address,
/// since the two agree wherever the mask octet is 255.
pub fn decimal_broadcast(subnet_id: Octets, subnet_mask: Octets) -> Octets {
    let mut values = [0u8; OCTET_COUNT];
    for i in 0..OCTET_COUNT {
        values[i] = match octet_role(subnet_mask[i]) {
            OctetRole::Network => subnet_id[i],
            OctetRole::Host => 255,
            OctetRole::Interesting(magic) => {
                // a block of a non-power-of-two magic number may be cut short by the octet's end
                let block_end = u32::from(subnet_id[i]) + magic - 1;
                block_end.min(255) as u8
            },
        };
    }
    Octets::new(values)
}

/// Combines the binary representations of an address and a mask: where the mask bit is 1, the
/// address bit is kept; elsewhere, `host_bit` is used.
fn combine_binary(addr: Octets, subnet_mask: Octets, host_bit: char) -> Octets {
    let combined: String = addr.to_binary().chars()
        .zip(subnet_mask.to_binary().chars())
        .map(|(addr_bit, mask_bit)| if mask_bit == '1' { addr_bit } else { host_bit })
        .collect();
    Octets::from_binary(&combined)
        .expect("combined binary representation")
}

/// Calculates the subnet ID by copying the address bits under the mask's one-bits and setting all
/// other bits to 0.
pub fn binary_subnet_id(addr: Octets, subnet_mask: Octets) -> Octets {
    combine_binary(addr, subnet_mask, '0')
}

/// Calculates the broadcast address by copying the address bits under the mask's one-bits and
/// setting all other bits to 1.
pub fn binary_broadcast(addr: Octets, subnet_mask: Octets) -> Octets {
    combine_binary(addr, subnet_mask, '1')
}

/// Returns the first and last usable host address between a subnet ID and a broadcast address,
/// adjusting only the last octet.
///
/// Returns `None` if there are no usable hosts, i.e. if the adjustment would leave the range of
/// the last octet or the first usable address would come after the last one (/31 and /32).
pub fn usable_range(subnet_id: Octets, broadcast: Octets) -> Option<(Octets, Octets)> {
    let last = OCTET_COUNT - 1;
    let first_usable = subnet_id.with_octet(last, subnet_id[last].checked_add(1)?);
    let last_usable = broadcast.with_octet(last, broadcast[last].checked_sub(1)?);
    if first_usable.to_u32() > last_usable.to_u32() {
        return None;
    }
    Some((first_usable, last_usable))
}

/// Returns the number of addresses in a subnet with the given mask, if the mask is contiguous.
pub fn address_count(subnet_mask: &Octets) -> Option<u64> {
    contiguous_prefix(subnet_mask)
        .map(|prefix| 1u64 << (32 - prefix))
}

/// Returns the number of usable host addresses in a subnet with the given mask, if the mask is
/// contiguous. Subnets with fewer than four addresses have no usable hosts.
pub fn host_count(subnet_mask: &Octets) -> Option<u64> {
    address_count(subnet_mask)
        .map(|count| if count < 4 { 0 } else { count - 2 })
}
