use crate::addr::{Octets, OCTET_COUNT};


const XXX: u8 = 9;
const SUBNET_MASK_BYTE_TO_PREFIX: [u8; 256] = [
      0, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
      1, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
      2, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
    XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
      3, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX,
      4, XXX, XXX, XXX, XXX, XXX, XXX, XXX,   5, XXX, XXX, XXX,   6, XXX,   7,   8,
];
const PREFIX_TO_MASK_BYTE: [u8; 9] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE, 0xFF];

/// The mask octet values that are neither 0 nor 255 and can appear in a contiguous mask, i.e. the
/// values of an interesting octet.
pub const COMMON_MASK_VALUES: [u8; 7] = [128, 192, 224, 240, 248, 252, 254];


/// The role an octet of a subnet mask plays in the decimal calculation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OctetRole {
    /// Mask octet 255: copied from the address.
    Network,

    /// Mask octet 0: zero in the subnet ID, 255 in the broadcast address.
    Host,

    /// Any other mask octet; the block size in this octet is the contained magic number.
    Interesting(u32),
}

/// Classifies a single mask octet.
pub fn octet_role(mask_octet: u8) -> OctetRole {
    match mask_octet {
        255 => OctetRole::Network,
        0 => OctetRole::Host,
        other => OctetRole::Interesting(magic_number(other)),
    }
}

/// Returns the index of the first mask octet that is neither 0 nor 255, or `None` if the mask
/// consists only of such octets (an "easy" mask).
pub fn interesting_octet(mask: &Octets) -> Option<usize> {
    (0..OCTET_COUNT)
        .find(|&i| mask[i] != 0 && mask[i] != 255)
}

/// Returns the magic number (block size) for an interesting mask octet.
///
/// Panics if `mask_octet` is 0 or 255; locate the interesting octet first.
pub fn magic_number(mask_octet: u8) -> u32 {
    assert!(
        mask_octet != 0 && mask_octet != 255,
        "magic number requested for non-interesting mask octet {}", mask_octet,
    );
    256 - u32::from(mask_octet)
}

/// Returns the number of bits with the value 1 in the mask.
pub fn prefix_length(mask: &Octets) -> u32 {
    mask.to_binary()
        .chars()
        .filter(|c| *c == '1')
        .count() as u32
}

/// Returns the CIDR prefix of the mask if all of its one-bits precede all of its zero-bits, or
/// `None` otherwise.
pub fn contiguous_prefix(mask: &Octets) -> Option<u32> {
    let mut ones_over = false;
    let mut cidr: u32 = 0;
    for b in mask.values() {
        match SUBNET_MASK_BYTE_TO_PREFIX[usize::from(b)] {
            XXX => {
                // non-CIDR
                return None;
            },
            8 => {
                if ones_over {
                    // mixed byte followed by byte of all ones
                    return None;
                }
                cidr += 8;
            },
            0 => {
                ones_over = true;
            },
            n => {
                if ones_over {
                    // mixed byte followed by mixed byte
                    return None;
                }
                cidr += u32::from(n);
                ones_over = true;
            }
        }
    }

    Some(cidr)
}

/// Returns the subnet mask with the given CIDR prefix. Prefixes beyond 32 yield the all-ones mask.
pub fn mask_from_prefix(mut prefix: u32) -> Octets {
    let mut values = [0u8; OCTET_COUNT];
    for value in values.iter_mut() {
        if prefix >= 8 {
            *value = 0xFF;
            prefix -= 8;
        } else {
            *value = PREFIX_TO_MASK_BYTE[prefix as usize];
            prefix = 0;
        }
    }
    Octets::new(values)
}


#[cfg(test)]
mod test {
    use super::*;

    fn m(values: [u8; 4]) -> Octets {
        Octets::new(values)
    }

    #[test]
    fn test_interesting_octet() {
        assert_eq!(Some(2), interesting_octet(&m([255, 255, 192, 0])));
        assert_eq!(Some(3), interesting_octet(&m([255, 255, 255, 224])));
        assert_eq!(Some(1), interesting_octet(&m([255, 128, 0, 0])));
        assert_eq!(Some(0), interesting_octet(&m([240, 0, 0, 0])));
        assert_eq!(None, interesting_octet(&m([255, 255, 255, 0])));
        assert_eq!(None, interesting_octet(&m([0, 0, 0, 0])));
        assert_eq!(None, interesting_octet(&m([255, 255, 255, 255])));

        // the first one wins, even in malformed masks
        assert_eq!(Some(1), interesting_octet(&m([255, 3, 200, 0])));
    }

    #[test]
    fn test_interesting_octet_none_iff_easy() {
        for v in 0..=255u8 {
            let mask = m([255, v, 0, 0]);
            assert_eq!(v == 0 || v == 255, interesting_octet(&mask).is_none());
        }
    }

    #[test]
    fn test_magic_number() {
        assert_eq!(64, magic_number(192));
        assert_eq!(32, magic_number(224));
        assert_eq!(2, magic_number(254));
        assert_eq!(128, magic_number(128));
        for v in 1..=254u8 {
            assert_eq!(256, magic_number(v) + u32::from(v));
        }
    }

    #[test]
    #[should_panic]
    fn test_magic_number_of_255() {
        magic_number(255);
    }

    #[test]
    #[should_panic]
    fn test_magic_number_of_0() {
        magic_number(0);
    }

    #[test]
    fn test_octet_role() {
        assert_eq!(OctetRole::Network, octet_role(255));
        assert_eq!(OctetRole::Host, octet_role(0));
        assert_eq!(OctetRole::Interesting(16), octet_role(240));
    }

    #[test]
    fn test_prefix_length() {
        assert_eq!(0, prefix_length(&m([0, 0, 0, 0])));
        assert_eq!(18, prefix_length(&m([255, 255, 192, 0])));
        assert_eq!(27, prefix_length(&m([255, 255, 255, 224])));
        assert_eq!(32, prefix_length(&m([255, 255, 255, 255])));
        // counts bits regardless of contiguity
        assert_eq!(9, prefix_length(&m([255, 0, 0, 1])));
    }

    #[test]
    fn test_contiguous_prefix() {
        assert_eq!(Some(0), contiguous_prefix(&m([0, 0, 0, 0])));
        assert_eq!(Some(8), contiguous_prefix(&m([255, 0, 0, 0])));
        assert_eq!(Some(23), contiguous_prefix(&m([255, 255, 254, 0])));
        assert_eq!(Some(32), contiguous_prefix(&m([255, 255, 255, 255])));

        assert_eq!(None, contiguous_prefix(&m([255, 0, 255, 0])));
        assert_eq!(None, contiguous_prefix(&m([255, 192, 192, 0])));
        assert_eq!(None, contiguous_prefix(&m([255, 200, 0, 0])));
        assert_eq!(None, contiguous_prefix(&m([0, 0, 0, 1])));
    }

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(m([0, 0, 0, 0]), mask_from_prefix(0));
        assert_eq!(m([128, 0, 0, 0]), mask_from_prefix(1));
        assert_eq!(m([255, 0, 0, 0]), mask_from_prefix(8));
        assert_eq!(m([255, 255, 192, 0]), mask_from_prefix(18));
        assert_eq!(m([255, 255, 255, 224]), mask_from_prefix(27));
        assert_eq!(m([255, 255, 255, 254]), mask_from_prefix(31));
        assert_eq!(m([255, 255, 255, 255]), mask_from_prefix(32));

        for prefix in 0..=32 {
            let mask = mask_from_prefix(prefix);
            assert_eq!(Some(prefix), contiguous_prefix(&mask));
            assert_eq!(prefix, prefix_length(&mask));
        }
    }

    #[test]
    fn test_common_mask_values_are_interesting() {
        for v in COMMON_MASK_VALUES {
            let mask = m([255, 255, v, 0]);
            assert_eq!(Some(2), interesting_octet(&mask));
            assert!(contiguous_prefix(&mask).is_some());
        }
    }
}
