/// Converts a slice of bytes into its constituent bits (most significant bit first).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut ret = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for bit_idx in 0..8 {
            ret.push(
                byte & (1 << (7 - bit_idx)) != 0
            );
        }
    }
    ret
}

/// Converts a slice of bytes into a string of '1' and '0' characters representing the bit values
/// (most significant bit first).
pub fn bytes_to_binary(bytes: &[u8]) -> String {
    let mut ret = String::with_capacity(bytes.len() * 8);
    for bit in bytes_to_bits(bytes) {
        ret.push(if bit { '1' } else { '0' });
    }
    ret
}

/// Converts a string of '1' and '0' characters into bit values (most significant bit first).
///
/// On failure, returns the index and value of the first character that is neither '0' nor '1'.
pub fn binary_to_bits(binary: &str) -> Result<Vec<bool>, (usize, char)> {
    let mut ret = Vec::with_capacity(binary.len());
    for (i, c) in binary.chars().enumerate() {
        match c {
            '0' => ret.push(false),
            '1' => ret.push(true),
            other => return Err((i, other)),
        }
    }
    Ok(ret)
}

/// Converts a slice of bit values into bytes. Assumes that bits are ordered most significant bit
/// first. If the number of bits does not fit into a whole number of bytes, the bit slice is assumed
/// to be padded with zeroes at the end up to a byte boundary.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut byte_count = bits.len() / 8;
    if bits.len() % 8 != 0 {
        byte_count += 1;
    }

    let mut bytes = Vec::with_capacity(byte_count);
    let mut cur_byte = 0u8;
    for i in 0..bits.len() {
        if bits[i] {
            let shift_count = 7 - (i % 8);
            cur_byte |= 1 << shift_count;
        }

        if i % 8 == 7 {
            bytes.push(cur_byte);
            cur_byte = 0;
        }
    }

    if bits.len() % 8 != 0 {
        // incomplete byte; append it too
        bytes.push(cur_byte);
    }

    bytes
}

/// Splits a binary string into groups of eight characters joined by dots, e.g.
/// `"11111111111111111100000000000000"` -> `"11111111.11111111.11000000.00000000"`.
pub fn group_octets(binary: &str) -> String {
    let chars: Vec<char> = binary.chars().collect();
    chars.chunks(8)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(".")
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bytes_to_binary() {
        assert_eq!("", bytes_to_binary(&[]));
        assert_eq!("00000000", bytes_to_binary(&[0x00]));
        assert_eq!("10101100", bytes_to_binary(&[172]));
        assert_eq!("1111111111000000", bytes_to_binary(&[0xFF, 0xC0]));
    }

    #[test]
    fn test_binary_to_bits() {
        assert_eq!(Ok(vec![true, false, true]), binary_to_bits("101"));
        assert_eq!(Ok(vec![]), binary_to_bits(""));
        assert_eq!(Err((2, '2')), binary_to_bits("012"));
        assert_eq!(Err((0, ' ')), binary_to_bits(" 01"));
    }

    #[test]
    fn test_bits_to_bytes() {
        assert_eq!(vec![0b1010_1100], bits_to_bytes(&[true, false, true, false, true, true, false, false]));
        assert_eq!(vec![0b1000_0000], bits_to_bytes(&[true]));
        assert_eq!(vec![0xFF, 0x00], bits_to_bytes(&bytes_to_bits(&[0xFF, 0x00])));
    }

    #[test]
    fn test_group_octets() {
        assert_eq!(
            "11111111.11111111.11000000.00000000",
            group_octets("11111111111111111100000000000000"),
        );
        assert_eq!("PPPPPPPP.HH", group_octets("PPPPPPPPHH"));
    }
}
