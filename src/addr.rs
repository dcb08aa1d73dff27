use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Index;
use std::str::FromStr;

use crate::bit_manip::{binary_to_bits, bits_to_bytes, bytes_to_binary, group_octets};


/// The number of octets in an IPv4 address or subnet mask.
pub const OCTET_COUNT: usize = 4;

/// The number of bits in an IPv4 address or subnet mask.
pub const BIT_COUNT: usize = OCTET_COUNT * 8;

/// An IPv4 address or subnet mask in its four-octet dotted-decimal form.
///
/// The leftmost octet of the canonical string representation has index 0 (i.e. `"172.16.150.41"`
/// -> `[172, 16, 150, 41]`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Octets {
    values: [u8; OCTET_COUNT],
}

impl Octets {
    pub const fn new(values: [u8; OCTET_COUNT]) -> Octets {
        Octets {
            values,
        }
    }

    pub fn values(&self) -> [u8; OCTET_COUNT] { self.values }

    /// Returns a copy of these octets with the octet at the given index replaced.
    pub fn with_octet(&self, index: usize, value: u8) -> Octets {
        let mut values = self.values;
        values[index] = value;
        Octets::new(values)
    }

    /// Returns the 32-bit integer value, where the first octet is the most significant byte.
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.values)
    }

    /// Returns the 32-character binary representation, each octet zero-padded to eight bits.
    pub fn to_binary(&self) -> String {
        bytes_to_binary(&self.values)
    }

    /// Returns the binary representation with the octets separated by dots.
    pub fn to_dotted_binary(&self) -> String {
        group_octets(&self.to_binary())
    }

    /// Decodes a 32-character string of '0' and '1' characters.
    pub fn from_binary(binary: &str) -> Result<Octets, AddressParseError> {
        let char_count = binary.chars().count();
        if char_count != BIT_COUNT {
            return Err(AddressParseError::BinaryLength(char_count, BIT_COUNT));
        }

        let bits = binary_to_bits(binary)
            .map_err(|(pos, c)| AddressParseError::BinaryDigit(pos, c))?;
        let bytes = bits_to_bytes(&bits);

        let mut values = [0u8; OCTET_COUNT];
        values.copy_from_slice(&bytes);
        Ok(Octets::new(values))
    }
}

impl Index<usize> for Octets {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl FromStr for Octets {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chunks: Vec<&str> = s.split('.').collect();
        if chunks.len() != OCTET_COUNT {
            return Err(AddressParseError::IncorrectChunkCount(chunks.len(), OCTET_COUNT));
        }

        let mut values = [0u8; OCTET_COUNT];
        for i in 0..OCTET_COUNT {
            if chunks[i].len() == 0 {
                return Err(AddressParseError::EmptyChunk(i));
            }

            // parse wider than u8 so that "256" is reported as out of range, not as garbage
            let chunk_val: u32 = chunks[i].parse()
                .map_err(|e| AddressParseError::ChunkParseError(i, String::from(chunks[i]), e))?;
            if chunk_val > 255 {
                return Err(AddressParseError::ChunkOutOfRange(i, chunk_val, 0, 255));
            }

            values[i] = chunk_val as u8;
        }

        Ok(Octets::new(values))
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.values;
        write!(f, "{}.{}.{}.{}", v[0], v[1], v[2], v[3])
    }
}

/// An error that occurs when a dotted-decimal or binary address representation is malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressParseError {
    /// The address has the wrong number of dot-separated chunks (got, expected).
    IncorrectChunkCount(usize, usize),

    /// The chunk with the given index is empty.
    EmptyChunk(usize),

    /// The chunk with the given index is not a decimal number.
    ChunkParseError(usize, String, ParseIntError),

    /// The chunk with the given index is a number outside the range (index, value, min, max).
    ChunkOutOfRange(usize, u32, u32, u32),

    /// The binary representation has the wrong length (got, expected).
    BinaryLength(usize, usize),

    /// The binary representation contains a character other than '0' or '1' at the given
    /// position.
    BinaryDigit(usize, char),
}
impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressParseError::IncorrectChunkCount(got, expected)
                => write!(f, "IP address has {} chunk(s); expected {}", got, expected),
            AddressParseError::EmptyChunk(chunk_idx)
                => write!(f, "IP address chunk with index {} is empty", chunk_idx),
            AddressParseError::ChunkParseError(chunk_idx, chunk, error)
                => write!(f, "failed to parse IP address chunk with index {} ({:?}): {}", chunk_idx, chunk, error),
            AddressParseError::ChunkOutOfRange(chunk_idx, got, min, max)
                => write!(f, "IP address chunk with index {} ({}) is out of range {} <= n <= {}", chunk_idx, got, min, max),
            AddressParseError::BinaryLength(got, expected)
                => write!(f, "binary address has {} digit(s); expected {}", got, expected),
            AddressParseError::BinaryDigit(pos, c)
                => write!(f, "binary address has invalid digit {:?} at position {}", c, pos),
        }
    }
}
impl Error for AddressParseError {
}


#[cfg(test)]
mod test {
    use super::*;

    const ZERO: Octets = Octets::new([0, 0, 0, 0]);

    fn parse(s: &str) -> Result<Octets, AddressParseError> {
        s.parse()
    }

    #[test]
    fn test_format() {
        assert_eq!("0.0.0.0", ZERO.to_string());
        assert_eq!("255.255.255.255", Octets::new([255, 255, 255, 255]).to_string());
        assert_eq!("172.16.150.41", Octets::new([172, 16, 150, 41]).to_string());
        assert_eq!("127.0.0.1", Octets::new([127, 0, 0, 1]).to_string());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Ok(ZERO), parse("0.0.0.0"));
        assert_eq!(Ok(ZERO), parse("00.000.00000.0"));
        assert_eq!(Ok(Octets::new([1, 2, 3, 4])), parse("1.2.3.4"));
        assert_eq!(Ok(Octets::new([1, 2, 3, 4])), parse("01.002.00003.4"));
        assert_eq!(Ok(Octets::new([255, 255, 255, 255])), parse("255.255.255.255"));
        assert_eq!(Ok(Octets::new([192, 168, 5, 77])), parse("192.168.5.77"));

        assert_eq!(Err(AddressParseError::IncorrectChunkCount(2, 4)), parse("."));
        assert_eq!(Err(AddressParseError::IncorrectChunkCount(3, 4)), parse("1.2.3"));
        assert_eq!(Err(AddressParseError::IncorrectChunkCount(5, 4)), parse("1.2.3.4.5"));
        assert_eq!(Err(AddressParseError::EmptyChunk(1)), parse("1..3.4"));
        assert_eq!(Err(AddressParseError::ChunkOutOfRange(3, 256, 0, 255)), parse("1.2.3.256"));
        if let Err(AddressParseError::ChunkParseError(idx, s, _)) = parse("a.b.c.d") {
            assert_eq!(0, idx);
            assert_eq!("a", s);
        } else {
            panic!();
        }
        if let Err(AddressParseError::ChunkParseError(idx, s, _)) = parse("1.2.-3.4") {
            assert_eq!(2, idx);
            assert_eq!("-3", s);
        } else {
            panic!();
        }
    }

    #[test]
    fn test_parse_format_round_trip() {
        for s in &["0.0.0.0", "10.1.4.0", "172.16.150.41", "255.255.192.0", "255.255.255.255"] {
            let octets = parse(s).unwrap();
            assert_eq!(Ok(octets), parse(&octets.to_string()));
        }

        let base = Octets::new([172, 16, 150, 41]);
        for i in 0..OCTET_COUNT {
            for v in 0..=255u8 {
                let octets = base.with_octet(i, v);
                assert_eq!(Ok(octets), parse(&octets.to_string()), "octet {} = {}", i, v);
            }
        }
        for v in 0..=255u8 {
            let octets = Octets::new([v, 255 - v, v / 7, v.wrapping_mul(37)]);
            assert_eq!(Ok(octets), parse(&octets.to_string()));
        }
    }

    #[test]
    fn test_to_binary() {
        assert_eq!("00000000000000000000000000000000", ZERO.to_binary());
        assert_eq!("11111111111111111100000000000000", Octets::new([255, 255, 192, 0]).to_binary());
        assert_eq!("10101100000100001001011000101001", Octets::new([172, 16, 150, 41]).to_binary());
        assert_eq!(
            "10101100.00010000.10010110.00101001",
            Octets::new([172, 16, 150, 41]).to_dotted_binary(),
        );
    }

    #[test]
    fn test_from_binary() {
        assert_eq!(Ok(Octets::new([255, 255, 192, 0])), Octets::from_binary("11111111111111111100000000000000"));
        assert_eq!(Ok(Octets::new([255, 255, 255, 255])), Octets::from_binary("11111111111111111111111111111111"));

        assert_eq!(Err(AddressParseError::BinaryLength(3, 32)), Octets::from_binary("101"));
        assert_eq!(Err(AddressParseError::BinaryLength(33, 32)), Octets::from_binary("111111111111111111111111111111111"));
        assert_eq!(Err(AddressParseError::BinaryDigit(8, '2')), Octets::from_binary("11111111211111111111111111111111"));
    }

    #[test]
    fn test_binary_round_trip() {
        fn trt(values: [u8; 4]) {
            let octets = Octets::new(values);
            assert_eq!(Ok(octets), Octets::from_binary(&octets.to_binary()));
        }

        trt([0, 0, 0, 0]);
        trt([255, 255, 255, 255]);
        trt([172, 16, 150, 41]);
        trt([1, 128, 254, 127]);
        for v in 0..=255u8 {
            trt([v, 255 - v, v / 3, v ^ 0x5A]);
        }
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(0x7F000001, Octets::new([127, 0, 0, 1]).to_u32());
        assert_eq!(0xFFFFC000, Octets::new([255, 255, 192, 0]).to_u32());
    }

    #[test]
    fn test_with_octet() {
        let o = Octets::new([10, 1, 4, 0]);
        assert_eq!(Octets::new([10, 1, 4, 1]), o.with_octet(3, 1));
        assert_eq!(10, o[0]);
    }
}
