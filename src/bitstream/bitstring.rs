use std::fmt::{Display, Formatter};

use super::bitpacker::BitPacker;

/// Encoder output: an ordered string of '0' and '1' characters, one per bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: String,
}

impl BitString {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: String::with_capacity(capacity),
        }
    }

    /// Append a code. Codes only ever hold '0' and '1'.
    pub(crate) fn push_code(&mut self, code: &str) {
        self.bits.push_str(code);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// The bits in order, true for '1'.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.bytes().map(|b| b == b'1')
    }

    /// Pack the bits into bytes, first bit in the most significant position.
    /// Returns the bytes and how many bits of the last byte are used (0 = all 8).
    pub fn pack(&self) -> (Vec<u8>, u8) {
        let mut bp = BitPacker::new((self.len() + 7) / 8);
        bp.out_str(&self.bits);
        bp.flush();
        (bp.output, bp.last_bits)
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.bits)
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.bits
    }
}

#[test]
fn pack_test() {
    let mut bits = BitString::with_capacity(12);
    bits.push_code("1101");
    bits.push_code("00000001");
    assert_eq!(bits.len(), 12);
    assert_eq!(bits.pack(), (vec![0b1101_0000, 0b0001_0000], 4));
    assert_eq!(bits.to_string(), "110100000001");
    assert_eq!(bits.iter().filter(|&b| b).count(), 4);
}

#[test]
fn pack_empty_test() {
    assert_eq!(BitString::default().pack(), (vec![], 0));
}
