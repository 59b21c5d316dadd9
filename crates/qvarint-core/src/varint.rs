use std::fmt;

use crate::codec::{self, MAX};
use crate::error::{Result, VarintError};

/// An integer known to fit the 62-bit varint range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarInt(u64);

impl VarInt {
    pub const ZERO: VarInt = VarInt(0);
    pub const MAX: VarInt = VarInt(MAX);

    pub fn new(v: u64) -> Result<Self> {
        if v > MAX {
            return Err(VarintError::OutOfRange(v));
        }
        Ok(VarInt(v))
    }

    /// Every `u32` fits, so this cannot fail.
    pub const fn from_u32(v: u32) -> Self {
        VarInt(v as u64)
    }

    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Encoded size in bytes.
    pub fn size(self) -> usize {
        match codec::encoded_len(self.0) {
            Ok(n) => n,
            // Construction guarantees the value is in range.
            Err(_) => codec::MAX_LEN,
        }
    }

    pub fn encode(self, dst: &mut Vec<u8>) {
        let len = self.size();
        dst.extend_from_slice(&codec::encode_fixed(self.0, len)[..len]);
    }

    pub fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        let (v, n) = codec::parse(bytes)?;
        Ok((VarInt(v), n))
    }
}

impl From<u8> for VarInt {
    fn from(v: u8) -> Self {
        VarInt(u64::from(v))
    }
}

impl From<u16> for VarInt {
    fn from(v: u16) -> Self {
        VarInt(u64::from(v))
    }
}

impl From<u32> for VarInt {
    fn from(v: u32) -> Self {
        VarInt::from_u32(v)
    }
}

impl TryFrom<u64> for VarInt {
    type Error = VarintError;

    fn try_from(v: u64) -> Result<Self> {
        VarInt::new(v)
    }
}

impl TryFrom<usize> for VarInt {
    type Error = VarintError;

    fn try_from(v: usize) -> Result<Self> {
        VarInt::new(v as u64)
    }
}

impl From<VarInt> for u64 {
    fn from(v: VarInt) -> Self {
        v.0
    }
}

impl fmt::Display for VarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_agrees_with_encoded_len() {
        for v in [0u64, 63, 64, 16383, 16384, 0x3FFF_FFFF, 0x4000_0000, MAX] {
            let x = VarInt::new(v).unwrap();
            assert_eq!(x.size(), codec::encoded_len(v).unwrap(), "v={v}");
        }
    }

    #[test]
    fn rejects_above_max() {
        assert!(matches!(
            VarInt::try_from(MAX + 1),
            Err(VarintError::OutOfRange(n)) if n == MAX + 1
        ));
    }

    #[test]
    fn encode_decode() {
        let mut buf = vec![0xAA];
        VarInt::from(300u16).encode(&mut buf);
        assert_eq!(buf, [0xAA, 0x41, 0x2C]);
        let (v, n) = VarInt::decode(&buf[1..]).unwrap();
        assert_eq!((v.into_inner(), n), (300, 2));
        assert_eq!(v.to_string(), "300");
    }
}
