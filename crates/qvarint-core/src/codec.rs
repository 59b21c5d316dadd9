// crates/qvarint-core/src/codec.rs
//
// 62-bit variable-length integers, 1/2/4/8 bytes.
//
// Layout (big-endian):
//   byte0 = (tag << 6) | top 6 payload bits
//   tag 00 -> 1 byte, 01 -> 2, 10 -> 4, 11 -> 8
//
// The encoder always picks the shortest tag, so every value has exactly one
// encoding.

use crate::error::{Result, VarintError};

pub const MIN: u64 = 0;

/// Largest encodable value, 2^62 - 1.
pub const MAX: u64 = 0x3FFF_FFFF_FFFF_FFFF;

pub const MAX_1: u64 = 0x3F; // 2^6-1
pub const MAX_2: u64 = 0x3FFF; // 2^14-1
pub const MAX_4: u64 = 0x3FFF_FFFF; // 2^30-1
pub const MAX_8: u64 = MAX;

/// Longest possible encoding in bytes.
pub const MAX_LEN: usize = 8;

/// Number of bytes needed to encode `v`.
pub fn encoded_len(v: u64) -> Result<usize> {
    match v {
        0..=MAX_1 => Ok(1),
        0..=MAX_2 => Ok(2),
        0..=MAX_4 => Ok(4),
        0..=MAX_8 => Ok(8),
        _ => Err(VarintError::OutOfRange(v)),
    }
}

/// Total encoding length announced by the tag bits of `first`.
#[inline]
pub fn tag_len(first: u8) -> usize {
    1usize << (first >> 6)
}

/// Encode `v` into a fixed scratch buffer, returning the buffer and the used length.
///
/// Shared by the buffer and stream writers so both emit identical bytes.
pub(crate) fn encode_scratch(v: u64) -> Result<([u8; MAX_LEN], usize)> {
    let len = encoded_len(v)?;
    Ok((encode_fixed(v, len), len))
}

/// Lay out `v` in `len` bytes. Caller guarantees `len == encoded_len(v)`.
pub(crate) fn encode_fixed(v: u64, len: usize) -> [u8; MAX_LEN] {
    let tag = (len.trailing_zeros() as u8) << 6;

    // Big-endian payload occupies the low `len` bytes of the u64.
    let be = v.to_be_bytes();
    let mut out = [0u8; MAX_LEN];
    out[..len].copy_from_slice(&be[MAX_LEN - len..]);
    out[0] |= tag;
    out
}

/// Append the encoding of `v` to `dst`.
///
/// The range check happens before `dst` is touched; on error `dst` is unchanged.
pub fn append(dst: &mut Vec<u8>, v: u64) -> Result<()> {
    let (buf, len) = encode_scratch(v)?;
    dst.extend_from_slice(&buf[..len]);
    Ok(())
}

/// Encode `v` into a freshly allocated vector.
pub fn to_vec(v: u64) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(MAX_LEN);
    append(&mut out, v)?;
    Ok(out)
}

/// Decode one value from the front of `bytes`.
///
/// Returns the value and the number of bytes it occupied, which is always the
/// length declared by the tag of `bytes[0]`. Bytes past that length are ignored.
pub fn parse(bytes: &[u8]) -> Result<(u64, usize)> {
    let &first = bytes.first().ok_or(VarintError::EndOfStream)?;
    let len = tag_len(first);
    if bytes.len() < len {
        return Err(VarintError::Truncated {
            need: len,
            have: bytes.len(),
        });
    }

    let mut value = u64::from(first & 0x3F);
    for &b in &bytes[1..len] {
        value = (value << 8) | u64::from(b);
    }
    Ok((value, len))
}

/// Decode the value at the front of `bytes` without reporting its length.
pub fn peek(bytes: &[u8]) -> Result<u64> {
    parse(bytes).map(|(v, _)| v)
}

/// Decode the value at `bytes[*pos..]` and advance `pos` past it.
///
/// `pos` is left untouched when decoding fails.
pub fn get(bytes: &[u8], pos: &mut usize) -> Result<u64> {
    let rest = bytes.get(*pos..).unwrap_or(&[]);
    let (v, n) = parse(rest)?;
    *pos += n;
    Ok(v)
}

/// Iterator over consecutive values packed in a slice.
///
/// Ends cleanly when the slice is exhausted at a value boundary. A truncated
/// trailing value yields one error, after which the iterator is fused.
#[derive(Clone, Debug)]
pub struct Varints<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Varints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Offset of the next undecoded byte.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Varints<'_> {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        match get(self.bytes, &mut self.pos) {
            Ok(v) => Some(Ok(v)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Varints<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_tags_match_lengths() {
        let cases = [
            (0u64, 0x00u8),
            (MAX_1, 0x3F),
            (64, 0x40),
            (MAX_4, 0xBF),
            (MAX, 0xFF),
        ];
        for (v, first) in cases {
            let (buf, _) = encode_scratch(v).unwrap();
            assert_eq!(buf[0], first, "v={v}");
        }
    }

    #[test]
    fn get_leaves_pos_on_error() {
        let bytes = [0x05, 0x80, 0x00];
        let mut pos = 0;
        assert_eq!(get(&bytes, &mut pos).unwrap(), 5);
        assert_eq!(pos, 1);
        assert!(matches!(
            get(&bytes, &mut pos),
            Err(VarintError::Truncated { need: 4, have: 2 })
        ));
        assert_eq!(pos, 1);
    }

    #[test]
    fn get_past_end_is_end_of_stream() {
        let mut pos = 7;
        assert!(get(&[0x01], &mut pos).unwrap_err().is_end_of_stream());
    }
}
