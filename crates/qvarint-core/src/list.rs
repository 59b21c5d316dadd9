// crates/qvarint-core/src/list.rs
//
// Length-prefixed list of varints.
//
// Encoding (bytes):
//   count: varint
//   repeated count times:
//     value: varint

use crate::codec::{self, Varints};
use crate::error::{Result, VarintError};

/// Encode `values` as a count followed by each value.
///
/// Every value is range-checked before any output is produced.
pub fn encode_list(values: &[u64]) -> Result<Vec<u8>> {
    let mut total = codec::encoded_len(values.len() as u64)?;
    for &v in values {
        total += codec::encoded_len(v)?;
    }

    let mut out = Vec::with_capacity(total);
    codec::append(&mut out, values.len() as u64)?;
    for &v in values {
        codec::append(&mut out, v)?;
    }
    Ok(out)
}

/// Decode a list written by [`encode_list`]. The list must fill `bytes` exactly.
///
/// Fewer values than the count announces is corruption, reported as
/// [`VarintError::UnexpectedEndOfStream`].
pub fn decode_list(bytes: &[u8]) -> Result<Vec<u64>> {
    let mut pos = 0usize;
    let count = codec::get(bytes, &mut pos)?;

    // Each value takes at least one byte; don't let a hostile count drive the allocation.
    let cap = (count as usize).min(bytes.len() - pos);
    let mut values = Vec::with_capacity(cap);

    let mut iter = Varints::new(&bytes[pos..]);
    for _ in 0..count {
        match iter.next() {
            Some(v) => values.push(v?),
            None => return Err(VarintError::UnexpectedEndOfStream),
        }
    }

    let consumed = pos + iter.position();
    if consumed != bytes.len() {
        return Err(VarintError::TrailingBytes(bytes.len() - consumed));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_one_byte() {
        let enc = encode_list(&[]).unwrap();
        assert_eq!(enc, [0x00]);
        assert!(decode_list(&enc).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let err = encode_list(&[1, 2, codec::MAX + 1]).unwrap_err();
        assert!(matches!(err, VarintError::OutOfRange(_)));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let mut enc = encode_list(&[7, 300]).unwrap();
        enc.push(0x01);
        assert!(matches!(
            decode_list(&enc),
            Err(VarintError::TrailingBytes(1))
        ));
    }

    #[test]
    fn short_list_is_corrupt() {
        // count = 3, only two values present
        let bytes = [0x03, 0x01, 0x02];
        let err = decode_list(&bytes).unwrap_err();
        assert!(matches!(err, VarintError::UnexpectedEndOfStream));
        assert!(!err.is_end_of_stream());
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        assert!(matches!(
            decode_list(&bytes),
            Err(VarintError::UnexpectedEndOfStream)
        ));
    }
}
