//! 62-bit variable-length unsigned integers.
//!
//! A value in `0..=2^62-1` is written as 1, 2, 4 or 8 big-endian bytes. The top
//! two bits of the first byte select the length:
//!
//! | tag  | bytes | range                                   |
//! |------|-------|-----------------------------------------|
//! | `00` | 1     | 0 ..= 63                                |
//! | `01` | 2     | 64 ..= 16383                            |
//! | `10` | 4     | 16384 ..= 1073741823                    |
//! | `11` | 8     | 1073741824 ..= 4611686018427387903      |
//!
//! ```
//! let mut buf = Vec::new();
//! qvarint_core::append(&mut buf, 16384).unwrap();
//! assert_eq!(buf, [0x80, 0x00, 0x40, 0x00]);
//! assert_eq!(qvarint_core::parse(&buf).unwrap(), (16384, 4));
//! ```

pub mod codec;
pub mod error;
pub mod list;
pub mod stream;
pub mod varint;

pub use crate::codec::{
    append, encoded_len, get, parse, peek, tag_len, to_vec, Varints, MAX, MAX_1, MAX_2, MAX_4,
    MAX_8, MAX_LEN, MIN,
};
pub use crate::error::{Result, VarintError};
pub use crate::list::{decode_list, encode_list};
pub use crate::stream::{read_from, write_to, ByteSink, ByteSource, IoSink, IoSource};
pub use crate::varint::VarInt;
