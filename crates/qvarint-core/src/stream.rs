// crates/qvarint-core/src/stream.rs
//
// One-byte-at-a-time stream adapters.

use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};

use crate::codec::{encode_scratch, tag_len};
use crate::error::{Result, VarintError};

/// Pull side: yields one byte per call, `Ok(None)` once exhausted.
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Push side: accepts one byte per call.
pub trait ByteSink {
    fn write_byte(&mut self, b: u8) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        (**self).write_byte(b)
    }
}

impl ByteSource for &[u8] {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.split_first() {
            Some((&b, rest)) => {
                *self = rest;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}

impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

impl ByteSink for VecDeque<u8> {
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.push_back(b);
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.push(b);
        Ok(())
    }
}

/// Adapts any `io::Read` into a [`ByteSource`].
///
/// Each call issues a single one-byte read; wrap the reader in a `BufReader`
/// if the underlying handle is expensive per call.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut b = [0u8; 1];
        loop {
            match self.inner.read(&mut b) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(b[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Adapts any `io::Write` into a [`ByteSink`].
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        loop {
            match self.inner.write(&[b]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::WriteZero,
                        "failed to write varint byte",
                    ))
                }
                Ok(_) => return Ok(()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Read one value from `src`.
///
/// Fails with [`VarintError::EndOfStream`] if `src` is empty before the tag byte
/// and with [`VarintError::UnexpectedEndOfStream`] if it runs out afterwards.
/// Never pulls more bytes than the tag declares.
pub fn read_from<S: ByteSource + ?Sized>(src: &mut S) -> Result<u64> {
    let first = src.read_byte()?.ok_or(VarintError::EndOfStream)?;
    let len = tag_len(first);

    let mut value = u64::from(first & 0x3F);
    for _ in 1..len {
        let b = src
            .read_byte()?
            .ok_or(VarintError::UnexpectedEndOfStream)?;
        value = (value << 8) | u64::from(b);
    }
    Ok(value)
}

/// Write `v` to `sink` one byte at a time.
///
/// The range check runs before the first byte is pushed. A sink failure stops
/// the write immediately and may leave a partial value behind on the sink.
pub fn write_to<S: ByteSink + ?Sized>(sink: &mut S, v: u64) -> Result<()> {
    let (buf, len) = encode_scratch(v)?;
    for &b in &buf[..len] {
        sink.write_byte(b)?;
    }
    Ok(())
}
