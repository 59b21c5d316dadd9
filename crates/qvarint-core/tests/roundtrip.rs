// crates/qvarint-core/tests/roundtrip.rs

use std::collections::VecDeque;
use std::io;

use qvarint_core::{
    append, encoded_len, parse, peek, read_from, write_to, ByteSink, IoSink, IoSource, VarintError,
    Varints, MAX,
};

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

/// Values spread over every encoded length, plus the edges.
fn sample_values() -> Vec<u64> {
    let mut seed: u64 = 0x1234_5678_9abc_def0;
    let mut out = vec![0, 1, 63, 64, 16383, 16384, (1 << 30) - 1, 1 << 30, MAX];
    for bits in [6u32, 14, 30, 62] {
        for _ in 0..64 {
            out.push(lcg_next(&mut seed) >> (64 - bits));
        }
    }
    out
}

#[test]
fn slice_roundtrip_reports_exact_length() {
    for v in sample_values() {
        let mut buf = Vec::new();
        append(&mut buf, v).expect("append");
        assert_eq!(parse(&buf).unwrap(), (v, encoded_len(v).unwrap()), "v={}", v);
    }
}

#[test]
fn stream_matches_slice() {
    for v in sample_values() {
        let mut buf = Vec::new();
        append(&mut buf, v).unwrap();

        let mut src: &[u8] = &buf;
        assert_eq!(read_from(&mut src).unwrap(), parse(&buf).unwrap().0, "v={}", v);
        assert!(src.is_empty(), "read_from must consume exactly the value");

        let mut written: Vec<u8> = Vec::new();
        write_to(&mut written, v).unwrap();
        assert_eq!(written, buf, "v={}", v);
    }
}

#[test]
fn stream_of_many_values_ends_cleanly() {
    let values = sample_values();

    let mut sink = IoSink::new(Vec::<u8>::new());
    for &v in &values {
        write_to(&mut sink, v).unwrap();
    }
    let bytes = sink.into_inner();

    let mut src = IoSource::new(io::Cursor::new(bytes.clone()));
    let mut got = Vec::new();
    loop {
        match read_from(&mut src) {
            Ok(v) => got.push(v),
            Err(e) if e.is_end_of_stream() => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(got, values);

    let from_iter: Vec<u64> = Varints::new(&bytes).map(|r| r.unwrap()).collect();
    assert_eq!(from_iter, values);
}

#[test]
fn read_from_distinguishes_clean_end_from_truncation() {
    let mut empty: &[u8] = &[];
    assert!(matches!(read_from(&mut empty), Err(VarintError::EndOfStream)));

    let mut short: VecDeque<u8> = VecDeque::from(vec![0xC0, 0x00, 0x00]);
    assert!(matches!(
        read_from(&mut short),
        Err(VarintError::UnexpectedEndOfStream)
    ));
}

#[test]
fn read_from_never_reads_past_value() {
    let mut q: VecDeque<u8> = VecDeque::from(vec![0x40, 0x40, 0x25, 0xFF]);
    assert_eq!(read_from(&mut q).unwrap(), 64);
    assert_eq!(q, [0x25, 0xFF]);
    assert_eq!(read_from(&mut q).unwrap(), 37);
    assert_eq!(q, [0xFF]);
}

#[test]
fn read_from_propagates_source_error() {
    struct Broken;
    impl io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    match read_from(&mut IoSource::new(Broken)) {
        Err(VarintError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("unexpected: {other:?}"),
    }
}

/// Accepts `budget` bytes, then fails.
struct Limited {
    budget: usize,
    got: Vec<u8>,
}

impl ByteSink for Limited {
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "full"));
        }
        self.budget -= 1;
        self.got.push(b);
        Ok(())
    }
}

#[test]
fn write_to_stops_at_first_sink_error() {
    let mut sink = Limited {
        budget: 3,
        got: Vec::new(),
    };
    match write_to(&mut sink, 1 << 30) {
        Err(VarintError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(sink.got, [0xC0, 0x00, 0x00]);
}

#[test]
fn write_to_range_checks_before_pushing() {
    let mut sink = Limited {
        budget: 8,
        got: Vec::new(),
    };
    assert!(matches!(
        write_to(&mut sink, MAX + 1),
        Err(VarintError::OutOfRange(_))
    ));
    assert!(sink.got.is_empty());
}

#[test]
fn peek_is_repeatable_and_non_mutating() {
    let buf = [0x9D, 0x7F, 0x3E, 0x7D, 0x01];
    let before = buf;
    let a = peek(&buf).unwrap();
    let b = peek(&buf).unwrap();
    assert_eq!(a, 494_878_333);
    assert_eq!(a, b);
    assert_eq!(buf, before);
}

#[test]
fn varints_iterator_fuses_after_truncation() {
    let bytes = [0x01, 0x40];
    let mut it = Varints::new(&bytes);
    assert_eq!(it.next().unwrap().unwrap(), 1);
    assert!(matches!(
        it.next(),
        Some(Err(VarintError::Truncated { need: 2, have: 1 }))
    ));
    assert!(it.next().is_none());
    assert_eq!(it.position(), 1);
}
