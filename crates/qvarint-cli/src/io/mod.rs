// crates/qvarint-cli/src/io/mod.rs

pub mod values;
