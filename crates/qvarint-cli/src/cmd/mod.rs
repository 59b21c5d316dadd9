// crates/qvarint-cli/src/cmd/mod.rs

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod len;
