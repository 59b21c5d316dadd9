use thiserror::Error;

pub type Result<T> = std::result::Result<T, VarintError>;

#[derive(Debug, Error)]
pub enum VarintError {
    #[error("value too big to fit in 62 bits: {0}")]
    OutOfRange(u64),

    /// No byte was available where a new value would start.
    #[error("end of stream")]
    EndOfStream,

    #[error("truncated varint: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    /// The source ran dry after the tag byte announced a longer encoding.
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,

    #[error("trailing bytes after varint list: {0}")]
    TrailingBytes(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VarintError {
    /// True when decoding stopped cleanly at a value boundary.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, VarintError::EndOfStream)
    }
}
