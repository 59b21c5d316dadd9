use anyhow::{bail, Context};
use clap::Args;
use qvarint_core::{parse, VarintError};
use tracing::debug;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input varint stream path
    #[arg(long)]
    pub r#in: String,

    /// Stop after this many values
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in).with_context(|| format!("read: {}", args.r#in))?;
    let limit = args.limit.unwrap_or(usize::MAX);

    // Index by log2(len): 1, 2, 4, 8 bytes.
    let mut by_len = [0u64; 4];
    let mut pos = 0usize;
    let mut n = 0usize;

    println!("{:>10}  {:>3}  {:>3}  value", "offset", "tag", "len");
    while pos < bytes.len() && n < limit {
        let (v, len) = match parse(&bytes[pos..]) {
            Ok(x) => x,
            Err(VarintError::Truncated { need, have }) => {
                bail!(
                    "{}: truncated value at offset {pos}: need {need} bytes, have {have}",
                    args.r#in
                )
            }
            Err(e) => return Err(e.into()),
        };
        let tag = bytes[pos] >> 6;
        debug!(offset = pos, tag, len, value = v, "varint");
        println!("{pos:>10}  {:>3}  {len:>3}  {v}", format!("{tag:02b}"));

        by_len[len.trailing_zeros() as usize] += 1;
        pos += len;
        n += 1;
    }

    eprintln!("--- inspect ---");
    eprintln!("file        = {}", args.r#in);
    eprintln!("bytes       = {}", bytes.len());
    eprintln!("values      = {}", n);
    eprintln!("len1/2/4/8  = {}/{}/{}/{}", by_len[0], by_len[1], by_len[2], by_len[3]);
    if pos < bytes.len() {
        eprintln!("remaining   = {} bytes (limit reached)", bytes.len() - pos);
    }
    Ok(())
}
