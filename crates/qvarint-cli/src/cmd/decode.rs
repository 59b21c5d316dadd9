use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context};
use clap::Args;
use qvarint_core::{read_from, IoSource, VarintError};
use tracing::info;

use crate::io::values;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input varint stream path
    #[arg(long)]
    pub r#in: String,

    /// Output text path (stdout if omitted)
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let file = File::open(&args.r#in).with_context(|| format!("open: {}", args.r#in))?;
    let mut src = IoSource::new(BufReader::new(file));

    let mut vals = Vec::new();
    loop {
        match read_from(&mut src) {
            Ok(v) => vals.push(v),
            Err(VarintError::EndOfStream) => break,
            Err(VarintError::UnexpectedEndOfStream) => {
                bail!("{}: value #{} is truncated", args.r#in, vals.len())
            }
            Err(e) => return Err(e).with_context(|| format!("read: {}", args.r#in)),
        }
    }

    values::write_values(args.out.as_deref(), &vals)?;
    info!(
        "decode ok: in={} values={} out={}",
        args.r#in,
        vals.len(),
        args.out.as_deref().unwrap_or("-")
    );
    Ok(())
}
