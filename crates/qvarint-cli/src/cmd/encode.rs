use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use clap::Args;
use qvarint_core::{encoded_len, write_to, IoSink};
use tracing::info;

use crate::io::values;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input text file, one decimal value per line ('#' starts a comment)
    #[arg(long)]
    pub r#in: String,

    /// Output varint stream path
    #[arg(long)]
    pub out: String,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    // All values are validated before the output file is created.
    let vals = values::read_values_file(&args.r#in)?;

    let file = File::create(&args.out).with_context(|| format!("create: {}", args.out))?;
    let mut sink = IoSink::new(BufWriter::new(file));
    let mut bytes = 0usize;
    for &v in &vals {
        write_to(&mut sink, v).with_context(|| format!("write value {v} to {}", args.out))?;
        bytes += encoded_len(v)?;
    }
    sink.get_mut()
        .flush()
        .with_context(|| format!("flush: {}", args.out))?;

    info!(
        "encode ok: in={} out={} values={} bytes={}",
        args.r#in,
        args.out,
        vals.len(),
        bytes
    );
    Ok(())
}
