use clap::Args;

#[derive(Args, Debug)]
pub struct LenArgs {
    /// Values to measure
    #[arg(required = true)]
    pub values: Vec<u64>,
}

pub fn run(args: LenArgs) -> anyhow::Result<()> {
    for v in args.values {
        let bytes = qvarint_core::to_vec(v)?;
        println!("{} len={} hex={}", v, bytes.len(), hex(&bytes));
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
