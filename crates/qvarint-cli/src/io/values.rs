// crates/qvarint-cli/src/io/values.rs

use std::io::Write;

use anyhow::{bail, Context};

/// Parse a text file of decimal values, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Every value is range
/// checked here so callers can refuse bad input before writing anything.
pub fn read_values_file(path: &str) -> anyhow::Result<Vec<u64>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read values: {path}"))?;
    parse_values(&text).with_context(|| format!("parse values: {path}"))
}

pub fn parse_values(text: &str) -> anyhow::Result<Vec<u64>> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let v: u64 = line
            .parse()
            .with_context(|| format!("line {}: not an unsigned integer: {line:?}", i + 1))?;
        if let Err(e) = qvarint_core::encoded_len(v) {
            bail!("line {}: {e}", i + 1);
        }
        out.push(v);
    }
    Ok(out)
}

/// Write values as decimal text, one per line, to `path` or stdout.
pub fn write_values(path: Option<&str>, values: &[u64]) -> anyhow::Result<()> {
    let mut s = String::with_capacity(values.len() * 8);
    for v in values {
        s.push_str(&v.to_string());
        s.push('\n');
    }
    match path {
        Some(p) => std::fs::write(p, s).with_context(|| format!("write values: {p}"))?,
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(s.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
