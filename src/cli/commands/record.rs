//! Reading source records from the command line.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::cli::args::RecordArgs;
use crate::error::Result;

/// Read the JSON record named by `--record` or `--file`.
///
/// A file path of `-` reads from stdin.
pub fn read_record(args: &RecordArgs) -> Result<Value> {
    let text = match (&args.record, &args.file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => read_source(path)?,
        (None, None) => {
            return Err(anyhow::anyhow!("No record given; pass --record or --file").into())
        }
    };

    let value: Value = serde_json::from_str(&text).context("Record is not valid JSON")?;
    Ok(value)
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read record from stdin")?;
        return Ok(text);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record from {}", path.display()))?;
    Ok(text)
}
