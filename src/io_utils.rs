//! JSON input and output for the command line.
//!
//! The `-` path convention routes through standard streams: `-` as input
//! reads stdin, and a missing or `-` output writes to stdout.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

pub fn is_dash(path: &Path) -> bool {
    path == Path::new("-")
}

pub fn read_json(path: &Path) -> Result<Value> {
    let reader: Box<dyn Read> = if is_dash(path) {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("Opening input {path:?}"))?;
        Box::new(BufReader::new(file))
    };
    serde_json::from_reader(reader).with_context(|| format!("Parsing JSON input {path:?}"))
}

pub fn write_json<T: Serialize>(path: Option<&Path>, value: &T, compact: bool) -> Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) if !is_dash(path) => {
            let file =
                File::create(path).with_context(|| format!("Creating output {path:?}"))?;
            Box::new(BufWriter::new(file))
        }
        _ => Box::new(io::stdout().lock()),
    };
    if compact {
        serde_json::to_writer(&mut writer, value)
    } else {
        serde_json::to_writer_pretty(&mut writer, value)
    }
    .context("Writing JSON output")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
