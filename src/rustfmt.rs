//! This module implements basic `rustfmt` code formatting.

use anyhow::{anyhow, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Format the raw input source string and return formatted output.
pub fn format(source: &str) -> Result<String> {
    let mut rustfmt = Command::new("rustfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = rustfmt
        .stdin
        .take()
        .ok_or_else(|| anyhow!("stdin is not available for the rustfmt process"))?;
    stdin.write_all(source.as_bytes())?;
    drop(stdin);

    let output = rustfmt.wait_with_output()?;
    if !output.status.success() {
        return Err(anyhow!("rustfmt exited with {}", output.status));
    }

    Ok(String::from_utf8(output.stdout)?)
}
