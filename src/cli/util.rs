//! CLI utility helpers

use nutridose::{Config, Error, Parsed, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--output" || arg == "-o" {
            if let Some(path) = args.get(i + 1) {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}

/// Remove `--config <file>` from the argument list, returning the path
pub fn take_config_arg(args: &mut Vec<String>) -> Option<PathBuf> {
    let i = args.iter().position(|arg| arg == "--config" || arg == "-c")?;
    args.remove(i);
    if i < args.len() {
        Some(PathBuf::from(args.remove(i)))
    } else {
        None
    }
}

/// First argument that is neither a flag nor a flag's value
pub fn positional_arg(args: &[String]) -> Option<&str> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--output" | "-o" => skip_next = true,
            a if a.starts_with('-') => {}
            a => return Some(a),
        }
    }
    None
}

/// Write content to a file resolved against the configured output dir
pub fn write_output(config: &Config, path: &Path, content: &str) -> Result<PathBuf> {
    let target = config.resolve_output(path);
    fs::write(&target, content).map_err(Error::Io)?;
    Ok(target)
}

/// Read one answer line; `None` once input is closed
pub fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    Ok(Some(answer.trim().to_string()))
}

/// Report skipped input lines to a user-facing sink
pub fn write_diagnostics<W: Write>(out: &mut W, parsed: &Parsed) -> Result<()> {
    for diagnostic in &parsed.diagnostics {
        if diagnostic.is_not_found() {
            writeln!(out, "File not found.")?;
        } else {
            writeln!(out, "Skipped: {}", diagnostic)?;
        }
    }
    Ok(())
}
