//! Measurement sources: built-in example, measurements file, interactive
//! entry, and previously exported results
//!
//! ## Measurements file
//!
//! ```text
//! Hemoglobin:10.5
//! Calcium: 7.8
//! ```
//!
//! One `Parameter:Value` pair per line. Lines with the wrong number of
//! fields, an unknown parameter, or a non-numeric value are skipped and
//! reported; the rest of the file is still read. Blank lines are ignored.

use crate::error::{Error, Result};
use crate::measurement::MeasurementSet;
use crate::reference;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Separator between the value and the message in an exported results line
const RECOMMENDATION_SEPARATOR: &str = " | Recommendation: ";

/// Measurements read from text, plus diagnostics for every skipped line
#[derive(Debug, Default)]
pub struct Parsed {
    pub measurements: MeasurementSet,
    pub diagnostics: Vec<Error>,
}

impl Parsed {
    fn skip(&mut self, error: Error) {
        tracing::debug!("skipping input: {}", error);
        self.diagnostics.push(error);
    }
}

/// The built-in example measurement set
pub fn example_measurements() -> MeasurementSet {
    [
        ("Hemoglobin", 10.5),
        ("Vitamin D", 15.0),
        ("Calcium", 7.8),
        ("Iron", 55.0),
        ("Vitamin B12", 150.0),
        ("Magnesium", 1.4),
    ]
    .into_iter()
    .collect()
}

/// Parse measurements file contents
pub fn parse_measurements(text: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(':').collect();
        let [parameter, value] = fields.as_slice() else {
            parsed.skip(Error::Parse {
                line: index + 1,
                message: format!("expected 'Parameter:Value', got '{}'", line),
            });
            continue;
        };

        if let Some(value) = parse_field(&mut parsed, index + 1, parameter, value) {
            parsed.measurements.insert(parameter.trim(), value);
        }
    }

    parsed
}

/// Read a measurements file
///
/// A missing or unreadable file yields an empty set and one diagnostic.
pub fn read_measurements_file(path: &Path) -> Parsed {
    match fs::read_to_string(path) {
        Ok(text) => parse_measurements(&text),
        Err(e) => {
            let mut parsed = Parsed::default();
            if e.kind() == std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), "measurements file not found");
            } else {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read measurements file"
                );
            }
            parsed.diagnostics.push(Error::Io(e));
            parsed
        }
    }
}

/// Prompt for every reference parameter in table order
///
/// Non-numeric answers skip that parameter. End of input stops prompting
/// and returns what was collected so far.
pub fn prompt_measurements<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<MeasurementSet> {
    let mut measurements = MeasurementSet::new();

    for parameter in reference::parameters() {
        write!(out, "Enter your {} level: ", parameter)?;
        out.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            writeln!(out)?;
            tracing::debug!(parameter, "input closed, stopping prompts");
            break;
        }

        match answer.trim().parse::<f64>() {
            Ok(value) => {
                measurements.insert(parameter, value);
            }
            Err(_) => {
                tracing::debug!(parameter, answer = answer.trim(), "non-numeric answer");
                writeln!(out, "Invalid input, skipping this parameter.")?;
            }
        }
    }

    Ok(measurements)
}

/// Parse exported results (`{parameter}: {value} | Recommendation: {message}`)
/// back into the measurements that produced them
pub fn parse_results(text: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let pair = line
            .split_once(RECOMMENDATION_SEPARATOR)
            .and_then(|(head, _)| head.split_once(':'));
        let Some((parameter, value)) = pair else {
            parsed.skip(Error::Parse {
                line: index + 1,
                message: format!("not a results line: '{}'", line),
            });
            continue;
        };

        if let Some(value) = parse_field(&mut parsed, index + 1, parameter, value) {
            parsed.measurements.insert(parameter.trim(), value);
        }
    }

    parsed
}

/// Read an exported results file
pub fn read_results_file(path: &Path) -> Result<Parsed> {
    let text = fs::read_to_string(path)?;
    Ok(parse_results(&text))
}

fn parse_field(parsed: &mut Parsed, line: usize, parameter: &str, value: &str) -> Option<f64> {
    let parameter = parameter.trim();
    if !reference::is_known(parameter) {
        parsed.skip(Error::UnknownParameter(parameter.to_string()));
        return None;
    }

    match value.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            parsed.skip(Error::Parse {
                line,
                message: format!("invalid value for {}: '{}'", parameter, value.trim()),
            });
            None
        }
    }
}
