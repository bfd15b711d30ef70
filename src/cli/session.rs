//! Interactive session: example data, user entry, then a data file
//!
//! Each phase evaluates one measurement set, shows the results, drains
//! the recommendation queue, and asks where to save the results. A blank
//! answer skips saving for that phase.

use super::util::{read_answer, write_diagnostics};
use nutridose::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Labels for one phase of the session
struct Phase {
    results_heading: &'static str,
    queue_heading: &'static str,
    save_prompt: &'static str,
}

const EXAMPLE_PHASE: Phase = Phase {
    results_heading: "",
    queue_heading: "Recommendations Queue:",
    save_prompt: "Enter file name to save example results: ",
};

const USER_PHASE: Phase = Phase {
    results_heading: "Your Results:",
    queue_heading: "Your Recommendations:",
    save_prompt: "Enter file name to save your results: ",
};

const FILE_PHASE: Phase = Phase {
    results_heading: "Results from File:",
    queue_heading: "Recommendations from File:",
    save_prompt: "Enter file name to save results from file: ",
};

pub fn cmd_session(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), config)
}

/// Run all three phases against the given input and output
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<()> {
    writeln!(out, "=== Example Data Processing ===\n")?;
    run_phase(&example_measurements(), &EXAMPLE_PHASE, input, out, config)?;

    writeln!(out, "\n=== Enter Your Own Data ===")?;
    let user_data = prompt_measurements(input, out)?;
    run_phase(&user_data, &USER_PHASE, input, out, config)?;

    writeln!(out, "\n=== File Input ===")?;
    write!(out, "Enter the path of your data file (.txt): ")?;
    out.flush()?;
    let file_data = match read_answer(input)? {
        Some(path) if !path.is_empty() => {
            let parsed = read_measurements_file(Path::new(&path));
            write_diagnostics(out, &parsed)?;
            parsed.measurements
        }
        _ => {
            writeln!(out, "No data file given.")?;
            MeasurementSet::new()
        }
    };
    run_phase(&file_data, &FILE_PHASE, input, out, config)
}

fn run_phase<R: BufRead, W: Write>(
    measurements: &MeasurementSet,
    phase: &Phase,
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<()> {
    let (results, mut queue) = evaluate(measurements)?;

    if !phase.results_heading.is_empty() {
        writeln!(out, "\n{}", phase.results_heading)?;
    }
    if results.is_empty() {
        writeln!(out, "No out-of-range measurements.")?;
    }
    results.write_display(out)?;

    writeln!(out, "\n{}", phase.queue_heading)?;
    queue.write_drain(out)?;

    write!(out, "\n{}", phase.save_prompt)?;
    out.flush()?;
    match read_answer(input)? {
        Some(name) if !name.is_empty() => {
            let path = config.resolve_output(&PathBuf::from(name));
            results.save_to_file(&path)?;
            writeln!(out, "Saved to {}", path.display())?;
        }
        _ => writeln!(out, "Not saved.")?,
    }

    Ok(())
}
