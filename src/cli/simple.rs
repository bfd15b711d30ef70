//! Simple CLI commands: check, example, import, table

use super::util::{parse_output_arg, positional_arg, write_diagnostics, write_output};
use nutridose::*;
use std::io::{self, Write};
use std::path::Path;

pub fn cmd_check(args: &[String], config: &Config) -> Result<()> {
    let Some(data_path) = positional_arg(args) else {
        return Err("Usage: nutridose check <data.txt> [--output <file>] [--json]".into());
    };

    run_check(
        Path::new(data_path),
        args,
        config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

pub fn cmd_example(args: &[String], config: &Config) -> Result<()> {
    report_pass(
        &example_measurements(),
        args,
        config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

pub fn cmd_import(args: &[String]) -> Result<()> {
    let Some(results_path) = positional_arg(args) else {
        return Err("Usage: nutridose import <results.txt>".into());
    };

    let parsed = read_results_file(Path::new(results_path))?;
    write_diagnostics(&mut io::stderr().lock(), &parsed)?;

    let mut stdout = io::stdout().lock();
    for (parameter, value) in &parsed.measurements {
        writeln!(stdout, "{}:{}", parameter, value)?;
    }
    Ok(())
}

pub fn cmd_table(args: &[String]) -> Result<()> {
    if args.contains(&"--json".to_string()) {
        println!("{}", serde_json::to_string_pretty(&REFERENCE_TABLE)?);
        return Ok(());
    }

    println!("{:<12} {:>7} {:>7}  Recommendation (when low)", "Parameter", "Low", "High");
    for entry in &REFERENCE_TABLE {
        println!(
            "{:<12} {:>7} {:>7}  {}",
            entry.name, entry.low, entry.high, entry.recommendation
        );
    }
    Ok(())
}

/// Read a measurements file and report on it; unreadable files and bad
/// lines are diagnosed on `err` and evaluation continues with what was read
fn run_check<W: Write, E: Write>(
    data_path: &Path,
    args: &[String],
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let parsed = read_measurements_file(data_path);
    write_diagnostics(err, &parsed)?;
    report_pass(&parsed.measurements, args, config, out, err)
}

/// Evaluate, print to `out`, and optionally save the export text
fn report_pass<W: Write, E: Write>(
    measurements: &MeasurementSet,
    args: &[String],
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let json_output = args.contains(&"--json".to_string());

    let (results, mut queue) = evaluate(measurements)?;

    if let Some(path) = parse_output_arg(args) {
        let target = write_output(config, &path, &results.export_text())?;
        writeln!(err, "Written to: {}", target.display())?;
    }

    if json_output {
        let report = Report::new(measurements, &results, &mut queue);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "✓ All {} measurement(s) within normal range", measurements.len())?;
        return Ok(());
    }
    results.write_display(out)?;
    writeln!(out, "\nRecommendations:")?;
    queue.write_drain(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn check(path: &Path, list: &[&str], config: &Config) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_check(path, &args(list), config, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_check_missing_file_evaluates_empty_set() {
        let temp = TempDir::new().unwrap();
        let (out, err) = check(&temp.path().join("absent.txt"), &[], &Config::default());

        assert_eq!(err, "File not found.\n");
        assert_eq!(out, "✓ All 0 measurement(s) within normal range\n");
    }

    #[test]
    fn test_check_reports_and_saves() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("labs.txt");
        fs::write(&data, "Hemoglobin:abc\nCalcium:7.8\nIron:100\n").unwrap();
        let config = Config {
            output_dir: Some(temp.path().to_path_buf()),
            ..Config::default()
        };

        let (out, err) = check(&data, &["--output", "results.txt"], &config);

        assert!(err.starts_with("Skipped: Parse error on line 1"));
        assert!(err.contains("Written to: "));
        assert_eq!(
            out,
            "Calcium: 7.8 | Recommendation: Low Calcium: Consume dairy products and calcium supplements\n\
             \n\
             Recommendations:\n\
             -> Low Calcium: Consume dairy products and calcium supplements\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("results.txt")).unwrap(),
            "Calcium: 7.8 | Recommendation: Low Calcium: Consume dairy products and calcium supplements\n"
        );
    }

    #[test]
    fn test_check_json_reads_back() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("labs.txt");
        fs::write(&data, "Iron:inf\n").unwrap();

        let (out, _) = check(&data, &["--json"], &Config::default());
        let report: Report = serde_json::from_str(&out).unwrap();
        assert_eq!(report.findings[0].value, f64::INFINITY);
        assert_eq!(report.recommendations.len(), 1);
    }
}
