//! Result sequence — ordered, append-only findings of one evaluation pass
//!
//! Findings are kept in evaluation order and never removed or reordered.
//! Reading (display, export, iteration) has no side effects and can be
//! repeated any number of times.

use crate::classify::Finding;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Findings in the order they were evaluated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSequence {
    findings: Vec<Finding>,
}

impl ResultSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding at the end
    pub fn append(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Restartable traversal in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }

    /// Visit every finding in insertion order
    pub fn for_each<F: FnMut(&Finding)>(&self, visitor: F) {
        self.findings.iter().for_each(visitor);
    }

    /// One export line per finding
    pub fn export_lines(&self) -> Vec<String> {
        self.findings.iter().map(Finding::to_line).collect()
    }

    /// Export lines joined, each newline-terminated
    pub fn export_text(&self) -> String {
        let mut text = String::new();
        for line in self.export_lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }

    /// Write the export text to `path`, replacing any existing file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.export_text())?;
        tracing::debug!(path = %path.display(), findings = self.len(), "results saved");
        Ok(())
    }

    /// Write the console view (same lines as the export)
    pub fn write_display<W: Write>(&self, out: &mut W) -> Result<()> {
        for finding in &self.findings {
            writeln!(out, "{}", finding)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ResultSequence {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Finding> for ResultSequence {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        Self {
            findings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> ResultSequence {
        [("Hemoglobin", 10.5), ("Magnesium", 3.0)]
            .into_iter()
            .filter_map(|(p, v)| classify(p, v).unwrap())
            .collect()
    }

    #[test]
    fn test_export_lines() {
        assert_eq!(
            sample().export_lines(),
            vec![
                "Hemoglobin: 10.5 | Recommendation: Low Hemoglobin: Take Iron supplements 15 mg/day",
                "Magnesium: 3 | Recommendation: High Magnesium: Adjust diet and consult physician",
            ]
        );
    }

    #[test]
    fn test_traversal_is_restartable() {
        let results = sample();
        let first: Vec<_> = results.iter().map(|f| f.parameter.clone()).collect();
        let mut second = Vec::new();
        results.for_each(|f| second.push(f.parameter.clone()));
        assert_eq!(first, second);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_display_matches_export() {
        let results = sample();
        let mut out = Vec::new();
        results.write_display(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), results.export_text());
    }

    #[test]
    fn test_save_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.txt");
        fs::write(&path, "stale contents\nmore\nand more\n").unwrap();

        let results = sample();
        results.save_to_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), results.export_text());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("results.txt");
        assert!(sample().save_to_file(&path).is_err());
    }

    #[test]
    fn test_empty_export() {
        let results = ResultSequence::new();
        assert!(results.is_empty());
        assert_eq!(results.export_text(), "");
    }
}
