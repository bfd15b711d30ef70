// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Nutridose — reference-range evaluation for blood-panel measurements
//!
//! Nutridose checks named measurements (Hemoglobin, Vitamin D, Calcium,
//! Iron, Vitamin B12, Magnesium) against fixed reference ranges and
//! produces a recommendation for every value outside its range.
//!
//! ## Quick Start
//!
//! ```rust
//! use nutridose::{evaluate, MeasurementSet};
//!
//! let measurements: MeasurementSet = [("Hemoglobin", 10.5), ("Calcium", 7.8)]
//!     .into_iter()
//!     .collect();
//!
//! let (results, mut queue) = evaluate(&measurements)?;
//! assert_eq!(results.len(), 2);
//! assert_eq!(
//!     queue.dequeue().as_deref(),
//!     Some("Low Hemoglobin: Take Iron supplements 15 mg/day")
//! );
//! # Ok::<(), nutridose::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                                                           │
//! │  SOURCES                                                  │
//! │    example_measurements() ─┐                              │
//! │    prompt_measurements()  ─┼──► MeasurementSet            │
//! │    read_measurements_file()┘         │                    │
//! │                                      ▼                    │
//! │  CORE                         evaluate(set)               │
//! │    REFERENCE_TABLE ──► classify(param, value)             │
//! │                                      │                    │
//! │                       ┌──────────────┴──────────┐         │
//! │                       ▼                         ▼         │
//! │               ResultSequence          RecommendationQueue │
//! │            (display, export)           (drain once)       │
//! │                                                           │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod measurement;
pub mod queue;
pub mod reference;
pub mod report;
pub mod results;
pub mod source;

// Re-exports
pub use classify::{classify, Finding, Severity, HIGH_ADVICE};
pub use config::Config;
pub use error::{Error, Result};
pub use evaluate::evaluate;
pub use measurement::MeasurementSet;
pub use queue::RecommendationQueue;
pub use reference::{bounds_of, lookup, recommendation_of, ReferenceEntry, REFERENCE_TABLE};
pub use report::Report;
pub use results::ResultSequence;
pub use source::{
    example_measurements, parse_measurements, parse_results, prompt_measurements,
    read_measurements_file, read_results_file, Parsed,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
