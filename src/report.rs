//! JSON report of one evaluation pass

use crate::classify::Finding;
use crate::measurement::MeasurementSet;
use crate::queue::RecommendationQueue;
use crate::results::ResultSequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Machine-readable summary of an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Nutridose Report", description = "Findings and recommendations for one measurement set")]
pub struct Report {
    /// Measurements that were evaluated, in evaluation order
    pub measurements: MeasurementSet,

    /// Out-of-range findings, in evaluation order
    pub findings: Vec<Finding>,

    /// Recommendation messages in dequeue order
    pub recommendations: Vec<String>,
}

impl Report {
    /// Build a report, draining the queue
    pub fn new(
        measurements: &MeasurementSet,
        results: &ResultSequence,
        queue: &mut RecommendationQueue,
    ) -> Self {
        Self {
            measurements: measurements.clone(),
            findings: results.iter().cloned().collect(),
            recommendations: queue.drain().collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
