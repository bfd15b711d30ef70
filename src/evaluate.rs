//! Evaluation pipeline
//!
//! ```text
//! MeasurementSet ──► classify(param, value) ──► Finding
//!                                                 ├──► ResultSequence::append
//!                                                 └──► RecommendationQueue::enqueue(message)
//! ```
//!
//! Both containers are filled in the same order and then handed back
//! independently; draining the queue does not touch the results.

use crate::classify::classify;
use crate::error::Result;
use crate::measurement::MeasurementSet;
use crate::queue::RecommendationQueue;
use crate::results::ResultSequence;

/// Evaluate every measurement in iteration order
///
/// Parameters missing from the set are never evaluated. A parameter that
/// is not in the reference table aborts the pass with
/// `Error::UnknownParameter`.
pub fn evaluate(
    measurements: &MeasurementSet,
) -> Result<(ResultSequence, RecommendationQueue)> {
    let mut results = ResultSequence::new();
    let mut queue = RecommendationQueue::new();

    for (parameter, value) in measurements {
        if let Some(finding) = classify(parameter, value)? {
            queue.enqueue(finding.message.clone());
            results.append(finding);
        }
    }

    tracing::debug!(
        measurements = measurements.len(),
        findings = results.len(),
        "evaluation complete"
    );

    Ok((results, queue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_set() {
        let (results, queue) = evaluate(&MeasurementSet::new()).unwrap();
        assert!(results.is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_normal_values_produce_nothing() {
        let set: MeasurementSet = [("Hemoglobin", 14.0), ("Iron", 60.0)].into_iter().collect();
        let (results, queue) = evaluate(&set).unwrap();
        assert!(results.is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_mirrors_results() {
        let set: MeasurementSet = [("Magnesium", 2.5), ("Calcium", 9.0), ("Iron", 10.0)]
            .into_iter()
            .collect();
        let (results, mut queue) = evaluate(&set).unwrap();

        let messages: Vec<_> = results.iter().map(|f| f.message.clone()).collect();
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(messages, drained);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_unknown_parameter_fails_fast() {
        let set: MeasurementSet = [("Hemoglobin", 10.5), ("Zinc", 1.0)].into_iter().collect();
        let err = evaluate(&set).unwrap_err();
        assert!(matches!(err, Error::UnknownParameter(ref name) if name == "Zinc"));
    }
}
