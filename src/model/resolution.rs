//! Pairwise resolution and co-elution classification
//!
//! Implements the pharmacopeial-style resolution statistic between peaks
//! that are adjacent in retention time:
//!
//! ```text
//! Rs = 2 * |tr_{i+1} - tr_i| / (w_i + w_{i+1})
//! ```
//!
//! A pair with `Rs < 2.0` is classified as co-eluting; `Rs ≥ 2.0`
//! conventionally means baseline-separated. This is a deterministic
//! classification heuristic, not a physical simulation of peak overlap.
//!
//! Resolution is computed **only** between retention-time-adjacent pairs,
//! never between all pairs: `n` peaks produce exactly `max(0, n - 1)`
//! records.

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::model::geometry::PeakRecord;

/// Pairs below this resolution are classified as co-eluting.
pub const COELUTION_THRESHOLD: f64 = 2.0;

// =================================================================================================
// ResolutionRecord
// =================================================================================================

/// Resolution between two retention-time-adjacent peaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// The two component names, in retention-time order.
    pub pair: (String, String),
    /// The Rs statistic (dimensionless, non-negative).
    pub resolution: f64,
    /// True exactly when `resolution < 2.0`.
    pub coeluting: bool,
}

// =================================================================================================
// Classifier
// =================================================================================================

/// Classify every retention-time-adjacent pair of the given peaks.
///
/// Peaks are sorted ascending by retention time first (stable: peaks with
/// identical retention times keep their input order). Fewer than two peaks
/// produce an empty sequence without error.
///
/// # Errors
///
/// [`EvaluationError::InvalidParameter`] when any peak carries a
/// non-positive or non-finite width or a non-finite retention time. Such
/// values would turn the Rs quotient into NaN or garbage and indicate a
/// contract violation upstream.
///
/// # Example
///
/// ```rust
/// use hplc_rs::model::resolve;
///
/// // Zero or one peak: nothing to compare.
/// assert!(resolve(&[]).unwrap().is_empty());
/// ```
pub fn resolve(peaks: &[PeakRecord]) -> Result<Vec<ResolutionRecord>, EvaluationError> {
    for peak in peaks {
        if !peak.width.is_finite() || peak.width <= 0.0 {
            return Err(EvaluationError::parameter(
                "width",
                peak.width,
                "strictly positive finite peak width",
            ));
        }
        if !peak.retention_time.is_finite() {
            return Err(EvaluationError::parameter(
                "retention_time",
                peak.retention_time,
                "finite retention time",
            ));
        }
    }

    let mut ordered: Vec<&PeakRecord> = peaks.iter().collect();
    ordered.sort_by(|a, b| a.retention_time.total_cmp(&b.retention_time));

    let records = ordered
        .windows(2)
        .map(|pair| {
            let (first, second) = (pair[0], pair[1]);
            let resolution = 2.0 * (second.retention_time - first.retention_time).abs()
                / (first.width + second.width);
            ResolutionRecord {
                pair: (first.name().to_string(), second.name().to_string()),
                resolution,
                coeluting: resolution < COELUTION_THRESHOLD,
            }
        })
        .collect();

    Ok(records)
}

// =================================================================================================
// Tests
// =================================================================================================
