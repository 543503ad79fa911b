//! Evaluation pipeline
//!
//! One evaluation is a single deterministic forward pass:
//!
//! ```text
//! parameters ──▶ retention time ──▶ peak geometry ──▶ sort by retention
//!                                                          │
//!                              resolution records ◀────────┘
//! ```
//!
//! No feedback loops, no hidden state: the output is a pure function of the
//! reference table and the instrument parameters, recomputed from scratch on
//! every call. Independent evaluations may run concurrently from different
//! threads; nothing here is shared or mutated.
//!
//! # Example
//!
//! ```rust
//! use hplc_rs::chemistry::ReferenceTable;
//! use hplc_rs::instrument::InstrumentParameters;
//! use hplc_rs::model::evaluate;
//!
//! let separation = evaluate(
//!     &ReferenceTable::dorflex(),
//!     &InstrumentParameters::reference(),
//! ).unwrap();
//!
//! assert_eq!(separation.peaks().len(), 3);
//! assert_eq!(separation.resolutions().len(), 2);
//! assert!(separation.fully_resolved());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chemistry::ReferenceTable;
use crate::error::EvaluationError;
use crate::instrument::InstrumentParameters;
use crate::model::geometry::{peak_geometry, PeakRecord};
use crate::model::resolution::{resolve, ResolutionRecord};
use crate::model::retention::retention_time;

// =================================================================================================
// Separation
// =================================================================================================

/// The complete result of one evaluation.
///
/// Peaks are sorted ascending by retention time; resolutions cover exactly
/// the retention-time-adjacent pairs, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    peaks: Vec<PeakRecord>,
    resolutions: Vec<ResolutionRecord>,
}

impl Separation {
    /// Peaks in elution order.
    pub fn peaks(&self) -> &[PeakRecord] {
        &self.peaks
    }

    /// Resolution records for adjacent pairs, in elution order.
    pub fn resolutions(&self) -> &[ResolutionRecord] {
        &self.resolutions
    }

    /// Look up a peak by component name.
    pub fn peak(&self, name: &str) -> Option<&PeakRecord> {
        self.peaks.iter().find(|p| p.name() == name)
    }

    /// True when no adjacent pair is classified as co-eluting.
    pub fn fully_resolved(&self) -> bool {
        self.resolutions.iter().all(|r| !r.coeluting)
    }
}

// =================================================================================================
// Evaluation
// =================================================================================================

/// Evaluate the separation of a reference table under the given parameters.
///
/// Validates both inputs before computing, then runs the forward pass:
/// retention times, peak geometry, elution ordering, pairwise resolution.
///
/// # Errors
///
/// - [`EvaluationError::InvalidParameter`] for out-of-domain instrument
///   parameters, or if any derived quantity comes out non-finite.
/// - [`EvaluationError::InvalidReferenceTable`] for an unusable table.
pub fn evaluate(
    table: &ReferenceTable,
    params: &InstrumentParameters,
) -> Result<Separation, EvaluationError> {
    // ====== Step 1: Validation ======

    params.validate()?;
    table.validate()?;

    debug!(
        "evaluating {} components (flow {} mL/min, {} °C, {} % organic)",
        table.len(),
        params.flow,
        params.temperature,
        params.mobile_phase_percent
    );

    // ====== Step 2: Retention and geometry per component ======

    let mut peaks: Vec<PeakRecord> = table
        .components()
        .iter()
        .map(|component| {
            let tr = retention_time(component, params);
            let geometry = peak_geometry(tr, params);
            PeakRecord::new(component.clone(), tr, geometry)
        })
        .collect();

    // ====== Step 3: Boundary guard ======

    // In-domain inputs cannot produce these, so any hit is a defect that
    // must surface as an error instead of flowing into output records.
    for peak in &peaks {
        verify_peak(peak)?;
    }

    // ====== Step 4: Elution ordering and classification ======

    // Stable: components with identical retention times keep table order.
    peaks.sort_by(|a, b| a.retention_time.total_cmp(&b.retention_time));

    let resolutions = resolve(&peaks)?;

    debug!(
        "{} of {} adjacent pairs co-eluting",
        resolutions.iter().filter(|r| r.coeluting).count(),
        resolutions.len()
    );

    Ok(Separation { peaks, resolutions })
}

/// Evaluate several parameter sets against the same table.
///
/// Each evaluation is independent; with the `parallel` feature the batch
/// fans out across threads via rayon, with identical results either way.
/// A failing evaluation aborts the whole batch.
pub fn evaluate_many(
    table: &ReferenceTable,
    params: &[InstrumentParameters],
) -> Result<Vec<Separation>, EvaluationError> {
    #[cfg(feature = "parallel")]
    let results: Result<Vec<Separation>, EvaluationError> = {
        use rayon::prelude::*;
        params.par_iter().map(|p| evaluate(table, p)).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<Separation>, EvaluationError> =
        params.iter().map(|p| evaluate(table, p)).collect();

    results
}

/// Reject records carrying NaN, infinity or a non-positive width.
fn verify_peak(peak: &PeakRecord) -> Result<(), EvaluationError> {
    if !peak.retention_time.is_finite() || peak.retention_time <= 0.0 {
        return Err(EvaluationError::parameter(
            "retention_time",
            peak.retention_time,
            "strictly positive finite retention time",
        ));
    }
    if !peak.width.is_finite() || peak.width <= 0.0 {
        return Err(EvaluationError::parameter(
            "width",
            peak.width,
            "strictly positive finite peak width",
        ));
    }
    if !peak.start.is_finite() || !peak.end.is_finite() {
        return Err(EvaluationError::parameter(
            "span",
            peak.end - peak.start,
            "finite peak span",
        ));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
