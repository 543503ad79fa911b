//! Chromatogram sampling
//!
//! Turns a [`Separation`] into dense detector traces a plotting collaborator
//! can render: a uniform time axis, one Gaussian trace per component
//! (height 1.0, σ = peak width) and their pointwise sum as the combined
//! signal.
//!
//! Rendering itself (charts, dashboards, reports) is not this crate's job;
//! this module only produces the numeric series.
//!
//! # Example
//!
//! ```rust
//! use hplc_rs::chemistry::ReferenceTable;
//! use hplc_rs::instrument::InstrumentParameters;
//! use hplc_rs::model::evaluate;
//! use hplc_rs::signal::Chromatogram;
//!
//! let separation = evaluate(
//!     &ReferenceTable::dorflex(),
//!     &InstrumentParameters::reference(),
//! ).unwrap();
//!
//! let chromatogram = Chromatogram::sample_default(&separation).unwrap();
//! assert_eq!(chromatogram.len(), 2000);
//!
//! // The combined trace peaks where the components elute.
//! assert!(chromatogram.combined().max() > 0.99);
//! ```

use log::debug;
use nalgebra::DVector;

use crate::error::EvaluationError;
use crate::model::Separation;

/// Start of the default sampling window \[min\].
pub const DEFAULT_WINDOW_START: f64 = 0.0;
/// End of the default sampling window \[min\].
pub const DEFAULT_WINDOW_END: f64 = 20.0;
/// Number of samples in the default window.
pub const DEFAULT_SAMPLES: usize = 2000;

// =================================================================================================
// Chromatogram
// =================================================================================================

/// Densely sampled detector traces for one separation.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromatogram {
    time: DVector<f64>,
    traces: Vec<(String, DVector<f64>)>,
    combined: DVector<f64>,
}

impl Chromatogram {
    /// Sample a separation over `[start, end]` with `points` uniform samples.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::InvalidParameter`] when `points < 2` or the window
    /// is non-finite or empty.
    pub fn sample(
        separation: &Separation,
        start: f64,
        end: f64,
        points: usize,
    ) -> Result<Self, EvaluationError> {
        if points < 2 {
            return Err(EvaluationError::parameter(
                "points",
                points as f64,
                "at least 2 samples",
            ));
        }
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(EvaluationError::parameter(
                "window",
                end - start,
                "finite window with end > start",
            ));
        }

        // Direct index calculation keeps the last sample exactly at `end`
        // instead of accumulating rounding error step by step.
        let dt = (end - start) / (points as f64 - 1.0);
        let time = DVector::from_fn(points, |i, _| start + i as f64 * dt);

        let mut combined = DVector::zeros(points);
        let mut traces = Vec::with_capacity(separation.peaks().len());

        for peak in separation.peaks() {
            let trace = DVector::from_fn(points, |i, _| peak.response_at(time[i]));
            combined += &trace;
            traces.push((peak.name().to_string(), trace));
        }

        debug!(
            "sampled {} traces over [{}, {}] min at {} points",
            traces.len(),
            start,
            end,
            points
        );

        Ok(Self { time, traces, combined })
    }

    /// Sample over the default 0–20 min window at 2000 points.
    pub fn sample_default(separation: &Separation) -> Result<Self, EvaluationError> {
        Self::sample(
            separation,
            DEFAULT_WINDOW_START,
            DEFAULT_WINDOW_END,
            DEFAULT_SAMPLES,
        )
    }

    /// The uniform time axis \[min\].
    pub fn time(&self) -> &DVector<f64> {
        &self.time
    }

    /// Per-component traces, in elution order.
    pub fn traces(&self) -> &[(String, DVector<f64>)] {
        &self.traces
    }

    /// Trace for one component, if present.
    pub fn trace(&self, name: &str) -> Option<&DVector<f64>> {
        self.traces
            .iter()
            .find(|(trace_name, _)| trace_name == name)
            .map(|(_, trace)| trace)
    }

    /// Pointwise sum of all component traces.
    pub fn combined(&self) -> &DVector<f64> {
        &self.combined
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the chromatogram holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.len() == 0
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::{ReferenceTable, CAFEINA};
    use crate::instrument::InstrumentParameters;
    use crate::model::evaluate;

    fn default_separation() -> Separation {
        evaluate(&ReferenceTable::dorflex(), &InstrumentParameters::reference()).unwrap()
    }

    #[test]
    fn test_default_window() {
        let chromatogram = Chromatogram::sample_default(&default_separation()).unwrap();

        assert_eq!(chromatogram.len(), 2000);
        assert_eq!(chromatogram.time()[0], 0.0);
        assert!((chromatogram.time()[1999] - 20.0).abs() < 1e-12);
        assert_eq!(chromatogram.traces().len(), 3);
    }

    #[test]
    fn test_trace_peaks_near_retention_time() {
        let separation = default_separation();
        let chromatogram = Chromatogram::sample(&separation, 0.0, 20.0, 2001).unwrap();

        // With 2001 points over [0, 20], t = 4.0 lands exactly on a sample.
        let caffeine = chromatogram.trace(CAFEINA).unwrap();
        let index = 400; // 4.0 / (20 / 2000)
        assert!((chromatogram.time()[index] - 4.0).abs() < 1e-12);
        assert!((caffeine[index] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_is_pointwise_sum() {
        let chromatogram = Chromatogram::sample(&default_separation(), 0.0, 20.0, 500).unwrap();

        for i in 0..chromatogram.len() {
            let sum: f64 = chromatogram.traces().iter().map(|(_, t)| t[i]).sum();
            assert!((chromatogram.combined()[i] - sum).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unknown_trace_name() {
        let chromatogram = Chromatogram::sample_default(&default_separation()).unwrap();
        assert!(chromatogram.trace("Paracetamol").is_none());
    }

    #[test]
    fn test_invalid_windows_rejected() {
        let separation = default_separation();

        assert!(Chromatogram::sample(&separation, 0.0, 20.0, 1).is_err());
        assert!(Chromatogram::sample(&separation, 0.0, 20.0, 0).is_err());
        assert!(Chromatogram::sample(&separation, 20.0, 0.0, 100).is_err());
        assert!(Chromatogram::sample(&separation, 0.0, 0.0, 100).is_err());
        assert!(Chromatogram::sample(&separation, 0.0, f64::NAN, 100).is_err());
    }
}
