//! Instrument operating parameters
//!
//! The three user-tunable knobs of the simulated instrument. Each parameter
//! has a documented domain; values outside it are rejected before any
//! computation runs.
//!
//! | Parameter              | Unit   | Domain       | Effect on separation            |
//! |------------------------|--------|--------------|---------------------------------|
//! | `flow`                 | mL/min | [0.5, 2.0]   | Higher flow → earlier elution   |
//! | `temperature`          | °C     | [25, 40]     | Higher temperature → earlier    |
//! | `mobile_phase_percent` | %      | [10, 90]     | Sign depends on the component   |
//!
//! The **reference operating point** (flow 1.0, temperature 35, mobile phase
//! 50%) is the condition under which every component elutes exactly at its
//! base retention time.
//!
//! # Example
//!
//! ```rust
//! use hplc_rs::instrument::InstrumentParameters;
//!
//! let params = InstrumentParameters::new(1.2, 30.0, 60.0).unwrap();
//! assert!(params.validate().is_ok());
//!
//! // Out-of-domain values are rejected up front.
//! assert!(InstrumentParameters::new(0.0, 35.0, 50.0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;

// =================================================================================================
// Parameter domains
// =================================================================================================

/// Minimum mobile-phase flow rate \[mL/min\].
pub const FLOW_MIN: f64 = 0.5;
/// Maximum mobile-phase flow rate \[mL/min\].
pub const FLOW_MAX: f64 = 2.0;

/// Minimum column temperature \[°C\].
pub const TEMPERATURE_MIN: f64 = 25.0;
/// Maximum column temperature \[°C\].
pub const TEMPERATURE_MAX: f64 = 40.0;

/// Minimum organic-modifier percentage \[%\].
pub const MOBILE_PHASE_MIN: f64 = 10.0;
/// Maximum organic-modifier percentage \[%\].
pub const MOBILE_PHASE_MAX: f64 = 90.0;

/// Reference flow rate at which retention factors reduce to 1 \[mL/min\].
pub const REFERENCE_FLOW: f64 = 1.0;
/// Reference column temperature \[°C\].
pub const REFERENCE_TEMPERATURE: f64 = 35.0;
/// Reference organic-modifier percentage \[%\].
pub const REFERENCE_MOBILE_PHASE: f64 = 50.0;

// =================================================================================================
// InstrumentParameters
// =================================================================================================

/// Immutable instrument parameters for one evaluation.
///
/// Fields are public for ergonomic construction in tests and demos, but every
/// entry point of the model calls [`validate`](Self::validate) before
/// computing, so out-of-domain values never reach the transfer functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstrumentParameters {
    /// Mobile-phase flow rate \[mL/min\], domain \[0.5, 2.0\].
    ///
    /// Strictly positive by domain; the retention model divides by it.
    pub flow: f64,

    /// Column temperature \[°C\], domain \[25, 40\].
    pub temperature: f64,

    /// Organic-modifier percentage of the mobile phase \[%\], domain \[10, 90\].
    pub mobile_phase_percent: f64,
}

impl InstrumentParameters {
    /// Create a validated parameter set.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::InvalidParameter`] when any value is non-finite or
    /// outside its documented domain.
    pub fn new(
        flow: f64,
        temperature: f64,
        mobile_phase_percent: f64,
    ) -> Result<Self, EvaluationError> {
        let params = Self { flow, temperature, mobile_phase_percent };
        params.validate()?;
        Ok(params)
    }

    /// The reference operating point (flow 1.0 mL/min, 35 °C, 50 %).
    ///
    /// At this point every retention factor equals 1 and each component
    /// elutes exactly at its base retention time.
    pub fn reference() -> Self {
        Self {
            flow: REFERENCE_FLOW,
            temperature: REFERENCE_TEMPERATURE,
            mobile_phase_percent: REFERENCE_MOBILE_PHASE,
        }
    }

    /// Check every parameter against its domain.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !self.flow.is_finite() || self.flow < FLOW_MIN || self.flow > FLOW_MAX {
            return Err(EvaluationError::parameter(
                "flow",
                self.flow,
                "0.5..=2.0 mL/min",
            ));
        }
        if !self.temperature.is_finite()
            || self.temperature < TEMPERATURE_MIN
            || self.temperature > TEMPERATURE_MAX
        {
            return Err(EvaluationError::parameter(
                "temperature",
                self.temperature,
                "25..=40 °C",
            ));
        }
        if !self.mobile_phase_percent.is_finite()
            || self.mobile_phase_percent < MOBILE_PHASE_MIN
            || self.mobile_phase_percent > MOBILE_PHASE_MAX
        {
            return Err(EvaluationError::parameter(
                "mobile_phase_percent",
                self.mobile_phase_percent,
                "10..=90 %",
            ));
        }
        Ok(())
    }
}

impl Default for InstrumentParameters {
    /// The reference operating point.
    fn default() -> Self {
        Self::reference()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
