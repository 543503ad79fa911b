//! Chemical component reference data
//!
//! A [`ComponentSpec`] describes one analyte: its name, the retention time it
//! shows at the reference operating point, and the sign of its response to
//! the organic-modifier percentage of the mobile phase.
//!
//! # Mobile-phase response
//!
//! Most analytes in this model retain longer as the organic modifier
//! increases ([`MobilePhaseResponse::Direct`]). Dipirona is the exception: it
//! elutes earlier as the modifier increases ([`MobilePhaseResponse::Inverse`]).
//! The sign lives on the component so new analytes can be added without
//! touching the transfer function.

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;

// =================================================================================================
// MobilePhaseResponse
// =================================================================================================

/// Direction and strength of a component's response to the mobile-phase
/// composition.
///
/// Each variant carries a fixed empirical coefficient applied per percentage
/// point of deviation from the 50 % reference composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobilePhaseResponse {
    /// Retention increases with the organic modifier (+0.02 per %).
    Direct,

    /// Retention decreases with the organic modifier (−0.015 per %).
    Inverse,
}

impl MobilePhaseResponse {
    /// Empirical sensitivity coefficient \[1/%\].
    pub fn coefficient(&self) -> f64 {
        match self {
            Self::Direct => 0.02,
            Self::Inverse => -0.015,
        }
    }
}

// =================================================================================================
// ComponentSpec
// =================================================================================================

/// Static reference data for one chemical component.
///
/// # Example
///
/// ```rust
/// use hplc_rs::chemistry::{ComponentSpec, MobilePhaseResponse};
///
/// let caffeine = ComponentSpec::new("Cafeína", 4.0, MobilePhaseResponse::Direct);
/// assert!(caffeine.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component identifier, unique within a reference table.
    pub name: String,

    /// Retention time at the reference operating point \[min\], must be > 0.
    pub base_retention_time: f64,

    /// Sign of the mobile-phase sensitivity.
    pub phase_response: MobilePhaseResponse,
}

impl ComponentSpec {
    /// Create a component spec.
    ///
    /// This constructor does not validate; call [`validate`](Self::validate)
    /// (or let [`ReferenceTable`](crate::chemistry::ReferenceTable) do it)
    /// before evaluation.
    pub fn new(
        name: impl Into<String>,
        base_retention_time: f64,
        phase_response: MobilePhaseResponse,
    ) -> Self {
        Self {
            name: name.into(),
            base_retention_time,
            phase_response,
        }
    }

    /// Check the physical constraints of the component.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::InvalidReferenceTable`] when the name is empty or
    /// the base retention time is not a positive finite number.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if self.name.is_empty() {
            return Err(EvaluationError::table("component with empty name"));
        }
        if !self.base_retention_time.is_finite() || self.base_retention_time <= 0.0 {
            return Err(EvaluationError::table(format!(
                "component `{}` has non-positive base retention time {}",
                self.name, self.base_retention_time
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
