//! Retention-time transfer function
//!
//! The empirical "physics" of the simulator. A component's retention time is
//! its base retention time scaled by three independent factors:
//!
//! ```text
//! flow_factor        = 1 / flow
//! temperature_factor = 1 - (temperature - 35) * 0.01
//! phase_factor       = 1 + (mobile_phase_percent - 50) * coefficient
//! tr                 = base_tr * flow_factor * temperature_factor * phase_factor
//! ```
//!
//! where `coefficient` is the component's mobile-phase sensitivity
//! ([`MobilePhaseResponse::coefficient`](crate::chemistry::MobilePhaseResponse::coefficient)).
//! At the reference operating point all three factors equal 1 and the
//! component elutes exactly at its base retention time.
//!
//! Every factor is strictly positive over the documented parameter domains,
//! so retention times are strictly positive for valid inputs. The division
//! by `flow` is safe because [`InstrumentParameters`] rejects zero flow
//! before this function runs.

use crate::chemistry::ComponentSpec;
use crate::instrument::{InstrumentParameters, REFERENCE_MOBILE_PHASE, REFERENCE_TEMPERATURE};

/// Retention shortening per °C above the reference temperature \[1/°C\].
pub const TEMPERATURE_SENSITIVITY: f64 = 0.01;

/// Compute a component's retention time \[min\] under the given conditions.
///
/// Pure function: no side effects, no hidden state; identical inputs give
/// bit-identical results.
///
/// # Example
///
/// ```rust
/// use hplc_rs::chemistry::ReferenceTable;
/// use hplc_rs::instrument::InstrumentParameters;
/// use hplc_rs::model::retention_time;
///
/// let table = ReferenceTable::dorflex();
/// let caffeine = table.get("Cafeína").unwrap();
///
/// // At the reference point the base time comes back unchanged.
/// let tr = retention_time(caffeine, &InstrumentParameters::reference());
/// assert_eq!(tr, 4.0);
/// ```
pub fn retention_time(component: &ComponentSpec, params: &InstrumentParameters) -> f64 {
    let flow_factor = 1.0 / params.flow;
    let temperature_factor =
        1.0 - (params.temperature - REFERENCE_TEMPERATURE) * TEMPERATURE_SENSITIVITY;
    let phase_factor = 1.0
        + (params.mobile_phase_percent - REFERENCE_MOBILE_PHASE)
            * component.phase_response.coefficient();

    component.base_retention_time * flow_factor * temperature_factor * phase_factor
}

// =================================================================================================
// Tests
// =================================================================================================
