//! Peak geometry and plate-count estimation
//!
//! Converts a retention time plus the instrument parameters into the shape
//! of the eluted peak:
//!
//! ```text
//! width  = 0.15 + flow * 0.05 + |temperature - 35| * 0.005
//! width *= 1 + |mobile_phase_percent - 50| / 200
//! start  = tr - 2 * width
//! end    = tr + 2 * width
//! plates = round(16 * (tr / (end - start))^2)
//! ```
//!
//! Width grows with flow, with deviation of the temperature from the 35 °C
//! reference, and with deviation of the mobile-phase composition from 50 %.
//! It is strictly positive for every in-domain parameter set.
//!
//! The plate count divides the retention time by the **full base-width span**
//! `end - start` (which equals `4 * width` by construction), while the
//! Gaussian rendered for display uses `σ = (end - start) / 4`; the two
//! divisors are intentionally not the same quantity.

use serde::{Deserialize, Serialize};

use crate::chemistry::ComponentSpec;
use crate::instrument::{InstrumentParameters, REFERENCE_MOBILE_PHASE, REFERENCE_TEMPERATURE};

// =================================================================================================
// Width model constants
// =================================================================================================

/// Intrinsic peak width at zero broadening \[min\].
pub const BASE_WIDTH: f64 = 0.15;
/// Broadening per mL/min of flow \[min·min/mL\].
pub const FLOW_BROADENING: f64 = 0.05;
/// Broadening per °C of deviation from the reference temperature \[min/°C\].
pub const TEMPERATURE_BROADENING: f64 = 0.005;
/// Divisor scaling the mobile-phase deviation into a width multiplier.
pub const PHASE_BROADENING_SCALE: f64 = 200.0;
/// Peak start/end sit this many widths from the apex.
pub const HALF_SPAN_WIDTHS: f64 = 2.0;

// =================================================================================================
// PeakGeometry
// =================================================================================================

/// Shape of one eluted peak, before it is attached to a component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakGeometry {
    /// Peak width \[min\], always > 0 for in-domain parameters.
    pub width: f64,
    /// Leading edge of the peak \[min\] (`retention_time - 2 * width`).
    pub start: f64,
    /// Trailing edge of the peak \[min\] (`retention_time + 2 * width`).
    pub end: f64,
    /// Theoretical plate count estimated from retention time and span.
    pub theoretical_plates: u32,
}

/// Compute the peak geometry for a given retention time.
///
/// Pure function of its arguments; the caller is responsible for having
/// validated the parameters (width is guaranteed strictly positive only
/// inside the documented domains).
pub fn peak_geometry(retention_time: f64, params: &InstrumentParameters) -> PeakGeometry {
    let mut width = BASE_WIDTH
        + params.flow * FLOW_BROADENING
        + (params.temperature - REFERENCE_TEMPERATURE).abs() * TEMPERATURE_BROADENING;
    width *= 1.0
        + (params.mobile_phase_percent - REFERENCE_MOBILE_PHASE).abs() / PHASE_BROADENING_SCALE;

    let start = retention_time - HALF_SPAN_WIDTHS * width;
    let end = retention_time + HALF_SPAN_WIDTHS * width;

    // Plate count uses the full span (4 widths), not the width itself.
    let span = end - start;
    let theoretical_plates = (16.0 * (retention_time / span).powi(2)).round() as u32;

    PeakGeometry { width, start, end, theoretical_plates }
}

// =================================================================================================
// PeakRecord
// =================================================================================================

/// One component's peak for a single evaluation.
///
/// Created fresh on every evaluation, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakRecord {
    /// The component this peak belongs to.
    pub component: ComponentSpec,
    /// Retention time \[min\].
    pub retention_time: f64,
    /// Peak width \[min\].
    pub width: f64,
    /// Leading edge \[min\].
    pub start: f64,
    /// Trailing edge \[min\].
    pub end: f64,
    /// Theoretical plate count.
    pub theoretical_plates: u32,
}

impl PeakRecord {
    /// Attach a computed geometry to a component.
    pub fn new(component: ComponentSpec, retention_time: f64, geometry: PeakGeometry) -> Self {
        Self {
            component,
            retention_time,
            width: geometry.width,
            start: geometry.start,
            end: geometry.end,
            theoretical_plates: geometry.theoretical_plates,
        }
    }

    /// Component name shorthand.
    pub fn name(&self) -> &str {
        &self.component.name
    }

    /// Standard deviation of the displayed Gaussian \[min\].
    ///
    /// Defined as `(end - start) / 4`, which equals `width`. Not the same
    /// divisor as the plate-count estimate, which uses the full span.
    pub fn sigma(&self) -> f64 {
        (self.end - self.start) / 4.0
    }

    /// Detector response of this peak at time `t` \[arbitrary units\].
    ///
    /// A Gaussian of height 1.0 centred on the retention time. Absolute
    /// intensity is not modelled; only relative/shape information matters.
    pub fn response_at(&self, t: f64) -> f64 {
        let sigma = self.sigma();
        let distance = (t - self.retention_time) / sigma;
        (-distance * distance / 2.0).exp()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
