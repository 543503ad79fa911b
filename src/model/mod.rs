//! The separation model
//!
//! The computational core of the crate, split into three units plus the
//! orchestration that ties them together:
//!
//! - [`retention`]: the retention-time transfer function, i.e. how the three
//!   instrument parameters scale each component's base retention time.
//! - [`geometry`]: peak width, leading/trailing edges and the theoretical
//!   plate-count estimate.
//! - [`resolution`]: pairwise Rs between retention-time-adjacent peaks and
//!   the co-elution classification.
//! - [`evaluation`]: the forward pass producing a [`Separation`] from a
//!   reference table and an [`InstrumentParameters`] value.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, no randomness.
//!
//! [`InstrumentParameters`]: crate::instrument::InstrumentParameters

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod evaluation;
pub mod geometry;
pub mod resolution;
pub mod retention;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use evaluation::{evaluate, evaluate_many, Separation};
pub use geometry::{peak_geometry, PeakGeometry, PeakRecord};
pub use resolution::{resolve, ResolutionRecord, COELUTION_THRESHOLD};
pub use retention::retention_time;
