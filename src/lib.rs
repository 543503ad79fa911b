//! hplc-rs: Didactic HPLC Separation Simulator
//!
//! A deterministic, parameter-driven model of a liquid-chromatography
//! separation for teaching. Given three instrument parameters (mobile-phase
//! flow rate, column temperature, organic-modifier percentage) and a table
//! of components, it computes retention times, peak shapes, theoretical
//! plate counts, pairwise resolution and co-elution classification.
//!
//! # Architecture
//!
//! The crate is built on two principles:
//!
//! 1. **Separation of Chemistry and Evaluation**
//!    - Reference data describe the components (what elutes)
//!    - The model computes the separation (how it elutes)
//!
//! 2. **Pure, Stateless Evaluation**
//!    - Explicit inputs, no shared mutable state
//!    - Bit-identical results for identical inputs
//!    - Safe to run concurrently for different parameter sets
//!
//! This is *not* a rigorous chromatography solver: no mass transfer, column
//! physics or analyte thermodynamics. Just an empirical transfer function tuned
//! for classroom intuition.
//!
//! # Quick Start
//!
//! ```rust
//! use hplc_rs::prelude::*;
//!
//! // 1. Pick a reference table (or build your own)
//! let table = ReferenceTable::dorflex();
//!
//! // 2. Set the instrument parameters
//! let params = InstrumentParameters::new(
//!     1.2,    // flow [mL/min]
//!     30.0,   // temperature [°C]
//!     60.0,   // mobile phase [% organic]
//! )?;
//!
//! // 3. Evaluate the separation
//! let separation = evaluate(&table, &params)?;
//!
//! // 4. Inspect results
//! for peak in separation.peaks() {
//!     println!(
//!         "{:<12} tR = {:.2} min, N = {} plates",
//!         peak.name(), peak.retention_time, peak.theoretical_plates,
//!     );
//! }
//! for record in separation.resolutions() {
//!     println!(
//!         "{} / {}: Rs = {:.2}{}",
//!         record.pair.0, record.pair.1, record.resolution,
//!         if record.coeluting { "  <- co-eluting!" } else { "" },
//!     );
//! }
//! # Ok::<(), hplc_rs::EvaluationError>(())
//! ```
//!
//! # Modules
//!
//! - [`instrument`]: tunable instrument parameters and their domains
//! - [`chemistry`]: component specs and reference tables
//! - [`model`]: the core (retention, peak geometry, resolution)
//! - [`signal`]: dense chromatogram sampling for rendering collaborators
//! - [`output`]: CSV export of tables and traces

// Core modules
pub mod chemistry;
pub mod error;
pub mod instrument;
pub mod model;

pub mod output;
pub mod signal;

pub use error::EvaluationError;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use hplc_rs::prelude::*;
    //! ```
    pub use crate::chemistry::{ComponentSpec,
                               MobilePhaseResponse,
                               ReferenceTable};
    pub use crate::error::EvaluationError;
    pub use crate::instrument::InstrumentParameters;
    pub use crate::model::{evaluate,
                           evaluate_many,
                           PeakRecord,
                           ResolutionRecord,
                           Separation,
                           COELUTION_THRESHOLD};
    pub use crate::signal::Chromatogram;
}
