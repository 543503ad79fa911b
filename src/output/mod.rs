//! Output module for separation results
//!
//! Turns evaluation results into files a reporting collaborator can consume.
//! Only data export lives here; chart rendering and report assembly belong
//! to the presentation layer, which consumes the exported series.
//!
//! ```text
//! output/
//! ├── mod.rs       ← This file
//! └── export/      ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```

pub mod export;

// Re-export commonly used items for convenience
pub use export::{
    export_chromatogram_csv,
    export_peak_table_csv,
    export_resolution_table_csv,
    CsvConfig,
    CsvMetadata,
};
