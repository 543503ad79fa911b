//! Data export for external analysis
//!
//! CSV export of peak tables, resolution tables and chromatogram traces,
//! compatible with Excel, pandas and most analysis tools.

pub mod csv;

pub use csv::{
    export_chromatogram_csv,
    export_peak_table_csv,
    export_resolution_table_csv,
    CsvConfig,
    CsvMetadata,
};
