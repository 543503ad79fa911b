//! CSV export of separation results
//!
//! Three exporters cover the collaborator-facing tables:
//!
//! - [`export_peak_table_csv`]: one row per component (retention time,
//!   width, edges, plate count).
//! - [`export_resolution_table_csv`]: one row per adjacent pair (Rs and the
//!   co-elution flag).
//! - [`export_chromatogram_csv`]: the sampled time axis with one column per
//!   component trace plus the combined signal.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use hplc_rs::output::export_peak_table_csv;
//!
//! export_peak_table_csv(&separation, "peaks.csv", None)?;
//! ```
//!
//! **Output** (`peaks.csv`):
//! ```csv
//! Component,Retention Time (min),Width (min),Start (min),End (min),Theoretical Plates
//! Dipirona,2.000000,0.200000,1.600000,2.400000,100
//! Cafeína,4.000000,0.200000,3.600000,4.400000,400
//! Orfenadrina,6.000000,0.200000,5.600000,6.400000,900
//! ```
//!
//! With metadata enabled, a commented header carries the instrument
//! parameters and a generation timestamp ahead of the column header.

use std::error::Error;
use std::fs::File;
use std::io::Write;

use log::debug;

use crate::instrument::InstrumentParameters;
use crate::model::Separation;
use crate::signal::Chromatogram;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export.
///
/// # Example
///
/// ```rust
/// use hplc_rs::output::CsvConfig;
///
/// let config = CsvConfig::european().precision(3);
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',').
    pub delimiter: char,

    /// Decimal separator (default: '.').
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6).
    pub precision: usize,

    /// Include metadata header comments (default: false).
    pub include_metadata: bool,

    /// Metadata to include in the header.
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon columns, comma decimals).
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision output (12 decimal places).
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata.
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments.
///
/// Only populated fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Mobile-phase flow rate \[mL/min\].
    pub flow: Option<f64>,

    /// Column temperature \[°C\].
    pub temperature: Option<f64>,

    /// Organic-modifier percentage \[%\].
    pub mobile_phase_percent: Option<f64>,

    /// Name of the reference table used (e.g. "dorflex").
    pub table: Option<String>,

    /// Additional custom parameters.
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Capture the instrument parameters of an evaluation.
    pub fn from_parameters(params: &InstrumentParameters) -> Self {
        Self {
            flow: Some(params.flow),
            temperature: Some(params.temperature),
            mobile_phase_percent: Some(params.mobile_phase_percent),
            ..Default::default()
        }
    }

    /// Add a custom parameter line.
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to a file.
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# HPLC Separation Data")?;
    writeln!(file, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(flow) = metadata.flow {
        writeln!(file, "# Flow: {} mL/min", flow)?;
    }
    if let Some(temperature) = metadata.temperature {
        writeln!(file, "# Temperature: {} °C", temperature)?;
    }
    if let Some(phase) = metadata.mobile_phase_percent {
        writeln!(file, "# Mobile Phase: {} %", phase)?;
    }
    if let Some(table) = &metadata.table {
        writeln!(file, "# Reference Table: {}", table)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;
    Ok(())
}

/// Format a number with configured precision and decimal separator.
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Open the file and write the optional metadata header.
fn open_with_header(
    output_path: &str,
    configuration: &CsvConfig,
) -> Result<File, Box<dyn Error>> {
    let mut file = File::create(output_path)?;
    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }
    Ok(file)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export the peak table (one row per component) to CSV.
///
/// # Errors
///
/// File creation/write errors, or an empty separation.
pub fn export_peak_table_csv(
    separation: &Separation,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if separation.peaks().is_empty() {
        return Err("Empty separation: no peaks to export".into());
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_with_header(output_path, configuration)?;
    let d = configuration.delimiter;

    writeln!(
        file,
        "Component{d}Retention Time (min){d}Width (min){d}Start (min){d}End (min){d}Theoretical Plates"
    )?;

    for peak in separation.peaks() {
        writeln!(
            file,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            peak.name(),
            format_number(peak.retention_time, configuration),
            format_number(peak.width, configuration),
            format_number(peak.start, configuration),
            format_number(peak.end, configuration),
            peak.theoretical_plates,
        )?;
    }

    debug!("wrote {} peak rows to {}", separation.peaks().len(), output_path);
    Ok(())
}

/// Export the resolution table (one row per adjacent pair) to CSV.
///
/// A single-component separation produces a header-only file.
///
/// # Errors
///
/// File creation/write errors, or an empty separation.
pub fn export_resolution_table_csv(
    separation: &Separation,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if separation.peaks().is_empty() {
        return Err("Empty separation: no peaks to export".into());
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_with_header(output_path, configuration)?;
    let d = configuration.delimiter;

    writeln!(file, "First{d}Second{d}Resolution{d}Co-eluting")?;

    for record in separation.resolutions() {
        writeln!(
            file,
            "{}{d}{}{d}{}{d}{}",
            record.pair.0,
            record.pair.1,
            format_number(record.resolution, configuration),
            if record.coeluting { "yes" } else { "no" },
        )?;
    }

    debug!(
        "wrote {} resolution rows to {}",
        separation.resolutions().len(),
        output_path
    );
    Ok(())
}

/// Export sampled chromatogram traces to CSV.
///
/// Columns: time, one per component (elution order), then the combined
/// signal.
///
/// # Errors
///
/// File creation/write errors, or an empty chromatogram.
pub fn export_chromatogram_csv(
    chromatogram: &Chromatogram,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if chromatogram.is_empty() {
        return Err("Empty chromatogram: nothing to export".into());
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_with_header(output_path, configuration)?;
    let d = configuration.delimiter;

    // Header: Time (min),<component...>,Combined
    write!(file, "Time (min)")?;
    for (name, _) in chromatogram.traces() {
        write!(file, "{d}{name}")?;
    }
    writeln!(file, "{d}Combined")?;

    for i in 0..chromatogram.len() {
        write!(file, "{}", format_number(chromatogram.time()[i], configuration))?;
        for (_, trace) in chromatogram.traces() {
            write!(file, "{d}{}", format_number(trace[i], configuration))?;
        }
        writeln!(
            file,
            "{d}{}",
            format_number(chromatogram.combined()[i], configuration)
        )?;
    }

    debug!("wrote {} sample rows to {}", chromatogram.len(), output_path);
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
