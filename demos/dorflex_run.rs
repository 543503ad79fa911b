//! Default Dorflex separation walkthrough
//!
//! Evaluates the three-component Dorflex table at a handful of operating
//! points, prints the peak and resolution tables, and exports the sampled
//! chromatogram to CSV.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example dorflex_run
//! ```

use std::error::Error;

use hplc_rs::output::{export_chromatogram_csv, CsvConfig, CsvMetadata};
use hplc_rs::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== HPLC Separation: Dorflex ===\n");

    let table = ReferenceTable::dorflex();

    // ====== Reference operating point ======

    let reference = InstrumentParameters::reference();
    println!(
        "Operating point: flow {} mL/min, {} °C, {} % organic\n",
        reference.flow, reference.temperature, reference.mobile_phase_percent
    );
    print_separation(&evaluate(&table, &reference)?);

    // ====== Pushing the flow up ======

    let fast = InstrumentParameters::new(2.0, 35.0, 50.0)?;
    println!("\nSame table at flow {} mL/min:\n", fast.flow);
    print_separation(&evaluate(&table, &fast)?);

    // ====== Exporting the chromatogram ======

    let separation = evaluate(&table, &reference)?;
    let chromatogram = Chromatogram::sample_default(&separation)?;

    let config = CsvConfig::default().with_metadata(CsvMetadata::from_parameters(&reference));
    let output_path = "dorflex_chromatogram.csv";
    export_chromatogram_csv(&chromatogram, output_path, Some(&config))?;

    println!(
        "\nExported {} samples to {}",
        chromatogram.len(),
        output_path
    );

    Ok(())
}

fn print_separation(separation: &Separation) {
    println!(
        "{:<14}{:>10}{:>10}{:>10}{:>10}{:>10}",
        "Component", "tR (min)", "w (min)", "start", "end", "plates"
    );
    for peak in separation.peaks() {
        println!(
            "{:<14}{:>10.3}{:>10.3}{:>10.3}{:>10.3}{:>10}",
            peak.name(),
            peak.retention_time,
            peak.width,
            peak.start,
            peak.end,
            peak.theoretical_plates,
        );
    }

    println!();
    for record in separation.resolutions() {
        println!(
            "  {} / {}: Rs = {:.2} {}",
            record.pair.0,
            record.pair.1,
            record.resolution,
            if record.coeluting { "→ CO-ELUTING" } else { "→ resolved" },
        );
    }
}
