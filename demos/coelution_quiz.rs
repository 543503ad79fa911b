//! Near-coelution challenge walkthrough
//!
//! The challenge table pushes Dipirona and Cafeína to 3.0 and 3.4 min, so
//! at the reference operating point the pair is flagged as co-eluting. The
//! exercise is to find instrument settings that pull them back apart.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example coelution_quiz
//! ```

use std::error::Error;

use hplc_rs::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Co-elution Challenge ===\n");

    let table = ReferenceTable::coelution_challenge();

    // ====== The problem ======

    let reference = InstrumentParameters::reference();
    let separation = evaluate(&table, &reference)?;

    println!("At the reference operating point:");
    print_resolutions(&separation);
    assert!(!separation.fully_resolved());

    // ====== One way out: slow the flow ======

    // Halving the flow doubles every retention time, stretching the gap
    // between the pair, while the width term shrinks with the flow.
    let slow = InstrumentParameters::new(0.5, 35.0, 50.0)?;
    let separation = evaluate(&table, &slow)?;

    println!("\nAfter slowing the flow to {} mL/min:", slow.flow);
    print_resolutions(&separation);

    if separation.fully_resolved() {
        println!("\nAll pairs baseline-separated: challenge solved.");
    }

    // ====== Scanning the flow domain ======

    println!("\nRs of the critical pair across the flow domain:");
    let flows: Vec<InstrumentParameters> = (0..=15)
        .map(|i| InstrumentParameters::new(0.5 + 0.1 * i as f64, 35.0, 50.0))
        .collect::<Result<_, _>>()?;

    for (params, separation) in flows.iter().zip(evaluate_many(&table, &flows)?) {
        let critical = &separation.resolutions()[0];
        println!(
            "  flow {:>4.1} mL/min → Rs {:>5.2} {}",
            params.flow,
            critical.resolution,
            if critical.coeluting { "(co-eluting)" } else { "" },
        );
    }

    Ok(())
}

fn print_resolutions(separation: &Separation) {
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
