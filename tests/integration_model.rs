//! Integration tests: chemistry + model + signal + export
//!
//! These tests exercise the public API end to end, the way a presentation
//! collaborator would: evaluate a scenario, read the records, sample the
//! chromatogram, export CSV.

use hplc_rs::chemistry::{ComponentSpec, MobilePhaseResponse, ReferenceTable};
use hplc_rs::instrument::InstrumentParameters;
use hplc_rs::model::{evaluate, evaluate_many, resolve, COELUTION_THRESHOLD};
use hplc_rs::output::{export_peak_table_csv, export_resolution_table_csv, CsvConfig, CsvMetadata};
use hplc_rs::signal::Chromatogram;

mod common;
use common::assert_close;

// =================================================================================================
// Scenario Tests
// =================================================================================================

#[test]
fn test_default_scenario_end_to_end() {
    let table = ReferenceTable::dorflex();
    let params = InstrumentParameters::reference();

    let separation = evaluate(&table, &params).unwrap();

    // Retention times are exactly the base times at the reference point.
    let times: Vec<f64> = separation.peaks().iter().map(|p| p.retention_time).collect();
    assert_eq!(times, vec![2.0, 4.0, 6.0]);

    let names: Vec<&str> = separation.peaks().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Dipirona", "Cafeína", "Orfenadrina"]);

    // Width from the empirical model: 0.15 + 0.05 * flow, no deviation terms.
    for peak in separation.peaks() {
        assert_close(peak.width, 0.2, 1e-12, "reference width");
        assert_close(peak.end - peak.start, 4.0 * peak.width, 1e-12, "span");
        assert!(peak.start < peak.retention_time);
        assert!(peak.retention_time < peak.end);
    }

    // Both pairs resolved well above the threshold.
    assert_eq!(separation.resolutions().len(), 2);
    for record in separation.resolutions() {
        assert!(record.resolution > COELUTION_THRESHOLD);
        assert!(!record.coeluting);
    }
}

#[test]
fn test_challenge_scenario_end_to_end() {
    let table = ReferenceTable::coelution_challenge();
    let params = InstrumentParameters::reference();

    let separation = evaluate(&table, &params).unwrap();
    let records = separation.resolutions();

    // Dipirona/Cafeína sit 0.4 min apart with 0.2 min widths: flagged.
    assert_eq!(records[0].pair, ("Dipirona".to_string(), "Cafeína".to_string()));
    assert!(records[0].coeluting);
    assert!(records[0].resolution < COELUTION_THRESHOLD);

    // Cafeína/Orfenadrina remain baseline-separated.
    assert_eq!(records[1].pair, ("Cafeína".to_string(), "Orfenadrina".to_string()));
    assert!(!records[1].coeluting);
    assert!(records[1].resolution >= COELUTION_THRESHOLD);

    assert!(!separation.fully_resolved());
}

#[test]
fn test_raising_flow_speeds_up_whole_run() {
    let table = ReferenceTable::dorflex();

    let slow = evaluate(&table, &InstrumentParameters::new(0.5, 35.0, 50.0).unwrap()).unwrap();
    let fast = evaluate(&table, &InstrumentParameters::new(2.0, 35.0, 50.0).unwrap()).unwrap();

    for (s, f) in slow.peaks().iter().zip(fast.peaks()) {
        assert!(f.retention_time < s.retention_time);
    }

    // Last peak at flow 2.0 elutes at 3 min instead of 12.
    assert_close(fast.peaks()[2].retention_time, 3.0, 1e-12, "fast run");
    assert_close(slow.peaks()[2].retention_time, 12.0, 1e-12, "slow run");
}

#[test]
fn test_mobile_phase_can_invert_elution_order() {
    // Dipirona starts first; with a lean mobile phase its retention rises
    // (inverse response) while the direct components drop toward it.
    let table = ReferenceTable::new(vec![
        ComponentSpec::new("A", 3.0, MobilePhaseResponse::Direct),
        ComponentSpec::new("B", 2.0, MobilePhaseResponse::Inverse),
    ])
    .unwrap();

    let reference = evaluate(&table, &InstrumentParameters::reference()).unwrap();
    assert_eq!(reference.peaks()[0].name(), "B");

    // 10 % organic: A -> 3.0 * (1 - 40*0.02) = 0.6; B -> 2.0 * (1 + 40*0.015) = 3.2
    let lean = evaluate(&table, &InstrumentParameters::new(1.0, 35.0, 10.0).unwrap()).unwrap();
    assert_eq!(lean.peaks()[0].name(), "A");
    assert_close(lean.peaks()[0].retention_time, 0.6, 1e-12, "direct at 10 %");
    assert_close(lean.peaks()[1].retention_time, 3.2, 1e-12, "inverse at 10 %");
}

#[test]
fn test_quiz_flow_adjustment_recovers_separation() {
    // The didactic point of the challenge table: slowing the flow stretches
    // the gap between the pair (Δtr doubles) while the width term shrinks,
    // so the pair crosses back over the resolution threshold.
    let table = ReferenceTable::coelution_challenge();

    let at_reference = evaluate(&table, &InstrumentParameters::reference()).unwrap();
    assert!(at_reference.resolutions()[0].coeluting);

    let slowed = evaluate(&table, &InstrumentParameters::new(0.5, 35.0, 50.0).unwrap()).unwrap();
    // Δtr doubles (0.8 min), widths shrink to 0.175: Rs = 1.6 / 0.35 ≈ 4.6
    assert!(!slowed.resolutions()[0].coeluting);
    assert!(slowed.resolutions()[0].resolution > COELUTION_THRESHOLD);
}

// =================================================================================================
// Batch and Signal Tests
// =================================================================================================

#[test]
fn test_batch_evaluation_is_consistent() {
    let table = ReferenceTable::dorflex();
    let batch: Vec<InstrumentParameters> = (0..8)
        .map(|i| InstrumentParameters::new(0.5 + 0.2 * i as f64, 35.0, 50.0).unwrap())
        .collect();

    let separations = evaluate_many(&table, &batch).unwrap();
    assert_eq!(separations.len(), 8);

    for (params, separation) in batch.iter().zip(&separations) {
        assert_eq!(separation, &evaluate(&table, params).unwrap());
    }
}

#[test]
fn test_chromatogram_of_default_scenario() {
    let separation =
        evaluate(&ReferenceTable::dorflex(), &InstrumentParameters::reference()).unwrap();
    let chromatogram = Chromatogram::sample_default(&separation).unwrap();

    // Three well-separated unit peaks: combined maximum stays near 1.0.
    let max = chromatogram.combined().max();
    assert!(max > 0.99 && max < 1.01, "combined max {}", max);

    // Baseline between peaks is essentially zero.
    let index_at = |t: f64| ((t / 20.0) * 1999.0).round() as usize;
    assert!(chromatogram.combined()[index_at(10.0)] < 1e-6);
}

#[test]
fn test_chromatogram_of_coeluting_pair_overlaps() {
    let separation = evaluate(
        &ReferenceTable::coelution_challenge(),
        &InstrumentParameters::reference(),
    )
    .unwrap();
    let chromatogram = Chromatogram::sample(&separation, 0.0, 10.0, 2001).unwrap();

    // Halfway between Dipirona (3.0) and Cafeína (3.4) both Gaussians are
    // alive: the valley stays well above baseline.
    let index = 640; // t = 3.2 with dt = 0.005
    assert!((chromatogram.time()[index] - 3.2).abs() < 1e-9);
    assert!(chromatogram.combined()[index] > 0.5);
}

// =================================================================================================
// Resolve Contract Tests
// =================================================================================================

#[test]
fn test_resolve_counts_through_public_api() {
    for n in 1..=4 {
        let components: Vec<ComponentSpec> = (0..n)
            .map(|i| {
                ComponentSpec::new(
                    format!("C{}", i),
                    1.0 + i as f64,
                    MobilePhaseResponse::Direct,
                )
            })
            .collect();
        let table = ReferenceTable::new(components).unwrap();
        let separation = evaluate(&table, &InstrumentParameters::reference()).unwrap();

        assert_eq!(separation.peaks().len(), n);
        assert_eq!(separation.resolutions().len(), n - 1);
    }

    // Zero peaks through the standalone classifier.
    assert!(resolve(&[]).unwrap().is_empty());
}

// =================================================================================================
// Export Round-trip
// =================================================================================================

#[test]
fn test_csv_export_round_trip() {
    let params = InstrumentParameters::reference();
    let separation = evaluate(&ReferenceTable::dorflex(), &params).unwrap();

    let config = CsvConfig::default().with_metadata(CsvMetadata::from_parameters(&params));

    let peaks_file = tempfile::NamedTempFile::new().unwrap();
    export_peak_table_csv(&separation, peaks_file.path().to_str().unwrap(), Some(&config))
        .unwrap();

    let content = std::fs::read_to_string(peaks_file.path()).unwrap();
    assert!(content.contains("# Flow: 1 mL/min"));
    assert!(content.contains("Dipirona,2.000000"));

    let res_file = tempfile::NamedTempFile::new().unwrap();
    export_resolution_table_csv(&separation, res_file.path().to_str().unwrap(), None).unwrap();

    let content = std::fs::read_to_string(res_file.path()).unwrap();
    assert_eq!(content.lines().count(), 3);
}
