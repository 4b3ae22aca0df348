//! Integration tests: public energy API
//!
//! Exercises the crate-root functions the way a transmit chain calls them,
//! including the checked variants and the lookup table.

use symbol_energy::{
    pam_energy, qam_energy, try_pam_energy, try_qam_energy, EnergyError, EnergyTable, Modulation,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_qam_reference_values() {
    init_logging();
    // 4-QAM, 16-QAM, 64-QAM
    for (bps, expected) in [(0, 0.0), (2, 2.0), (4, 10.0), (6, 42.0)] {
        assert_eq!(qam_energy(bps), expected, "bps={bps}");
    }
}

#[test]
fn test_qam_relative_tolerance_for_even_bps() {
    init_logging();
    for bps in (2u32..=52).step_by(2) {
        let expected = (2.0 / 3.0) * (2f64.powi(bps as i32) - 1.0);
        let rel = (qam_energy(bps) - expected).abs() / expected;
        assert!(rel < 1e-9, "bps={bps}: relative error {rel}");
    }
}

#[test]
fn test_pam_reference_values() {
    init_logging();
    assert_eq!(pam_energy(1), 1.0);
    assert!((pam_energy(2) - 2.2360679).abs() < 1e-7);
    assert!((pam_energy(3) - 4.58257569).abs() < 1e-7);
}

#[test]
fn test_pam_monotonic() {
    init_logging();
    let values: Vec<f64> = (1..=16).map(pam_energy).collect();
    assert!(values.iter().all(|&v| v >= 0.0));
    assert!(values.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_checked_variants_agree_with_permissive() {
    init_logging();
    for bps in 1..=16i64 {
        assert_eq!(try_qam_energy(bps).unwrap(), qam_energy(bps as u32));
        assert_eq!(try_pam_energy(bps).unwrap(), pam_energy(bps as u32));
    }
}

#[test]
fn test_checked_variants_reject_out_of_domain() {
    init_logging();
    assert!(matches!(
        try_qam_energy(-1),
        Err(EnergyError::InvalidArgument(_))
    ));
    assert!(matches!(
        try_pam_energy(0),
        Err(EnergyError::InvalidArgument(_))
    ));
}

#[test]
fn test_concurrent_calls_agree() {
    init_logging();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| (1..=16).map(pam_energy).collect::<Vec<_>>()))
        .collect();
    let expected: Vec<f64> = (1..=16).map(pam_energy).collect();
    for handle in handles {
        let got = handle.join().unwrap();
        assert!(got
            .iter()
            .zip(&expected)
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }
}

#[test]
fn test_table_agrees_with_functions() {
    init_logging();
    let table = EnergyTable::default();
    for bps in 0..=20 {
        assert_eq!(table.get(Modulation::Qam, bps), qam_energy(bps));
        assert_eq!(table.get(Modulation::Pam, bps), pam_energy(bps));
    }
}
