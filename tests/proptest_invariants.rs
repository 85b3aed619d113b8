mod strategies;

use proptest::prelude::*;
use rigcheck::{
    estimate_total_power, evaluate, score_performance, Engine, FindingKind, Processor, Severity,
    Tier,
};
use strategies::{arb_powered_selection, arb_selection};

fn power_findings(report: &rigcheck::CompatibilityReport) -> Vec<FindingKind> {
    report
        .findings()
        .map(|f| f.kind().clone())
        .filter(|kind| {
            matches!(
                kind,
                FindingKind::InsufficientPower
                    | FindingKind::LowPowerHeadroom
                    | FindingKind::OversizedPowerSupply
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same selection must always produce the same report.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn determinism(selection in arb_selection()) {
        let first = evaluate(&selection);
        for _ in 0..3 {
            prop_assert_eq!(&first, &evaluate(&selection));
        }
    }

    #[test]
    fn evaluate_agrees_with_detailed(selection in arb_selection()) {
        let engine = Engine::standard();
        let trace = engine.evaluate_detailed(&selection);
        prop_assert_eq!(trace.report(), &engine.evaluate(&selection));
        let total: usize = trace.outcomes().iter().map(|o| o.findings).sum();
        prop_assert_eq!(total, trace.report().findings().count());
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Report partition
//
// Issues are exactly the Critical findings; compatibility follows issues.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn report_partitions_by_severity(selection in arb_selection()) {
        let report = evaluate(&selection);
        prop_assert!(report.issues().iter().all(|f| f.severity() == Severity::Critical));
        prop_assert!(report.warnings().iter().all(|f| f.severity() == Severity::Warning));
        prop_assert_eq!(report.is_compatible(), report.issues().is_empty());

        let summary = report.summary();
        prop_assert_eq!(summary.issue_count, report.issues().len());
        prop_assert_eq!(summary.warning_count, report.warnings().len());
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Socket rule soundness
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn socket_mismatch_iff_sockets_differ(selection in arb_selection()) {
        let cpu_socket = selection.processor().and_then(|p| p.socket.clone());
        let board_socket = selection.motherboard().and_then(|b| b.socket.clone());
        let expected = matches!((&cpu_socket, &board_socket), (Some(a), Some(b)) if a != b);

        let report = evaluate(&selection);
        let flagged = report
            .issues()
            .iter()
            .any(|f| f.kind() == &FindingKind::SocketMismatch);
        prop_assert_eq!(flagged, expected);
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Power estimate is monotonic in declared wattage
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn raising_cpu_tdp_never_lowers_estimate(
        selection in arb_powered_selection(),
        extra in 0.0_f64..500.0,
    ) {
        let before = estimate_total_power(&selection);
        let tdp = selection.processor().and_then(|p| p.tdp_watts).unwrap_or(0.0);
        let mut raised = selection.clone();
        raised.insert(Processor::new().tdp(tdp + extra));
        prop_assert!(estimate_total_power(&raised) >= before);
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: Headroom ordering
//
// The sufficiency rule emits at most one finding, and which one is decided
// by where the supply sits relative to the estimate.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn headroom_classification(selection in arb_powered_selection()) {
        let estimate = f64::from(estimate_total_power(&selection));
        let supplied = f64::from(selection.power_supply().and_then(|p| p.wattage).unwrap_or(0));
        let found = power_findings(&evaluate(&selection));

        prop_assert!(found.len() <= 1);
        let expected = if supplied < estimate {
            Some(FindingKind::InsufficientPower)
        } else if supplied < estimate * 1.25 {
            Some(FindingKind::LowPowerHeadroom)
        } else if supplied > estimate * 2.0 {
            Some(FindingKind::OversizedPowerSupply)
        } else {
            None
        };
        prop_assert_eq!(found.first().cloned(), expected);
    }
}

// ---------------------------------------------------------------------------
// Invariant 6: Score bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_bounded_and_tiered(selection in arb_selection()) {
        let score = score_performance(&selection);
        prop_assert!((0.0..=100.0).contains(&score.score()));
        prop_assert_eq!(score.tier(), Tier::from_score(score.score()));
    }
}
