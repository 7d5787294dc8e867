use proptest::prelude::*;

use saju_base::{compute_pillars, tally};
use saju_classify::{
    ALL_AXES, ALL_TYPE_CODES, Axis, CalibrationSample, CalibrationSpan, ClassifierConfig,
    CoverageBounds, CoverageViolation, classify, run_calibration, tune,
};
use saju_time::{HourSlot, SolarDate, TimeSlot};

fn default_sample() -> CalibrationSample {
    CalibrationSample::collect(CalibrationSpan::default()).unwrap()
}

#[test]
fn default_span_has_enough_samples() {
    let sample = default_sample();
    assert!(sample.len() >= 5000, "only {} samples", sample.len());
}

#[test]
fn calibrated_defaults_cover_every_code() {
    let report = default_sample().report(&ClassifierConfig::default());
    assert!(report.missing_codes().is_empty(), "missing {:?}", report.missing_codes());
    let violations = report.check(&CoverageBounds::default());
    assert!(violations.is_empty(), "{violations:?}");
    assert!(report.max_share() < 0.16, "max share {}", report.max_share());
    assert!(report.min_share() > 0.0);
}

#[test]
fn calibrated_axes_are_balanced() {
    let report = default_sample().report(&ClassifierConfig::default());
    for axis in ALL_AXES {
        let share = report.first_letter_share(axis);
        assert!((0.30..=0.70).contains(&share), "{} at {share}", axis.name());
    }
}

#[test]
fn calibrated_defaults_pass_on_full_span() {
    let report = run_calibration(
        &ClassifierConfig::default(),
        CalibrationSpan {
            stride: 1,
            ..CalibrationSpan::default()
        },
    )
    .unwrap();
    assert_eq!(report.samples, 25_568 * 12);
    assert!(report.passes(&CoverageBounds::default()));
    assert!(report.max_share() < 0.155);
}

#[test]
fn legacy_rules_fail_coverage() {
    let report = default_sample().report(&ClassifierConfig::legacy());
    let violations = report.check(&CoverageBounds::default());

    assert!(report.max_share() > 0.18);
    assert!(
        violations
            .iter()
            .any(|v| matches!(v, CoverageViolation::CodeShareTooHigh { .. }))
    );
    assert!(violations.iter().any(|v| matches!(
        v,
        CoverageViolation::AxisImbalance {
            axis: Axis::Lifestyle,
            ..
        }
    )));
    assert!(report.first_letter_share(Axis::Lifestyle) < 0.15);
}

#[test]
fn tuning_recovers_calibrated_defaults() {
    let base = ClassifierConfig::legacy();
    let best = tune(&base, &default_sample(), &CoverageBounds::default()).unwrap();
    assert_eq!(best.config, ClassifierConfig::default());
    assert!(best.passes(&CoverageBounds::default()));
}

#[test]
fn tuning_with_impossible_bounds_finds_nothing() {
    let bounds = CoverageBounds {
        max_code_share: 0.05,
        min_axis_share: 0.25,
    };
    assert!(tune(&ClassifierConfig::default(), &default_sample(), &bounds).is_none());
}

#[test]
fn histogram_sums_to_sample_count() {
    let report = default_sample().report(&ClassifierConfig::default());
    let total: usize = ALL_TYPE_CODES.iter().map(|&c| report.count(c)).sum();
    assert_eq!(total, report.samples);
}

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(jdn_offset in 0i64..73_000, slot in 0u8..12) {
        let first = SolarDate::new(1901, 1, 1).unwrap().julian_day_number();
        let date = SolarDate::from_julian_day_number(first + jdn_offset).unwrap();
        let time = TimeSlot::Known(HourSlot::new(slot).unwrap());
        let pillars = compute_pillars(date, time).unwrap();
        let (el, tg) = tally(&pillars);
        let a = classify(&el, &tg, &pillars);
        let b = classify(&el, &tg, &pillars);
        prop_assert_eq!(a, b);
        prop_assert!(ALL_TYPE_CODES.contains(&a));
        prop_assert_eq!(a.to_string().parse::<saju_classify::TypeCode>().unwrap(), a);
    }
}
