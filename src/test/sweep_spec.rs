use crate::sweep::{SweepError, SweepSpec};

#[test]
fn valid_spec_passes_validation() {
    let spec = SweepSpec {
        start: 1.0,
        step: 250.0,
        count: 9,
    };
    assert!(spec.validate().is_ok());
}

#[test]
fn zero_count_is_rejected_before_any_run() {
    let spec = SweepSpec {
        start: 1.0,
        step: 250.0,
        count: 0,
    };
    assert!(matches!(
        spec.validate(),
        Err(SweepError::InvalidSpec { .. })
    ));
}

#[test]
fn non_finite_start_or_step_is_rejected() {
    let spec = SweepSpec {
        start: f64::NAN,
        step: 250.0,
        count: 9,
    };
    assert!(matches!(
        spec.validate(),
        Err(SweepError::InvalidSpec { .. })
    ));

    let spec = SweepSpec {
        start: 1.0,
        step: f64::INFINITY,
        count: 9,
    };
    assert!(matches!(
        spec.validate(),
        Err(SweepError::InvalidSpec { .. })
    ));
}

#[test]
fn sweep_values_are_start_plus_index_times_step() {
    let spec = SweepSpec {
        start: 1.0,
        step: 250.0,
        count: 9,
    };
    assert_eq!(spec.value_at(0), 1.0);
    assert_eq!(spec.value_at(1), 251.0);
    assert_eq!(spec.value_at(8), 2001.0);
}

#[test]
fn x_range_spans_sweep_domain_not_data_extrema() {
    let spec = SweepSpec {
        start: 1.0,
        step: 250.0,
        count: 9,
    };
    // Last nominal point is 2001, but the axis covers the full domain.
    assert_eq!(spec.x_range(), (1.0, 2251.0));
}
