use crate::agg::ResultAggregator;
use crate::sim::RunResult;
use crate::sweep::SweepError;
use crate::traffic::FlowId;

#[test]
fn record_appends_one_point_per_flow_at_the_same_index() {
    let mut agg = ResultAggregator::default();
    agg.record(500.0, &RunResult::new([0.1, 0.2, 0.3]))
        .expect("record");

    let [a, b, c] = agg.snapshot();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(c.len(), 1);
    assert_eq!((a[0].x, a[0].y), (500.0, 0.1));
    assert_eq!((b[0].x, b[0].y), (500.0, 0.2));
    assert_eq!((c[0].x, c[0].y), (500.0, 0.3));
}

#[test]
fn duplicate_sweep_values_are_kept_in_append_order() {
    let mut agg = ResultAggregator::default();
    agg.record(5.0, &RunResult::new([1.0, 1.0, 1.0]))
        .expect("record");
    agg.record(5.0, &RunResult::new([2.0, 2.0, 2.0]))
        .expect("record");

    let [a, _, _] = agg.snapshot();
    assert_eq!(a.len(), 2);
    assert_eq!((a[0].x, a[0].y), (5.0, 1.0));
    assert_eq!((a[1].x, a[1].y), (5.0, 2.0));
}

#[test]
fn negative_throughput_is_rejected_and_nothing_is_appended() {
    let mut agg = ResultAggregator::default();
    agg.record(1.0, &RunResult::new([0.5, 0.5, 0.5]))
        .expect("record");

    let err = agg
        .record(251.0, &RunResult::new([0.1, -0.2, 0.3]))
        .expect_err("must reject");
    match err {
        SweepError::MalformedThroughput { step, flow, value } => {
            assert_eq!(step, 1);
            assert_eq!(flow, FlowId::UpLight);
            assert_eq!(value, -0.2);
        }
        other => panic!("expected MalformedThroughput, got {other:?}"),
    }

    // The rejected triple must not leave a partial row behind.
    assert_eq!(agg.len(), 1);
    for series in agg.snapshot() {
        assert_eq!(series.len(), 1);
    }
}

#[test]
fn non_finite_throughput_is_rejected() {
    let mut agg = ResultAggregator::default();
    assert!(agg
        .record(1.0, &RunResult::new([f64::NAN, 0.0, 0.0]))
        .is_err());
    assert!(agg
        .record(1.0, &RunResult::new([0.0, f64::INFINITY, 0.0]))
        .is_err());
    assert!(agg.is_empty());
}

#[test]
fn zero_throughput_flows_are_reported_not_omitted() {
    let mut agg = ResultAggregator::default();
    agg.record(1.0, &RunResult::new([0.0, 0.0, 0.0]))
        .expect("record");

    for series in agg.snapshot() {
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].y, 0.0);
    }
}
