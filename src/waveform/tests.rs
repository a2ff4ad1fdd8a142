use super::*;

#[test]
fn test_reference_scaling() {
    let scaling = FlowScaling::default();
    assert_eq!(scaling.mean_flow_rate, 2.0);
    assert_eq!(scaling.conversion_constant, 1e-6 / 60.0);

    let flows = scale_flow(&[0.0, 1.0, 0.0], &scaling);
    assert_eq!(flows, vec![0.0, 2.0 * 1.0 * (1e-6 / 60.0), 0.0]);
}

#[test]
fn test_scaling_is_linear_in_mean_flow() {
    let normalized = [0.1, 0.37, 1.0, 0.82, -0.05];
    let base = FlowScaling {
        mean_flow_rate: 3.7,
        conversion_constant: ML_PER_MIN_TO_M3_PER_S,
    };
    let doubled = FlowScaling {
        mean_flow_rate: 2.0 * base.mean_flow_rate,
        ..base
    };

    let a = scale_flow(&normalized, &base);
    let b = scale_flow(&normalized, &doubled);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(2.0 * x, *y);
    }
}

#[test]
fn test_waveform_length_mismatch() {
    let err = FlowRateWaveform::new(vec![0.0, 1.0], vec![0.0]).unwrap_err();
    assert_eq!(err, WaveformError::LengthMismatch { times: 2, flows: 1 });
}

#[test]
fn test_waveform_samples() {
    let waveform = FlowRateWaveform::new(vec![0.0, 0.5], vec![1.0, 2.0]).unwrap();
    let samples: Vec<_> = waveform.samples().collect();
    assert_eq!(samples, vec![(0.0, 1.0), (0.5, 2.0)]);
}

#[test]
fn test_stats_triangle() {
    let waveform = FlowRateWaveform::new(vec![0.0, 0.5, 1.0], vec![0.0, 2.0, 0.0]).unwrap();
    let stats = waveform.stats().unwrap();

    assert_eq!(stats.samples, 3);
    assert_eq!(stats.duration, 1.0);
    assert_eq!(stats.min_flow, 0.0);
    assert_eq!(stats.max_flow, 2.0);
    assert!((stats.mean_flow - 1.0).abs() < 1e-15);
}

#[test]
fn test_stats_single_sample_and_empty() {
    let single = FlowRateWaveform::new(vec![0.2], vec![4.0]).unwrap();
    let stats = single.stats().unwrap();
    assert_eq!(stats.duration, 0.0);
    assert_eq!(stats.mean_flow, 4.0);

    let empty = FlowRateWaveform::new(Vec::new(), Vec::new()).unwrap();
    assert!(empty.is_empty());
    assert!(empty.stats().is_none());
}

#[test]
fn test_mean_flow_in_ml_per_min() {
    let q = FlowScaling::default().apply(1.0);
    let waveform = FlowRateWaveform::new(vec![0.0, 1.0], vec![q, q]).unwrap();
    let stats = waveform.stats().unwrap();
    assert!((stats.mean_flow_ml_per_min() - 2.0).abs() < 1e-12);
}
