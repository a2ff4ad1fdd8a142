use super::*;
use std::io::Cursor;

#[test]
fn test_first_time_is_origin() {
    let csv = "250,0.1\n300,0.8\n410,0.3\n";
    let points = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points.times()[0], 0.0);
    assert_eq!(points.times()[1], (300.0 - 250.0) * 1e-3);
    assert_eq!(points.times()[2], (410.0 - 250.0) * 1e-3);
    assert_eq!(points.values(), &[0.1, 0.8, 0.3]);
}

#[test]
fn test_whitespace_and_extra_columns() {
    let csv = " 0 , 1.0 , ignored\n 10, 0.5\n";
    let points = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap();

    assert_eq!(points.times(), &[0.0, 10.0 * MILLISECONDS_TO_SECONDS]);
    assert_eq!(points.values(), &[1.0, 0.5]);
}

#[test]
fn test_negative_raw_times() {
    let csv = "-20,0.0\n0,1.0\n";
    let points = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap();

    assert_eq!(points.times()[0], 0.0);
    assert!((points.duration() - 0.02).abs() < 1e-15);
}

#[test]
fn test_single_column_row() {
    let csv = "0,0.1\n5\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, FeatureError::MissingColumn { row: 2, found: 1 }));
}

#[test]
fn test_non_numeric_value() {
    let csv = "0,0.1\n5,abc\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    match err {
        FeatureError::InvalidNumber { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, 1);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_header_row_is_rejected() {
    let csv = "time,flow\n0,0.1\n5,0.2\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, FeatureError::InvalidNumber { row: 1, column: 0, .. }));
}

#[test]
fn test_nan_is_rejected() {
    let csv = "0,NaN\n5,0.2\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, FeatureError::InvalidNumber { row: 1, column: 1, .. }));
}

#[test]
fn test_time_overflow_is_rejected() {
    let csv = "-1e308,0.0\n1e308,1.0\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    match err {
        FeatureError::NonFinite { row, column, value } => {
            assert_eq!((row, column), (2, 0));
            assert!(value.is_infinite());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_new_rejects_non_finite() {
    let err = FeaturePointSet::new(vec![0.0, 1.0], vec![0.5, f64::NAN]).unwrap_err();
    assert!(matches!(err, FeatureError::NonFinite { row: 2, column: 1, .. }));

    let err = FeaturePointSet::new(vec![0.0, f64::INFINITY], vec![0.5, 1.0]).unwrap_err();
    assert!(matches!(err, FeatureError::NonFinite { row: 2, column: 0, .. }));
}

#[test]
fn test_too_few_points() {
    let err = FeaturePointSet::from_reader(Cursor::new("")).unwrap_err();
    assert!(matches!(err, FeatureError::TooFewPoints(0)));

    let err = FeaturePointSet::from_reader(Cursor::new("0,1\n")).unwrap_err();
    assert!(matches!(err, FeatureError::TooFewPoints(1)));
}

#[test]
fn test_duplicate_time_is_rejected() {
    let csv = "0,0.1\n5,0.2\n5,0.3\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    match err {
        FeatureError::NonMonotonicTime { row, previous, current } => {
            assert_eq!(row, 3);
            assert_eq!(previous, current);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decreasing_time_is_rejected() {
    let csv = "0,0.1\n10,0.2\n7,0.3\n";
    let err = FeaturePointSet::from_reader(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, FeatureError::NonMonotonicTime { row: 3, .. }));
}

#[test]
fn test_new_length_mismatch() {
    let err = FeaturePointSet::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
    assert!(matches!(err, FeatureError::LengthMismatch { times: 2, values: 1 }));
}

#[test]
fn test_missing_file() {
    let err = load_feature_points("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, FeatureError::IoError(_)));
}
