use super::csv_io::read_from;
use super::*;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_output_path_appends_extension() {
    assert_eq!(
        output_file_path("Hoi-OlderAdults-Waveform_ECA"),
        Path::new("Hoi-OlderAdults-Waveform_ECA.csv")
    );
    assert_eq!(output_file_path("out/run.v2"), Path::new("out/run.v2.csv"));
}

#[test]
fn test_header_and_rows() {
    let mut buffer = Vec::new();
    write_flow_rate_data(&mut buffer, &[0.0, 0.5, 1.0], &[0.0, 1.5, 0.25]).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text, "t,flow\n0.0,0.0\n0.5,1.5\n1.0,0.25\n");
}

#[test]
fn test_empty_series_still_has_header() {
    let mut buffer = Vec::new();
    write_flow_rate_data(&mut buffer, &[], &[]).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "t,flow\n");
}

#[test]
fn test_length_mismatch() {
    let mut buffer = Vec::new();
    let err = write_flow_rate_data(&mut buffer, &[0.0, 1.0], &[0.0]).unwrap_err();
    assert!(matches!(err, WriterError::LengthMismatch { times: 2, flows: 1 }));
}

#[test]
fn test_small_flows_read_back_exactly() {
    let flows = [0.0, 2.0 * (1e-6 / 60.0), 1.234_567_890_123e-7];
    let times = [0.0, 0.0001, 0.0002];

    let mut buffer = Vec::new();
    write_flow_rate_data(&mut buffer, &times, &flows).unwrap();
    let waveform = read_from(Cursor::new(buffer)).unwrap();

    assert_eq!(waveform.times(), &times);
    assert_eq!(waveform.flow_rates(), &flows);
}

#[test]
fn test_save_and_overwrite() {
    let dir = tempdir().unwrap();
    let name = dir.path().join("waveform_CCA");

    let path = save_flow_rate_data(&name, &[0.0, 1.0], &[1.0, 2.0]).unwrap();
    assert_eq!(path, dir.path().join("waveform_CCA.csv"));

    let path = save_flow_rate_data(&name, &[0.0], &[3.0]).unwrap();
    let waveform = read_flow_rate_data(&path).unwrap();
    assert_eq!(waveform.len(), 1);
    assert_eq!(waveform.flow_rates(), &[3.0]);
}

#[test]
fn test_missing_parent_directory() {
    let dir = tempdir().unwrap();
    let name = dir.path().join("missing").join("waveform");

    let err = save_flow_rate_data(&name, &[0.0], &[0.0]).unwrap_err();
    assert!(matches!(err, WriterError::IoError(_)));
}

#[test]
fn test_read_rejects_wrong_header() {
    let err = read_from(Cursor::new("time,q\n0,1\n")).unwrap_err();
    assert!(matches!(err, WriterError::InvalidData(_)));
}
