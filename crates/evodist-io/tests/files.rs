//! Reading simulator output files from disk

use approx::assert_relative_eq;
use evodist_core::Error;
use evodist_io::{TableFormat, TableReader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_lifetime_samples() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "lifetime.dat", "0 17\n1 3\n2 1\n3 2\n5 4\n");

    let samples = TableReader::default().read_samples(&path).unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0].value, 0.0);
    assert_eq!(samples[4].weight, 4.0);
}

#[test]
fn test_read_pre_binned_histogram_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "diversity_histo.dat", "12 40\n10 3\n11 25\n");

    let hist = TableReader::default().read_histogram(&path).unwrap();
    assert_eq!(hist.points(), &[(12.0, 40.0), (10.0, 3.0), (11.0, 25.0)]);
}

#[test]
fn test_read_timeseries() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "timeseries.dat",
        "0 10 0.5 0.1\n1000 14 0.75 0.2\n2000 13 0.6 0.15\n",
    );

    let series = TableReader::default()
        .read_timeseries(&path, &["species", "link density", "CC"])
        .unwrap()
        .rescale_time(1000.0)
        .unwrap();
    assert_eq!(series.time(), &[0.0, 1.0, 2.0]);
    assert_relative_eq!(series.column(2).unwrap()[1], 0.2);

    let wrong = TableReader::default().read_timeseries(&path, &["species"]);
    assert!(matches!(wrong, Err(Error::MalformedInput(_))));
}

#[test]
fn test_read_weighted_rows() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "extinction.tsv", "1\t4\t2\n3\t1\t1\n");

    let rows = TableReader::new(TableFormat::tsv())
        .read_weighted_rows(&path)
        .unwrap();
    assert_eq!(rows, vec![(1.0, vec![4.0, 2.0]), (3.0, vec![1.0, 1.0])]);
}

#[test]
fn test_missing_file_is_malformed_input() {
    let err = TableReader::default()
        .read_samples(Path::new("/nonexistent/lifetime.dat"))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
    assert!(err.to_string().contains("lifetime.dat"));
}

#[test]
fn test_empty_file_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "lifetime.dat", "");

    let err = TableReader::default().read_samples(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn test_wrong_width_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "lifetime.dat", "1 2 3\n4 5 6\n");

    let err = TableReader::default().read_samples(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}
