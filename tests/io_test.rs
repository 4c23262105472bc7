use std::fs;

use samplrs::io::csv::{read_csv, write_allocation, write_csv, write_describe};
use samplrs::stats;

fn frame_csv() -> String {
    let mut text = String::from("id,region,area,pop_block\n");
    for i in 0..50 {
        let region = if i < 30 { "North" } else { "South" };
        let area = if i % 2 == 0 { "Urban" } else { "Rural" };
        text.push_str(&format!("blk-{:02},{},{},{}\n", i, region, area, 100 + i));
    }
    text
}

#[test]
fn test_frame_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("frame.csv");
    let out_path = dir.path().join("copy.csv");
    fs::write(&in_path, frame_csv()).unwrap();

    let frame = read_csv(&in_path, true).unwrap();
    assert_eq!(frame.row_count(), 50);
    assert_eq!(
        frame.column_names(),
        vec!["id", "region", "area", "pop_block"]
    );

    write_csv(&frame, &out_path).unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), frame_csv());
}

#[test]
fn test_sampling_run_exports() {
    let dir = tempfile::tempdir().unwrap();
    let frame_path = dir.path().join("frame.csv");
    fs::write(&frame_path, frame_csv()).unwrap();

    let frame = read_csv(&frame_path, true).unwrap();
    let result =
        stats::stratified_sample(&frame, "region", 10, stats::DEFAULT_SEED).unwrap();

    // Full sample export: same schema, one row per sampled record
    let sample_path = dir.path().join("stratified_sample.csv");
    write_csv(&result.sample, &sample_path).unwrap();
    let sample_text = fs::read_to_string(&sample_path).unwrap();
    assert!(sample_text.starts_with("id,region,area,pop_block\n"));
    assert_eq!(sample_text.lines().count(), 11);

    // Allocation export: stratum,Nh,nh
    let allocation_path = dir.path().join("allocation.csv");
    write_allocation(&result.allocation, &allocation_path).unwrap();
    assert_eq!(
        fs::read_to_string(&allocation_path).unwrap(),
        "stratum,Nh,nh\nNorth,30,6\nSouth,20,4\n"
    );

    // Summary export: one row per statistic
    let stats_path = dir.path().join("stats.csv");
    let sizes = result.sample.numeric_column("pop_block").unwrap();
    let summary = stats::describe(&sizes).unwrap();
    write_describe(&summary, &stats_path).unwrap();
    let stats_text = fs::read_to_string(&stats_path).unwrap();
    assert!(stats_text.starts_with("statistic,value\ncount,10\n"));
    assert_eq!(stats_text.lines().count(), 9);
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_csv(dir.path().join("absent.csv"), true);
    assert!(result.is_err());
}
