// Dweve treebench - B-Tree/BST benchmark report generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end report runs against harness-format results directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treebench_csv::CsvError;
use treebench_report::config::{inputs, outputs};
use treebench_report::summary::{HEIGHT_HEADER, INSERT_HEADER, SEARCH_HEADER};
use treebench_report::{ReportConfig, ReportError, ReportGenerator};

const HEIGHT_CSV: &str = "\
NumElements,BTreeHeight,BSTHeight_Best,BSTHeight_Avg,BSTHeight_Worst
100,1,7,10,100
1000,2,10,14,1000
10000,2,14,19,10000
100000,3,17,24,100000
";

const DISK_CSV: &str = "\
NumElements,BTreeDiskTime_ms,BSTDiskTime_ms,Speedup
1000,20,140,7
10000,20,190,9.5
100000,30,240,8
";

const BENCH_HEADER: &str = "TreeType,Scenario,NumElements,InsertTime_us,SearchTime_us,RangeQueryTime_us,TreeHeight,DiskReads,InsertPerOp_us,SearchPerOp_us";

const SCENARIOS: [&str; 5] = ["Sequential", "Random", "Reverse", "DuplicateHeavy", "Skewed"];

/// Two sizes per scenario and structure, BTree 0.2 µs/insert, BST 0.5.
fn bench_csv(scenarios: &[&str]) -> String {
    let mut csv = format!("{}\n", BENCH_HEADER);
    for scenario in scenarios {
        for n in [1000u64, 10_000] {
            let height = if n == 1000 { 2 } else { 3 };
            csv.push_str(&format!(
                "BTree,{},{},0,0,0,{},0,0.2,{}\n",
                scenario,
                n,
                height,
                n as f64 / 100_000.0
            ));
            csv.push_str(&format!(
                "BST,{},{},0,0,0,{},0,0.5,{}\n",
                scenario,
                n,
                height * 10,
                n as f64 / 10_000.0
            ));
        }
    }
    csv
}

fn results_dir(bench: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(inputs::HEIGHT_COMPARISON), HEIGHT_CSV).unwrap();
    fs::write(dir.path().join(inputs::DISK_IO_COMPARISON), DISK_CSV).unwrap();
    if let Some(bench) = bench {
        fs::write(dir.path().join(inputs::BENCHMARK_RESULTS), bench).unwrap();
    }
    dir
}

fn config(dir: &Path) -> ReportConfig {
    ReportConfig {
        dpi: 30,
        progress: false,
        ..ReportConfig::with_results_dir(dir)
    }
}

fn graph(dir: &Path, name: &str) -> PathBuf {
    dir.join(outputs::GRAPHS_DIR).join(name)
}

fn is_png(path: &Path) -> bool {
    fs::read(path)
        .map(|bytes| bytes.starts_with(b"\x89PNG\r\n\x1a\n"))
        .unwrap_or(false)
}

#[test]
fn test_full_run_writes_every_artifact() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));

    let report = ReportGenerator::new(config(dir.path())).run().unwrap();

    assert_eq!(report.outputs, config(dir.path()).output_paths());
    for path in &report.outputs {
        assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
    }
    for name in [
        outputs::HEIGHT_COMPARISON,
        outputs::DISK_IO_PERFORMANCE,
        outputs::INSERT_SCENARIOS,
        outputs::SEARCH_HEATMAP,
    ] {
        assert!(is_png(&graph(dir.path(), name)), "{} is not a PNG", name);
    }
}

#[test]
fn test_insert_grid_fits_scenarios() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));
    let report = ReportGenerator::new(config(dir.path())).run().unwrap();

    let grid = report.insert_grid;
    assert_eq!((grid.rows, grid.columns), (2, 3));
    assert!(grid.capacity() >= SCENARIOS.len());
    assert_eq!(grid.unused(), grid.capacity() - SCENARIOS.len());

    let dir = results_dir(Some(&bench_csv(&SCENARIOS[..2])));
    let report = ReportGenerator::new(config(dir.path())).run().unwrap();
    assert_eq!(
        (report.insert_grid.rows, report.insert_grid.columns, report.insert_grid.unused()),
        (1, 2, 0)
    );
}

#[test]
fn test_summary_matches_recomputed_means() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));
    ReportGenerator::new(config(dir.path())).run().unwrap();

    let summary = fs::read_to_string(dir.path().join(outputs::SUMMARY_STATISTICS)).unwrap();
    let insert = summary.find(INSERT_HEADER).unwrap();
    let search = summary.find(SEARCH_HEADER).unwrap();
    let height = summary.find(HEIGHT_HEADER).unwrap();
    assert!(insert < search && search < height);

    let line = |section: &str, prefix: &str| -> String {
        summary[summary.find(section).unwrap()..]
            .lines()
            .find(|l| l.starts_with(prefix))
            .unwrap()
            .to_string()
    };

    // Insert: constant per structure.
    assert!(line(INSERT_HEADER, "BTree").ends_with("0.200000"));
    assert!(line(INSERT_HEADER, "BST ").ends_with("0.500000"));
    // Search: mean of 0.01 and 0.1 for BTree, 0.1 and 1.0 for BST.
    assert!(line(SEARCH_HEADER, "BTree").ends_with("0.055000"));
    assert!(line(SEARCH_HEADER, "BST ").ends_with("0.550000"));
    // Height: first row is BST at 1000 elements.
    let first = line(HEIGHT_HEADER, "BST");
    assert!(first.contains("1000"));
    assert!(first.ends_with("20.000000"));
}

#[test]
fn test_rerun_keeps_artifact_names() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));
    let generator = ReportGenerator::new(config(dir.path()));

    let list = |dir: &Path| -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir.join(outputs::GRAPHS_DIR))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    };

    let first = generator.run().unwrap();
    let names = list(dir.path());
    let second = generator.run().unwrap();

    assert_eq!(first.outputs, second.outputs);
    assert_eq!(names, list(dir.path()));
    assert_eq!(names.len(), 4);
}

#[test]
fn test_missing_benchmark_keeps_earlier_charts() {
    let dir = results_dir(None);

    let err = ReportGenerator::new(config(dir.path())).run().unwrap_err();

    match &err {
        ReportError::Csv(csv) => assert!(csv.is_not_found()),
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().contains(inputs::BENCHMARK_RESULTS));
    assert!(is_png(&graph(dir.path(), outputs::HEIGHT_COMPARISON)));
    assert!(is_png(&graph(dir.path(), outputs::DISK_IO_PERFORMANCE)));
    assert!(!graph(dir.path(), outputs::INSERT_SCENARIOS).exists());
    assert!(!graph(dir.path(), outputs::SEARCH_HEATMAP).exists());
    assert!(!dir.path().join(outputs::SUMMARY_STATISTICS).exists());
}

#[test]
fn test_missing_height_writes_nothing() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));
    fs::remove_file(dir.path().join(inputs::HEIGHT_COMPARISON)).unwrap();

    assert!(ReportGenerator::new(config(dir.path())).run().is_err());

    let graphs: Vec<_> = fs::read_dir(dir.path().join(outputs::GRAPHS_DIR))
        .unwrap()
        .collect();
    assert!(graphs.is_empty());
    assert!(!dir.path().join(outputs::SUMMARY_STATISTICS).exists());
}

#[test]
fn test_missing_column_is_fatal() {
    let bench = bench_csv(&SCENARIOS).replacen("SearchPerOp_us", "SearchOp", 1);
    let dir = results_dir(Some(&bench));

    let err = ReportGenerator::new(config(dir.path())).run().unwrap_err();

    assert!(matches!(
        err,
        ReportError::Csv(CsvError::MissingColumn { ref column, .. }) if column == "SearchPerOp_us"
    ));
    assert!(!graph(dir.path(), outputs::INSERT_SCENARIOS).exists());
}

#[test]
fn test_header_only_benchmark_writes_every_artifact() {
    let dir = results_dir(Some(&format!("{}\n", BENCH_HEADER)));

    let report = ReportGenerator::new(config(dir.path())).run().unwrap();

    assert_eq!(report.outputs, config(dir.path()).output_paths());
    for name in [outputs::INSERT_SCENARIOS, outputs::SEARCH_HEATMAP] {
        assert!(is_png(&graph(dir.path(), name)), "{} is not a PNG", name);
    }
    let summary = fs::read_to_string(dir.path().join(outputs::SUMMARY_STATISTICS)).unwrap();
    for header in [INSERT_HEADER, SEARCH_HEADER, HEIGHT_HEADER] {
        assert!(summary.contains(header));
    }
}

#[test]
fn test_output_dir_creation_failure() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("results");
    fs::write(&not_a_dir, "plain file").unwrap();

    let err = ReportGenerator::new(config(&not_a_dir)).run().unwrap_err();
    assert!(matches!(err, ReportError::CreateDir { .. }));
}

#[test]
fn test_invalid_dpi_touches_nothing() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));
    let config = ReportConfig {
        dpi: 0,
        ..config(dir.path())
    };

    let err = ReportGenerator::new(config).run().unwrap_err();

    assert!(matches!(err, ReportError::InvalidConfig { .. }));
    assert!(!dir.path().join(outputs::GRAPHS_DIR).exists());
}

#[test]
fn test_unusable_font_is_fatal() {
    let dir = results_dir(Some(&bench_csv(&SCENARIOS)));
    let font = dir.path().join("broken.ttf");
    fs::write(&font, "not a font").unwrap();
    let config = ReportConfig {
        font: Some(font),
        ..config(dir.path())
    };

    let err = ReportGenerator::new(config).run().unwrap_err();
    assert!(matches!(err, ReportError::Font { .. }));
}
