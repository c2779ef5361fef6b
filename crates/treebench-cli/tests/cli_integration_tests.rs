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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn report_cmd() -> Command {
    Command::cargo_bin("treebench-report").expect("Failed to find treebench-report binary")
}

fn write_inputs(dir: &Path) {
    fs::create_dir_all(dir).expect("Failed to create results dir");
    fs::write(
        dir.join("height_comparison.csv"),
        "NumElements,BTreeHeight,BSTHeight_Best,BSTHeight_Avg,BSTHeight_Worst\n\
         1000,2,10,14,1000\n\
         10000,2,14,19,10000\n",
    )
    .expect("Failed to write height fixture");
    fs::write(
        dir.join("disk_io_comparison.csv"),
        "NumElements,BTreeDiskTime_ms,BSTDiskTime_ms,Speedup\n\
         1000,20,140,7\n\
         10000,20,190,9.5\n",
    )
    .expect("Failed to write disk fixture");
    fs::write(
        dir.join("benchmark_results.csv"),
        "TreeType,Scenario,NumElements,InsertTime_us,SearchTime_us,RangeQueryTime_us,TreeHeight,DiskReads,InsertPerOp_us,SearchPerOp_us\n\
         BTree,Random,1000,210,110,11,2,2000,0.21,0.11\n\
         BST,Random,1000,260,190,19,21,21000,0.26,0.19\n\
         BTree,Sequential,1000,180,95,9,2,2000,0.18,0.095\n\
         BST,Sequential,1000,3100,2900,290,1000,1000000,3.1,2.9\n",
    )
    .expect("Failed to write benchmark fixture");
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    report_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--results-dir"))
        .stdout(predicate::str::contains("--dpi"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    report_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treebench-report"));
}

// ===== Report Runs =====

#[test]
fn test_default_layout_from_working_directory() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir.path().join("results"));

    report_cmd()
        .current_dir(dir.path())
        .args(["--dpi", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All graphs generated successfully"))
        .stdout(predicate::str::contains("summary_statistics.txt"));

    let results = dir.path().join("results");
    for name in [
        "height_comparison.png",
        "disk_io_performance.png",
        "insert_performance_scenarios.png",
        "search_performance_heatmap.png",
    ] {
        assert!(results.join("graphs").join(name).is_file(), "missing {}", name);
    }
    let summary = fs::read_to_string(results.join("summary_statistics.txt")).unwrap();
    assert!(summary.contains("BENCHMARK SUMMARY STATISTICS"));
}

#[test]
fn test_results_dir_flag() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("custom");
    write_inputs(&results);

    report_cmd()
        .arg("--results-dir")
        .arg(&results)
        .args(["--dpi", "30"])
        .assert()
        .success();

    assert!(results.join("graphs").join("height_comparison.png").is_file());
    assert!(results.join("summary_statistics.txt").is_file());
}

#[test]
fn test_quiet_suppresses_progress() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());

    report_cmd()
        .arg("--results-dir")
        .arg(dir.path())
        .args(["--dpi", "30", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ===== Failures =====

#[test]
fn test_missing_results_dir_fails() {
    let dir = TempDir::new().unwrap();

    report_cmd()
        .arg("--results-dir")
        .arg(dir.path().join("nope"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("height_comparison.csv"));
}

#[test]
fn test_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    write_inputs(dir.path());
    fs::write(
        dir.path().join("disk_io_comparison.csv"),
        "NumElements,BTreeDiskTime_ms,Speedup\n1000,20,7\n",
    )
    .unwrap();

    report_cmd()
        .arg("--results-dir")
        .arg(dir.path())
        .args(["--dpi", "30", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BSTDiskTime_ms"));

    assert!(dir.path().join("graphs").join("height_comparison.png").is_file());
    assert!(!dir.path().join("graphs").join("disk_io_performance.png").exists());
}

#[test]
fn test_dpi_out_of_range_fails() {
    report_cmd()
        .args(["--dpi", "5000", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dpi"));
}
