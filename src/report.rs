//! Pass/fail bookkeeping for test harnesses, dumped as JSON and printed as a console summary.
//!
//! Nothing here knows how a test is run. A harness calls [`TestReport::record`] once per test and
//! [`TestReport::finalize`] at the end.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Passed,
    Failed,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TestResult {
    pub test_name: String,
    pub status: TestStatus,
    pub message: String,
    /// Seconds, rounded to milliseconds.
    pub execution_time: f64,
    pub timestamp: DateTime<Local>,
}

#[derive(Clone, Debug)]
pub struct TestReport {
    started: DateTime<Local>,
    results: Vec<TestResult>,
}

impl Default for TestReport {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReport {
    pub fn new() -> Self {
        Self {
            started: Local::now(),
            results: Vec::new(),
        }
    }

    pub fn record(
        &mut self,
        test_name: impl Into<String>,
        passed: bool,
        message: impl Into<String>,
        duration: Duration,
    ) {
        self.results.push(TestResult {
            test_name: test_name.into(),
            status: if passed {
                TestStatus::Passed
            } else {
                TestStatus::Failed
            },
            message: message.into(),
            execution_time: (duration.as_secs_f64() * 1000.0).round() / 1000.0,
            timestamp: Local::now(),
        });
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn finalize(self) -> ReportSummary {
        let total_tests = self.results.len();
        let passed_tests = self
            .results
            .iter()
            .filter(|r| r.status == TestStatus::Passed)
            .count();
        let failed_tests = total_tests - passed_tests;

        // An empty run has nothing to divide by, report it as 0% rather than NaN.
        let success_rate = if total_tests == 0 {
            0.0
        } else {
            passed_tests as f64 / total_tests as f64 * 100.0
        };

        ReportSummary {
            test_run_timestamp: self.started,
            total_tests,
            passed_tests,
            failed_tests,
            success_rate,
            test_details: self.results,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ReportSummary {
    pub test_run_timestamp: DateTime<Local>,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Percentage in `0.0..=100.0`.
    pub success_rate: f64,
    pub test_details: Vec<TestResult>,
}

impl ReportSummary {
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        info!(path = %path.display(), tests = self.total_tests, "wrote test report");
        Ok(())
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test Execution Summary:")?;
        writeln!(f, "Total Tests: {}", self.total_tests)?;
        writeln!(f, "Passed: {}", self.passed_tests)?;
        writeln!(f, "Failed: {}", self.failed_tests)?;
        writeln!(f, "Success Rate: {:.1}%", self.success_rate)?;
        write!(f, "\nDetailed Results:")?;

        for test in &self.test_details {
            let icon = match test.status {
                TestStatus::Passed => '✓',
                TestStatus::Failed => '✗',
            };
            write!(
                f,
                "\n{icon} {}: {} ({:?}s)",
                test.test_name, test.status, test.execution_time
            )?;
            if test.status == TestStatus::Failed {
                write!(f, "\n   Error: {}", test.message)?;
            }
        }

        Ok(())
    }
}
