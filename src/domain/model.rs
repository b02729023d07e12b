use serde::{Deserialize, Serialize};

/// One integer reading within a report.
pub type Level = i64;

/// A parsed input line. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub line: usize,
    pub levels: Vec<Level>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOutcome {
    pub line: usize,
    pub levels: Vec<Level>,
    pub safe: bool,
    pub dampened_safe: bool,
    /// First index whose removal turned an unsafe report safe.
    pub removed_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySummary {
    pub total_reports: usize,
    pub safe_count: usize,
    pub safe_count_with_dampener: usize,
    pub skipped_lines: usize,
}

impl SafetySummary {
    pub fn record(&mut self, outcome: &ReportOutcome) {
        self.total_reports += 1;
        if outcome.safe {
            self.safe_count += 1;
        }
        if outcome.dampened_safe {
            self.safe_count_with_dampener += 1;
        }
    }
}

/// Reports read by the extract phase, plus lines dropped under the skip policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedReports {
    pub reports: Vec<Report>,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: SafetySummary,
    pub outcomes: Vec<ReportOutcome>,
}
