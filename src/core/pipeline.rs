use crate::core::parser::parse_report;
use crate::core::safety::{dampener_index, is_safe};
use crate::core::{
    AnalysisResult, ConfigProvider, ExtractedReports, ParsePolicy, Pipeline, Report,
    ReportOutcome, SafetySummary, Storage,
};
use crate::utils::error::{AnalyzerError, Result};
use serde::Serialize;

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

pub fn evaluate(report: &Report) -> ReportOutcome {
    let safe = is_safe(&report.levels);
    let removed_index = if safe {
        None
    } else {
        dampener_index(&report.levels)
    };

    ReportOutcome {
        line: report.line,
        levels: report.levels.clone(),
        safe,
        dampened_safe: safe || removed_index.is_some(),
        removed_index,
    }
}

#[derive(Serialize)]
struct OutcomeRow {
    line: usize,
    levels: String,
    safe: bool,
    dampened_safe: bool,
    removed_index: Option<usize>,
}

impl From<&ReportOutcome> for OutcomeRow {
    fn from(outcome: &ReportOutcome) -> Self {
        let levels = outcome
            .levels
            .iter()
            .map(|level| level.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            line: outcome.line,
            levels,
            safe: outcome.safe,
            dampened_safe: outcome.dampened_safe,
            removed_index: outcome.removed_index,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<ExtractedReports> {
        let path = self.config.input_path();
        let policy = self.config.parse_policy();
        tracing::debug!("Reading reports from: {} (on parse error: {:?})", path, policy);

        let mut extracted = ExtractedReports::default();

        for (idx, line) in self.storage.read_lines(path)?.enumerate() {
            let line_no = idx + 1;
            let raw = line.map_err(|source| AnalyzerError::InputError {
                path: path.to_string(),
                source,
            })?;
            // invalid UTF-8 becomes U+FFFD and fails as a bad token
            let text = String::from_utf8_lossy(&raw);

            match parse_report(line_no, &text) {
                Ok(Some(report)) => extracted.reports.push(report),
                Ok(None) => tracing::debug!("Line {} is blank, ignoring", line_no),
                Err(e) if policy == ParsePolicy::Skip => {
                    tracing::warn!("⚠️ Skipping line {}: {}", line_no, e);
                    extracted.skipped_lines += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(extracted)
    }

    fn transform(&self, data: ExtractedReports) -> Result<AnalysisResult> {
        let mut summary = SafetySummary {
            skipped_lines: data.skipped_lines,
            ..SafetySummary::default()
        };
        let mut outcomes = Vec::with_capacity(data.reports.len());

        for report in &data.reports {
            let outcome = evaluate(report);
            tracing::debug!(
                "Line {}: safe={}, dampened_safe={}, removed_index={:?}",
                outcome.line,
                outcome.safe,
                outcome.dampened_safe,
                outcome.removed_index
            );
            summary.record(&outcome);
            outcomes.push(outcome);
        }

        Ok(AnalysisResult { summary, outcomes })
    }

    fn load(&self, result: &AnalysisResult) -> Result<Option<String>> {
        let Some(csv_path) = self.config.report_csv() else {
            return Ok(None);
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        for outcome in &result.outcomes {
            writer.serialize(OutcomeRow::from(outcome))?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| AnalyzerError::IoError(e.into_error()))?;

        self.storage.write_file(csv_path, &data)?;
        tracing::debug!("Wrote {} outcomes to {}", result.outcomes.len(), csv_path);

        Ok(Some(csv_path.to_string()))
    }
}
