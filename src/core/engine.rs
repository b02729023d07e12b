use crate::core::{AnalysisResult, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct SafetyEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SafetyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order. Any error ends the run and
    /// the partial counts are dropped with it.
    pub fn run(&mut self) -> Result<AnalysisResult> {
        tracing::info!("Starting report analysis...");
        self.monitor.log_stats("Start");

        let extracted = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} reports ({} skipped)",
            extracted.reports.len(),
            extracted.skipped_lines
        );
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(extracted)?;
        tracing::info!(
            "Evaluated {} reports: {} safe, {} safe with dampener",
            result.summary.total_reports,
            result.summary.safe_count,
            result.summary.safe_count_with_dampener
        );
        self.monitor.log_stats("Transform");

        if let Some(location) = self.pipeline.load(&result)? {
            tracing::info!("📁 Outcomes saved to: {}", location);
        }
        self.monitor.log_final_stats();

        Ok(result)
    }
}
