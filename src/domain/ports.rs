use crate::domain::model::{AnalysisResult, ExtractedReports};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io;

/// What to do with a line that contains a non-integer token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Stop the run at the first malformed line.
    #[default]
    Abort,
    /// Log a warning, drop the line and keep going.
    Skip,
}

/// Lazily yielded raw input lines, without the trailing `\n`. The underlying
/// handle closes when dropped.
pub type LineIter = Box<dyn Iterator<Item = io::Result<Vec<u8>>>>;

pub trait Storage {
    fn read_lines(&self, path: &str) -> Result<LineIter>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn parse_policy(&self) -> ParsePolicy;
    fn report_csv(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ExtractedReports>;
    fn transform(&self, data: ExtractedReports) -> Result<AnalysisResult>;
    fn load(&self, result: &AnalysisResult) -> Result<Option<String>>;
}
