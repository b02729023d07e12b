pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod safety;

pub use crate::domain::model::{
    AnalysisResult, ExtractedReports, Level, Report, ReportOutcome, SafetySummary,
};
pub use crate::domain::ports::{ConfigProvider, LineIter, ParsePolicy, Pipeline, Storage};
pub use crate::utils::error::Result;
