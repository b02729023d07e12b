use crate::domain::model::{Level, Report};
use crate::utils::error::{AnalyzerError, ParseLevelError, Result};

/// Splits a trimmed line on whitespace and parses every token as a level.
pub fn parse_levels(text: &str) -> std::result::Result<Vec<Level>, ParseLevelError> {
    text.split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<Level>().map_err(|_| ParseLevelError {
                token: token.to_string(),
                column: idx + 1,
            })
        })
        .collect()
}

/// Blank lines yield `Ok(None)` and are not counted as reports.
pub fn parse_report(line: usize, text: &str) -> Result<Option<Report>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let levels = parse_levels(trimmed).map_err(|source| AnalyzerError::ParseError { line, source })?;
    Ok(Some(Report { line, levels }))
}
