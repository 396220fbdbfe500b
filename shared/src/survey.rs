//! ==============================================================================
//! survey.rs - directional survey listings
//! ==============================================================================
//!
//! a survey listing is a plain text table: optional title lines, a header
//! row naming the columns (it mentions `MD` or "measured"), then one station
//! per line. a line reading `EOF` ends the table.
//!
//! ==============================================================================

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::las::parse_values;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("no header row naming the measured depth column")]
    MissingHeader,

    #[error("line {line}: expected {expected} values, found {found}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: not a number: {value}")]
    InvalidNumber { line: usize, value: String },
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SurveyData {
    /// column names, whitespace separated in the header row
    pub headers: Vec<String>,
    /// one row per survey station, in header order
    pub stations: Vec<Vec<f64>>,
}

impl SurveyData {
    /// every value of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let index = self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))?;
        Some(self.stations.iter().map(|row| row[index]).collect())
    }

    /// deepest measured depth, from the first column
    pub fn total_depth(&self) -> Option<f64> {
        self.stations
            .iter()
            .filter_map(|row| row.first().copied())
            .reduce(f64::max)
    }
}

fn is_header(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("measured") || lower.split_whitespace().any(|token| token == "md")
}

pub fn parse_survey(text: &str) -> Result<SurveyData, SurveyError> {
    let mut data = SurveyData::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line == "EOF" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        if data.headers.is_empty() {
            if is_header(line) {
                data.headers = line.split_whitespace().map(str::to_string).collect();
            } else {
                debug!("line {}: skipped before survey header", line_no);
            }
            continue;
        }

        let values = parse_values(line)
            .map_err(|value| SurveyError::InvalidNumber { line: line_no, value })?;
        if values.len() != data.headers.len() {
            return Err(SurveyError::ColumnMismatch {
                line: line_no,
                expected: data.headers.len(),
                found: values.len(),
            });
        }
        data.stations.push(values);
    }

    if data.headers.is_empty() {
        return Err(SurveyError::MissingHeader);
    }
    Ok(data)
}

// ==============================================================================
// tests
// ==============================================================================
