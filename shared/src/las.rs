//! ==============================================================================
//! las.rs - LAS well log parsing
//! ==============================================================================
//!
//! purpose:
//!     reads LAS 2.0 well logs as uploaded from the wellpath page. header
//!     sections hold `MNEM.UNIT  VALUE : DESCRIPTION` lines; the ~A section
//!     holds one depth step per line, columns in ~C curve order.
//!
//! sections:
//!     ~V version, ~W well, ~C curves, ~P parameters, ~O other (free text),
//!     ~A ascii log data. anything else is skipped with a warning.
//!
//! limitations:
//!     wrapped data (`WRAP. YES`) is not unwrapped; every ~A line must carry
//!     a full row.
//!
//! ==============================================================================

use std::fmt;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LasError {
    #[error("not a .las file: {0}")]
    InvalidExtension(String),

    #[error("line {line}: data before the first section marker")]
    OutsideSection { line: usize },

    #[error("line {line}: malformed {section} entry: {text}")]
    MalformedLine {
        line: usize,
        section: Section,
        text: String,
    },

    #[error("line {line}: ~A data before any curve definition")]
    NoCurves { line: usize },

    #[error("line {line}: expected {expected} values, found {found}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: not a number: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// LAS section, from the letter after `~`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Version,
    Well,
    Curve,
    Parameter,
    Other,
    Ascii,
    Unknown,
}

impl Section {
    /// section a marker line opens, `None` if the line is not a marker
    fn from_marker(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('~')?;
        let section = match rest.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('V') => Self::Version,
            Some('W') => Self::Well,
            Some('C') => Self::Curve,
            Some('P') => Self::Parameter,
            Some('O') => Self::Other,
            Some('A') => Self::Ascii,
            _ => Self::Unknown,
        };
        Some(section)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Version => "~V",
            Self::Well => "~W",
            Self::Curve => "~C",
            Self::Parameter => "~P",
            Self::Other => "~O",
            Self::Ascii => "~A",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// ==============================================================================
// header entries
// ==============================================================================

/// one `MNEM.UNIT  VALUE : DESCRIPTION` line
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LasEntry {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

impl LasEntry {
    /// parse a header line; curve lines may leave out the `: DESCRIPTION` part
    fn parse(text: &str, description_required: bool) -> Option<Self> {
        let (mnemonic, rest) = text.split_once('.')?;
        let mnemonic = mnemonic.trim();
        if mnemonic.is_empty() {
            return None;
        }

        // the unit runs from the dot to the first space
        let unit_end = rest
            .find(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or(rest.len());
        let (unit, rest) = rest.split_at(unit_end);

        let (value, description) = match rest.rfind(':') {
            Some(colon) => (&rest[..colon], &rest[colon + 1..]),
            None if description_required => return None,
            None => (rest, ""),
        };

        Some(Self {
            mnemonic: mnemonic.to_string(),
            unit: unit.trim().to_string(),
            value: value.trim().to_string(),
            description: description.trim().to_string(),
        })
    }
}

// ==============================================================================
// parsed file
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LasData {
    pub version: Vec<LasEntry>,
    pub well: Vec<LasEntry>,
    /// curve definitions, in ~A column order
    pub curves: Vec<LasEntry>,
    pub parameters: Vec<LasEntry>,
    pub other: Vec<String>,
    /// one row per depth step, one value per curve
    pub rows: Vec<Vec<f64>>,
}

fn find_entry<'a>(entries: &'a [LasEntry], mnemonic: &str) -> Option<&'a LasEntry> {
    entries
        .iter()
        .find(|entry| entry.mnemonic.eq_ignore_ascii_case(mnemonic))
}

impl LasData {
    pub fn version_entry(&self, mnemonic: &str) -> Option<&LasEntry> {
        find_entry(&self.version, mnemonic)
    }

    pub fn well_entry(&self, mnemonic: &str) -> Option<&LasEntry> {
        find_entry(&self.well, mnemonic)
    }

    pub fn parameter(&self, mnemonic: &str) -> Option<&LasEntry> {
        find_entry(&self.parameters, mnemonic)
    }

    pub fn curve_names(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.mnemonic.as_str()).collect()
    }

    /// every value of one curve, top to bottom
    pub fn column(&self, curve: &str) -> Option<Vec<f64>> {
        let index = self
            .curves
            .iter()
            .position(|c| c.mnemonic.eq_ignore_ascii_case(curve))?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// one depth step keyed by curve name
    pub fn row(&self, index: usize) -> Option<Vec<(&str, f64)>> {
        let row = self.rows.get(index)?;
        Some(
            self.curves
                .iter()
                .map(|c| c.mnemonic.as_str())
                .zip(row.iter().copied())
                .collect(),
        )
    }
}

// ==============================================================================
// parsing
// ==============================================================================

/// split a data line on whitespace into numbers; the error carries the bad token
pub(crate) fn parse_values(line: &str) -> Result<Vec<f64>, String> {
    line.split_whitespace()
        .map(|token| token.parse::<f64>().map_err(|_| token.to_string()))
        .collect()
}

/// `Ok` when `name` ends in `.las` (any case)
pub fn check_las_extension(name: &str) -> Result<(), LasError> {
    let is_las = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("las"))
        .unwrap_or(false);

    if is_las {
        Ok(())
    } else {
        Err(LasError::InvalidExtension(name.to_string()))
    }
}

/// read and parse a LAS file from disk
pub fn read_las_file(path: impl AsRef<Path>) -> Result<LasData, LasError> {
    let path = path.as_ref();
    check_las_extension(&path.to_string_lossy())?;
    let text = std::fs::read_to_string(path)?;
    parse_las(&text)
}

/// parse the text of a LAS file
pub fn parse_las(text: &str) -> Result<LasData, LasError> {
    let mut data = LasData::default();
    let mut section: Option<Section> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(next) = Section::from_marker(line) {
            if next == Section::Unknown {
                warn!("line {}: unknown LAS section {:?}, skipping it", line_no, line);
            }
            section = Some(next);
            continue;
        }

        let Some(current) = section else {
            return Err(LasError::OutsideSection { line: line_no });
        };

        let malformed = || LasError::MalformedLine {
            line: line_no,
            section: current,
            text: line.to_string(),
        };

        match current {
            Section::Version => data.version.push(LasEntry::parse(line, true).ok_or_else(malformed)?),
            Section::Well => data.well.push(LasEntry::parse(line, true).ok_or_else(malformed)?),
            Section::Parameter => {
                data.parameters.push(LasEntry::parse(line, true).ok_or_else(malformed)?)
            }
            Section::Curve => data.curves.push(LasEntry::parse(line, false).ok_or_else(malformed)?),
            Section::Other => data.other.push(line.to_string()),
            Section::Ascii => {
                if data.curves.is_empty() {
                    return Err(LasError::NoCurves { line: line_no });
                }

                let values = parse_values(line)
                    .map_err(|value| LasError::InvalidNumber { line: line_no, value })?;
                if values.len() != data.curves.len() {
                    return Err(LasError::ColumnMismatch {
                        line: line_no,
                        expected: data.curves.len(),
                        found: values.len(),
                    });
                }
                data.rows.push(values);
            }
            Section::Unknown => debug!("line {}: skipped", line_no),
        }
    }

    Ok(data)
}

// ==============================================================================
// tests
// ==============================================================================
