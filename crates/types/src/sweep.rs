//! Serialized form of a sweep plan entry.
//!
//! A sweep plan is exchanged as a list of `"A-B-T"` tokens: sweep stage `A-B`
//! `T` times. Writers emit the tokens without whitespace; readers trim it.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// One `area-stage-times` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SweepEntry {
    /// Primary id (the map / chapter).
    pub area: i64,
    /// Secondary id within the area.
    pub stage: i64,
    /// Number of sweeps.
    pub times: i64,
}

/// Reasons a token is not a well-formed `A-B-T` record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepEntryError {
    #[error("every item must look like A-B-T, but '{token}' contains no '-'")]
    MissingDash { token: String },

    #[error("three integers must be separated by '-', but '{token}' has {count} fields")]
    FieldCount { token: String, count: usize },

    #[error("three integers must be separated by '-', but '{field}' in '{token}' is not an integer")]
    NotInteger { token: String, field: String },
}

impl SweepEntry {
    pub fn new(area: i64, stage: i64, times: i64) -> Self {
        Self { area, stage, times }
    }
}

impl fmt::Display for SweepEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.area, self.stage, self.times)
    }
}

impl FromStr for SweepEntry {
    type Err = SweepEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if !token.contains('-') {
            return Err(SweepEntryError::MissingDash { token: token.to_string() });
        }
        let fields: Vec<&str> = token.split('-').collect();
        if fields.len() != 3 {
            return Err(SweepEntryError::FieldCount {
                token: token.to_string(),
                count: fields.len(),
            });
        }
        let parse = |field: &str| {
            field.trim().parse::<i64>().map_err(|_| SweepEntryError::NotInteger {
                token: token.to_string(),
                field: field.to_string(),
            })
        };
        Ok(SweepEntry {
            area: parse(fields[0])?,
            stage: parse(fields[1])?,
            times: parse(fields[2])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_token() {
        let entry: SweepEntry = "2-3-5".parse().expect("valid token");
        assert_eq!(entry, SweepEntry::new(2, 3, 5));
        assert_eq!(entry.to_string(), "2-3-5");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let entry: SweepEntry = " 10-4-2 \n".parse().expect("trimmed token");
        assert_eq!(entry, SweepEntry::new(10, 4, 2));
    }

    #[test]
    fn reports_the_failing_rule() {
        assert!(matches!("123".parse::<SweepEntry>(), Err(SweepEntryError::MissingDash { .. })));
        assert!(matches!(
            "1-2".parse::<SweepEntry>(),
            Err(SweepEntryError::FieldCount { count: 2, .. })
        ));
        assert!(matches!(
            "1-2-x".parse::<SweepEntry>(),
            Err(SweepEntryError::NotInteger { ref field, .. }) if field == "x"
        ));
    }
}
