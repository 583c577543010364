use std::num::ParseIntError;

use thiserror::Error;

use crate::date::DateLayout;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input does not have the shape of any supported layout.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
    /// The input has the right shape but a component is out of range.
    #[error("invalid date {input:?} for layout {layout}")]
    Field {
        input: String,
        layout: DateLayout,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("failed to parse date in field {index}")]
    Date {
        index: usize,
        #[source]
        source: DateError,
    },
    #[error("invalid hours {value:?} in field {index}")]
    Hours {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl RowError {
    /// Zero-based index of the offending field, when there is one.
    pub fn field_index(&self) -> Option<usize> {
        match self {
            RowError::FieldCount { .. } => None,
            RowError::Date { index, .. } | RowError::Hours { index, .. } => Some(*index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_names_the_input() {
        let err = DateError::InvalidFormat("tomorrow".to_string());
        assert_eq!(err.to_string(), "invalid date format: tomorrow");
    }

    #[test]
    fn field_count_display() {
        let err = RowError::FieldCount {
            expected: 5,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected 5 fields, found 3");
        assert_eq!(err.field_index(), None);
    }

    #[test]
    fn hours_error_keeps_value_and_index() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = RowError::Hours {
            index: 3,
            value: "x".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid hours \"x\" in field 3");
        assert_eq!(err.field_index(), Some(3));
    }
}
