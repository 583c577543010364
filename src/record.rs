use clap::ValueEnum;

use crate::date::parse_date;
use crate::error::RowError;
use crate::models::AttendanceRecord;

pub const FIELD_COUNT: usize = 5;

const DATE_FIELD: usize = 0;
const NAME_FIELD: usize = 1;
const CLASS_FIELD: usize = 2;
const HOURS_FIELD: usize = 3;
const CATEGORY_FIELD: usize = 4;

/// What to do with an hours value that is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HoursPolicy {
    /// Reject the row and abort the run.
    #[default]
    Strict,
    /// Store zero and keep going.
    Lenient,
}

/// Builds a record from the positional columns
/// `date, name, class, hours, category`.
pub fn parse_row(fields: &[&str], policy: HoursPolicy) -> Result<AttendanceRecord, RowError> {
    if fields.len() != FIELD_COUNT {
        return Err(RowError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let date = parse_date(fields[DATE_FIELD]).map_err(|source| RowError::Date {
        index: DATE_FIELD,
        source,
    })?;
    let hours = parse_hours(fields[HOURS_FIELD], policy)?;

    Ok(AttendanceRecord {
        date,
        name: fields[NAME_FIELD].to_string(),
        class: fields[CLASS_FIELD].to_string(),
        hours,
        category: fields[CATEGORY_FIELD].to_string(),
    })
}

fn parse_hours(raw: &str, policy: HoursPolicy) -> Result<i32, RowError> {
    match raw.parse::<i32>() {
        Ok(hours) => Ok(hours),
        Err(source) => match policy {
            HoursPolicy::Strict => Err(RowError::Hours {
                index: HOURS_FIELD,
                value: raw.to_string(),
                source,
            }),
            HoursPolicy::Lenient => {
                tracing::warn!(value = raw, "hours is not an integer, storing 0");
                Ok(0)
            }
        },
    }
}
