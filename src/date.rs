use std::fmt;
use std::ops::RangeInclusive;

use chrono::format::ParseErrorKind;
use chrono::NaiveDate;

use crate::error::DateError;

/// Day-first layouts accepted in the date column, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    SlashDayMonthYear,
    SpaceDayMonthYear,
    DashDayMonthYear,
}

pub const LAYOUTS: [DateLayout; 3] = [
    DateLayout::SlashDayMonthYear,
    DateLayout::SpaceDayMonthYear,
    DateLayout::DashDayMonthYear,
];

impl DateLayout {
    pub fn format(self) -> &'static str {
        match self {
            DateLayout::SlashDayMonthYear => "%d/%m/%Y",
            DateLayout::SpaceDayMonthYear => "%d %m %Y",
            DateLayout::DashDayMonthYear => "%d-%m-%Y",
        }
    }

    pub fn separator(self) -> char {
        match self {
            DateLayout::SlashDayMonthYear => '/',
            DateLayout::SpaceDayMonthYear => ' ',
            DateLayout::DashDayMonthYear => '-',
        }
    }

    /// Day and month are one or two digits, the year exactly four, joined by
    /// a single separator with nothing else around them.
    pub fn matches_shape(self, raw: &str) -> bool {
        let parts: Vec<&str> = raw.split(self.separator()).collect();
        match parts.as_slice() {
            [day, month, year] => {
                is_digits(day, 1..=2) && is_digits(month, 1..=2) && is_digits(year, 4..=4)
            }
            _ => false,
        }
    }
}

fn is_digits(part: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format())
    }
}

/// Parses `raw` with the first layout that accepts it.
///
/// An input that fits no layout's shape is [`DateError::InvalidFormat`]. An
/// input that fits a layout's shape but names an impossible day (31/2/2024,
/// 1 13 2024) is [`DateError::Field`], whichever layout it was written in.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let mut component_failure = None;

    for layout in LAYOUTS {
        if !layout.matches_shape(raw) {
            continue;
        }
        match NaiveDate::parse_from_str(raw, layout.format()) {
            Ok(date) => return Ok(date),
            Err(err) if is_component_error(err.kind()) => {
                component_failure = Some((layout, err));
            }
            Err(_) => {}
        }
    }

    match component_failure {
        Some((layout, source)) => Err(DateError::Field {
            input: raw.to_string(),
            layout,
            source,
        }),
        None => Err(DateError::InvalidFormat(raw.to_string())),
    }
}

fn is_component_error(kind: ParseErrorKind) -> bool {
    matches!(kind, ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
}
