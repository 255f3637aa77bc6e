use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::formats::xls::{self, Cell};
use crate::types::Value;

use super::{Date, DateTime, format_date};

pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d-%B-%Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Brings dates of various representations to the single `DD-MM-YYYY` display format.
///
/// Text which can't be parsed as a date is returned as is (without a trailing time part), so the
/// normalizer may be safely applied to columns with mixed content.
#[derive(Clone)]
pub struct DateNormalizer {
    formats: Vec<String>,
}

impl DateNormalizer {
    pub fn new(formats: &[String]) -> DateNormalizer {
        DateNormalizer {
            formats: formats.to_vec(),
        }
    }

    pub fn normalize(&self, cell: &Cell) -> Value {
        match cell {
            Cell::String(value) | Cell::DateTimeIso(value) => Value::Text(self.normalize_str(value)),
            Cell::DateTime(value) if value.is_datetime() => match value.as_datetime() {
                Some(date_time) => Value::Text(format_date(date_time.date())),
                None => Value::Text(cell.to_string()),
            },
            _ => xls::get_value_cell(cell),
        }
    }

    pub fn normalize_str(&self, value: &str) -> String {
        let value = strip_time(value.trim());

        match self.parse(&value) {
            Some(date) => format_date(date),
            None => value.into_owned(),
        }
    }

    pub fn parse(&self, value: &str) -> Option<Date> {
        DATE_TIME_FORMATS.iter()
            .find_map(|format| DateTime::parse_from_str(value, format).ok())
            .map(|date_time| date_time.date())
            .or_else(|| {
                self.formats.iter().find_map(|format| Date::parse_from_str(value, format).ok())
            })
    }
}

impl Default for DateNormalizer {
    fn default() -> DateNormalizer {
        DateNormalizer {
            formats: DEFAULT_DATE_FORMATS.iter().map(ToString::to_string).collect(),
        }
    }
}

fn strip_time(value: &str) -> Cow<'_, str> {
    lazy_static! {
        static ref TIME_SUFFIX_REGEX: Regex = Regex::new(r"\s+\d{2}:\d{2}:\d{2}$").unwrap();
    }
    TIME_SUFFIX_REGEX.replace(value, "")
}
