mod normalizer;

pub use crate::types::{Date, DateTime};

pub use normalizer::*;

pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).to_string()
}
