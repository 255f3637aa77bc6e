use std::fmt;

pub use chrono::NaiveDate as Date;
pub use chrono::NaiveDateTime as DateTime;
pub use rust_decimal::Decimal as Decimal;

#[cfg(test)]
macro_rules! date {
    ($day:expr, $month:expr, $year:expr) => (::chrono::NaiveDate::from_ymd_opt($year, $month, $day).unwrap())
}

/// A single cell of a generated report table.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Empty,
    Text(String),
    Number(Decimal),
}

impl Value {
    /// Interprets both numbers and locale-formatted numeric text as a decimal.
    pub fn coerce_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Number(value) => Some(*value),
            Value::Text(text) => crate::util::parse_amount(text),
            Value::Empty => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Text(text) => write!(f, "{}", text),
            Value::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::Text(text)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Value {
        Value::Number(value)
    }
}

impl From<Option<Decimal>> for Value {
    fn from(value: Option<Decimal>) -> Value {
        match value {
            Some(value) => Value::Number(value),
            None => Value::Empty,
        }
    }
}
