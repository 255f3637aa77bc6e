//! Parsers of the brokerage statements the report is built from.

mod locator;

pub mod dividend;
pub mod export;
pub mod holding;

pub use self::locator::{InputFiles, find_file};
