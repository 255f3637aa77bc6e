#[macro_use] pub mod core;
#[macro_use] pub mod types;

pub mod cli;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod report;
pub mod statements;
pub mod time;
pub mod util;

mod formats;
mod formatting;
