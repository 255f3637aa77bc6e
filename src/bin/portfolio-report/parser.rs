use std::path::PathBuf;

use clap::{ArgAction, value_parser};

use portfolio_report::cli;
use portfolio_report::core::GenericResult;

pub struct Options {
    pub log_level: log::Level,
    pub config_path: Option<String>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

pub fn parse() -> GenericResult<Options> {
    let mut app = cli::new_app("portfolio-report", "Generates investment summary report out of brokerage statements")
        .version(env!("CARGO_PKG_VERSION"))
        .long_about("\
            Looks for Holding*, Export* and Dividend* statements in the input directory and \
            generates \"Generated Report - <client>.xlsx\" investment summary in the output \
            directory.")
        .args([
            cli::new_arg("config", "Configuration file path [default: ~/.portfolio-report/config.yaml]")
                .short('c').long("config")
                .value_name("PATH"),

            cli::new_arg("verbose", "Set verbosity level")
                .short('v').long("verbose")
                .action(ArgAction::Count),

            cli::new_arg("INPUT_DIR", "Directory with the statements")
                .required(true)
                .value_parser(value_parser!(PathBuf)),

            cli::new_arg("OUTPUT_DIR", "Directory to save the report to")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        ]);

    let matches = app.get_matches_mut();

    let log_level = match matches.get_count("verbose") {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        2 => log::Level::Trace,
        _ => return Err("Invalid verbosity level".into()),
    };

    let dir = |name: &str| -> GenericResult<PathBuf> {
        Ok(matches.get_one::<PathBuf>(name).cloned().ok_or_else(|| format!("{} is not specified", name))?)
    };

    Ok(Options {
        log_level,
        config_path: matches.get_one::<String>("config").cloned(),
        input_dir: dir("INPUT_DIR")?,
        output_dir: dir("OUTPUT_DIR")?,
    })
}
