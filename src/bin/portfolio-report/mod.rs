mod parser;

use std::io::{self, Write};
use std::process::ExitCode;

use log::error;

use portfolio_report::config::Config;
use portfolio_report::core::EmptyResult;
use portfolio_report::report;

use self::parser::Options;

fn main() -> ExitCode {
    let options = match parser::parse() {
        Ok(options) => options,
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err}.");
            return ExitCode::FAILURE;
        },
    };

    if let Err(err) = easy_logging::init(module_path!(), options.log_level) {
        let _ = writeln!(io::stderr(), "Failed to initialize the logging: {err}.");
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(options) {
        let message = err.to_string();

        if message.contains('\n') {
            error!("{err}");
        } else {
            error!("{err}.");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(options: Options) -> EmptyResult {
    let config = Config::new(options.config_path.as_deref())?;
    let report = report::generate_report(&options.input_dir, &options.output_dir, &config)?;

    let name = report.path.file_stem().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    report.metrics.print(&name);

    Ok(())
}
