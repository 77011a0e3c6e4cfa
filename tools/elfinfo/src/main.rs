use std::process::ExitCode;

use clap::Parser;

use elfinfo::cli::Cli;
use elfinfo::config::Settings;
use elfinfo::output::{emit_error, OutputFormat};
use elfinfo::{logger, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            let format = cli.output.unwrap_or(OutputFormat::Human);
            emit_error(format, &e);
            return e.exit_code();
        }
    };
    logger::init(settings.log_level);
    log::debug!("settings: {:?}", settings);

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            emit_error(settings.output, &e);
            e.exit_code()
        }
    }
}
