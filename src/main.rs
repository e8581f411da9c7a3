use cidrviz::input::{CommandLine, USAGE};
use cidrviz::{logging, visualize};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse_args();
    if let Err(e) = logging::init(&commands.log_config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    colored::control::set_override(commands.color);
    log::info!("#Start main()");

    match visualize(commands.ranges.as_slice(), &commands.visualize_options()) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("exiting with error: {e:?}");
            eprintln!("{e}\n\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}
