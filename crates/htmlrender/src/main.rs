use std::process::ExitCode;

use htmlrender::{run, setup_logging, Args, CliOptions, Error, USAGE};
use tracing::{debug, error};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (args, unrecognized_args) = match Args::parse(&args) {
        Ok(parsed) => parsed,
        Err(err) => return usage_error(&err),
    };

    if args.options.contains(CliOptions::Help) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    // need guard to live for lifetime of program
    let _guard = setup_logging(args.options.contains(CliOptions::Debug));

    if !unrecognized_args.is_empty() {
        let list: Vec<&str> = unrecognized_args.iter().map(String::as_str).collect();
        return usage_error(&Error::usage(format!(
            "unrecognized arguments: {}",
            list.join(" ")
        )));
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            debug!(code = err.exit_code(), "exiting");
            ExitCode::from(err.exit_code())
        }
    }
}

fn usage_error(err: &Error) -> ExitCode {
    eprintln!("htmlrender: {err}\n\n{USAGE}");
    ExitCode::from(err.exit_code())
}
