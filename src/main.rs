//! lolcat - rainbow cat.

mod commands;

use std::process::ExitCode;

use lolcat::Cli;

fn main() -> ExitCode {
    lolcat::logging::init();

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            commands::info::handle_argument_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let (show_help, show_version) = (cli.help, cli.version);
    let options = commands::load_options(cli);

    let result = if show_help {
        commands::info::handle_help(&options)
    } else if show_version {
        commands::info::handle_version(&options)
    } else {
        commands::cat::handle_cat(&options)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lolcat: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
