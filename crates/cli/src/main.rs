use std::env;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};
use pattern_picker_cli::browser;
use pattern_picker_cli::cli_args::{load_env_file, Args};
use pattern_picker_core::config::DEFAULT_SHELL;
use pattern_picker_core::error::Result;
use pattern_picker_core::execution::{execute_command, shell_command};
use pattern_picker_core::file_handling::get_pattern_definitions;
use pattern_picker_core::session::{Effect, Session};

fn execute() -> Result<()> {
    let args = Args::parse();
    load_env_file(args.env_file.as_deref());
    // Parsed again so values from the dotenv file feed the env fallbacks
    let args = Args::parse();

    let metadata_path = args.metadata_path()?;
    let patterns = get_pattern_definitions(&metadata_path)?;

    let config = args.session_config();
    if config.command.output_results && !Path::new(&config.command.output_dir).is_dir() {
        warn!(
            "Output directory `{}` does not exist; the command will fail to write its result",
            config.command.output_dir
        );
    }

    let mut session = Session::new(patterns, config);

    let command_line = match browser::run_session(&mut session)? {
        Effect::Execute(command_line) => command_line,
        effect => {
            debug!("Session ended with {:?}", effect);
            return Ok(());
        }
    };

    if args.dry_run {
        info!("Dry run, not executing");
        println!("{command_line}");
        return Ok(());
    }

    println!("Executing command:\n{command_line}");

    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());
    execute_command(shell_command(&shell, &command_line))
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
