use std::process::ExitCode;

use clap::Parser;

mod commands;
mod error;
mod settings;

fn main() -> ExitCode {
    let cli = settings::Cli::parse();
    let settings = match settings::load(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return err.exit_code();
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fine={level},engine={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        timezone = %settings.timezone,
        month_lookback = settings.month_lookback,
        "settings loaded"
    );

    match commands::run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report(&err, cli.json);
            err.exit_code()
        }
    }
}
