use clap::Parser;
use quick_geocode::cli::{self, Cli, Exit};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    // RUST_LOG still overrides the default filter.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    let exit = tokio::select! {
        exit = cli::run(&cli, &mut stdout, &mut stderr) => exit,
        _ = tokio::signal::ctrl_c() => {
            cli::report(&cli, &mut std::io::stderr(), "\nOperation cancelled");
            Exit::Failure
        }
    };
    exit.into()
}
