use anyhow::Context;
use clap::Parser;
use dealmaker::cli::Cli;
use dealmaker::{execute, DealError, EthConnector, OutputFormat};
use std::process::ExitCode;

/// Exit status for input that failed validation before anything was sent
const EXIT_INVALID_INPUT: u8 = 2;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let output = execute(cli, &EthConnector).await?;
    output.render(format).context("failed to render command output")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("Error: {:#}", err);
            match err.downcast_ref::<DealError>() {
                Some(deal_err) if deal_err.is_validation() => ExitCode::from(EXIT_INVALID_INPUT),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
