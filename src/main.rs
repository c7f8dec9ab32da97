use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use formcheck::bootstrap::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli_args = CliArgs::parse();

    formcheck::bootstrap::init_logging(&cli_args.log_level);
    formcheck::bootstrap::setup_panic_handler();

    if let Some(Command::Check { field, input }) = &cli_args.command {
        let verdict = formcheck::bootstrap::run_check(*field, input);
        println!("{}", verdict);
        return Ok(if verdict.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let bootstrap_result = formcheck::bootstrap::bootstrap(cli_args).await?;
    formcheck::bootstrap::start_server(bootstrap_result).await?;

    Ok(ExitCode::SUCCESS)
}
