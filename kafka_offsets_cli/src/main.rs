#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(forgetting_copy_types)]

mod app_config;
mod args;
mod error;
mod logging;
mod reporter;

use std::process::ExitCode;

use clap::Parser;
use kafka_offsets::queries::get_group_offsets::{get_group_offsets, GetGroupOffsetsQuery};
use tracing::debug;

use crate::app_config::AppConfig;
use crate::args::OffsetsArgs;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(&error),
    }
}

async fn run() -> Result<(), CliError> {
    let args = OffsetsArgs::parse();
    let config = AppConfig::from_args(args)?;

    debug!("Resolved config: {:?}", config);

    let query = GetGroupOffsetsQuery {
        connection_settings: config.connection_settings,
        group: config.group,
        topic: config.topic,
    };

    let report = get_group_offsets(query).await?;

    println!("{}", reporter::render_table(&report));

    Ok(())
}

fn report_error(error: &CliError) -> ExitCode {
    match error {
        CliError::Usage(message) => {
            for line in message.lines() {
                eprintln!("ERROR: {line}");
            }
            eprintln!();
            eprintln!("Run 'kafka-offsets --help' for the available options.");
        }
        CliError::Runtime(error) => {
            eprintln!("ERROR: {error:?}");
        }
    }

    ExitCode::from(error.exit_code())
}
