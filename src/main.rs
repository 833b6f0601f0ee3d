mod arguments;
mod context;
mod error;
mod filter;
mod infrastructure;
mod join;
mod log;
mod parse;
mod resolve;
mod rule;
mod run;
mod targets;
mod wrap;

use arguments::Arguments;
use clap::Parser;
use context::Context;
use error::ApplicationError;
use infrastructure::{OsConsole, OsFileSystem};
use std::{path::PathBuf, process::exit};

const DEFAULT_DIRECTORY: &str = ".";

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Context::new(OsConsole::new(), OsFileSystem::new());

    if let Err(error) = execute(&context, &arguments).await {
        context
            .console()
            .lock()
            .await
            .write_stderr(
                format!(
                    "{}{}\n",
                    arguments.log_prefix.as_deref().unwrap_or_default(),
                    error
                )
                .as_bytes(),
            )
            .await
            .unwrap();

        exit(1)
    }
}

async fn execute(context: &Context, arguments: &Arguments) -> Result<(), ApplicationError> {
    run::run(
        context,
        &run::Options {
            debug: arguments.debug,
            directory: PathBuf::from(
                arguments
                    .directory
                    .as_deref()
                    .unwrap_or(DEFAULT_DIRECTORY),
            ),
            exclusions: arguments.exclude.clone(),
            inclusions: arguments.include.clone(),
            object_extension: arguments.object_extension.clone(),
            resolution: arguments.resolution,
            source_extension: arguments.source_extension.clone(),
            width: arguments.width.into(),
        },
    )
    .await
}
