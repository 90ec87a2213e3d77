//! Mural CLI - maintenance surface for the visitor feedback board
//!
//! Submit, inspect, and prune feedback entries from the terminal.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::clear::run_clear;
use crate::commands::common::{resolve_page_path, resolve_store_path};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::list::run_list;
use crate::commands::render::run_render;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mural=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let store_path = resolve_store_path(cli.store);
    let page_path = resolve_page_path(cli.page);

    match cli.command {
        Some(Commands::Add { text, name, rating }) => {
            run_add(&text, name, rating, &store_path, page_path.as_deref()).await?;
        }
        Some(Commands::List { json }) => run_list(json, &store_path)?,
        Some(Commands::Delete { id, yes }) => {
            run_delete(&id, yes, &store_path, page_path.as_deref())?;
        }
        Some(Commands::Clear { yes }) => run_clear(yes, &store_path, page_path.as_deref())?,
        Some(Commands::Render { format, output }) => {
            run_render(format, output.as_deref(), &store_path)?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: mural "great work!"
            if cli.text.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.text, None, None, &store_path, page_path.as_deref()).await?;
            }
        }
    }

    Ok(())
}
