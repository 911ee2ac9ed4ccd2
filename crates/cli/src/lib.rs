//! Command line front end for `swagger-ts-core`.
//!
//! Reads an OpenAPI document, compiles its named schemas into TypeScript
//! declarations and writes them (plus any template assets) to disk.

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use clap::{CommandFactory, Parser, Subcommand};

pub mod config;
pub mod generate;
pub mod logging;
pub mod templates;

#[derive(Parser)]
#[command(
    name = "swagger-ts",
    version,
    about = "Generate TypeScript types from an OpenAPI document"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate types.ts from an OpenAPI document
    Generate(generate::GenerateArgs),
}

/// Parse `args` (including the program name) and run the selected command.
pub fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => generate::run(args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}
