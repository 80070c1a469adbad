use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use sable_runtime::{Sable, SableError, ScriptedInput, StdoutSink};

/// Sable language interpreter.
///
/// Sable is a small class-based message-passing language. Programs
/// arrive as JSON documents describing classes, methods and message
/// sends; this CLI loads a document, validates it, and runs it by
/// sending `run` to a fresh `Main` instance.
///
/// EXAMPLES:
///     sable run program.json              Run a program
///     sable run program.json -i in.txt    Feed `String read` from a file
///     sable check program.json            Validate without running
#[derive(Parser)]
#[command(name = "sable")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Sable program document
    ///
    /// Loads the JSON document and executes it. Lines consumed by
    /// `String read` come from standard input unless an input file is
    /// given.
    #[command(visible_alias = "r")]
    Run {
        /// Path to the JSON program document
        file: String,
        /// Read program input from this file instead of stdin
        #[arg(long, short = 'i')]
        input: Option<String>,
    },

    /// Validate a program document without running it
    ///
    /// Checks that the document parses, declares a runnable `Main`,
    /// and that every class chain reaches a built-in ancestor.
    #[command(visible_alias = "c")]
    Check {
        /// Path to the JSON program document
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Run { file, input } => run(&file, input.as_deref()),
        Commands::Check { file } => Sable::check_file(&file),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

fn run(file: &str, input: Option<&str>) -> Result<(), SableError> {
    let mut sable = match input {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(SableError::Source)?;
            Sable::with_io(
                Box::new(ScriptedInput::from_text(&text)),
                Box::new(StdoutSink),
            )
        }
        None => Sable::new(),
    };
    sable.run_file(file)
}
