//! Monty Interpreter - CLI
//!
//! Command-line interface to execute Monty scripts.
//!
//! Usage: `monty <file> [--max-stack N]`

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use monty_core::{Interpreter, MontyConfig, MontyError, MontyResult, ScriptReader};

#[derive(Parser, Debug)]
#[command(name = "monty")]
#[command(version, about = "Run a Monty bytecode script")]
struct Args {
    /// Path to the script file
    file: PathBuf,

    /// Maximum stack depth (unbounded by default)
    #[arg(long = "max-stack", value_name = "N")]
    max_stack: Option<usize>,
}

fn main() -> ExitCode {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            debug!(error = %err, "argument parsing failed");
            return fail(&MontyError::Usage);
        }
    };

    let mut config = MontyConfig::new();
    if let Some(max) = args.max_stack {
        config = config.with_max_stack_size(max);
    }

    match run(&args.file, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

/// Open the script, run it to completion, and flush stdout on every path.
fn run(path: &Path, config: MontyConfig) -> MontyResult<()> {
    let mut source = ScriptReader::open(path)?;

    let stdout = io::stdout();
    let mut vm = Interpreter::new(config, BufWriter::new(stdout.lock()));

    let result = vm.run(&mut source);
    let flushed = vm.flush();
    debug!(lines = vm.line_number(), ok = result.is_ok(), "run complete");
    result.and(flushed)
}

fn fail(err: &MontyError) -> ExitCode {
    eprintln!("{}", err);
    ExitCode::from(err.exit_code())
}

/// Initialize logging on stderr.
///
/// `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
