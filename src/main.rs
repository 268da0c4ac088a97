use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use change_index_path::{logging, Rewriter, RewriterConfig, DEFAULT_TARGET};

const EXIT_SUCCESS: u8 = 0;
/// Any failure, including a bad command line
const EXIT_FAILURE: u8 = 1;
/// `--check` found content that would be rewritten
const EXIT_WOULD_CHANGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to rewrite in place
    #[arg(default_value = DEFAULT_TARGET)]
    target: PathBuf,

    /// Report what would change without writing the file
    #[arg(long)]
    check: bool,

    /// Print the rewrite report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Exit code for a command line clap refused. Help and version requests
/// are not failures.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<u8> {
    info!(
        "Starting change-index-path v{}",
        change_index_path::version()
    );

    let config = RewriterConfig::new(&cli.target).with_check(cli.check);
    let report = Rewriter::new(config).run().map_err(|err| {
        let context = format!("Failed to rewrite {}", err.path().display());
        anyhow::Error::new(err).context(context)
    })?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{}", json).context("Failed to write report")?;
    }

    if cli.check && report.changed {
        info!("{} would be rewritten", report.target.display());
        return Ok(EXIT_WOULD_CHANGE);
    }

    Ok(EXIT_SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(ExitCode::from(parse_exit_code(&err)));
        }
    };

    logging::init_logging(cli.verbose, std::io::stderr().is_terminal());
    let code = run(&cli, &mut std::io::stdout().lock())?;
    Ok(ExitCode::from(code))
}
