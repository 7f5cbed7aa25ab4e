//! Command implementations for the lexstat CLI.

use std::fs;
use std::io::{self, Read};

use crate::analysis::analyzer::TextAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::interaction::InteractionLog;

/// Execute a CLI command.
pub fn execute_command(args: LexstatArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
    }
}

/// Analyze a text and render the report.
fn analyze_text(args: AnalyzeArgs, cli_args: &LexstatArgs) -> Result<()> {
    let text = read_input(&args, cli_args)?;

    let analyzer = TextAnalyzer::new()?;
    let report = analyzer.analyze(&text)?;

    output_report(&report, cli_args)?;

    // Interaction logging goes to stderr, suppressed in quiet mode.
    if cli_args.verbosity() > 0 {
        let mut log = InteractionLog::new(io::stderr());
        log.analyzed(report.words)?;
    }

    Ok(())
}

/// Resolve the input text from argument, file, or stdin.
fn read_input(args: &AnalyzeArgs, cli_args: &LexstatArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(file) = &args.file {
        if cli_args.verbosity() > 1 {
            eprintln!("Reading text from: {}", file.display());
        }
        return Ok(fs::read_to_string(file)?);
    }

    if cli_args.verbosity() > 1 {
        eprintln!("Reading text from stdin");
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
