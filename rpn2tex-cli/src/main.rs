use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use rpn2tex::converter::convert;
use rpn2tex::converter::diagnostic::ErrorFormatter;
use std::fmt;
use std::fs;
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

/// Converts Reverse Polish Notation expressions to LaTeX
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// Input file path, or "-" to read standard input
    input: String,

    /// Write the LaTeX to this file instead of standard output
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Source lines to show before and after the line of an error
    #[clap(long, default_value_t = 0)]
    context_lines: usize,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .parse_default_env()
        .init();

    if let Err(error) = run(&arguments) {
        eprintln!("{}", describe(&error));
        process::exit(1);
    }
}

fn run(arguments: &Arguments) -> Result<()> {
    let source = read_input(&arguments.input, io::stdin())?;
    let latex = convert_source(&source, arguments.context_lines)?;
    write_output(arguments.output.as_deref(), &latex)
}

/// A formatted diagnostic, already carrying its own `Error:` header.
#[derive(Debug)]
struct Report(String);

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Report {}

/// The text printed to standard error for a failed run.
fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<Report>() {
        Some(report) => report.to_string(),
        None => format!("Error: {:#}", error),
    }
}

/// Reads the whole input, from `stdin` when `path` is `-`.
fn read_input(path: &str, mut stdin: impl Read) -> Result<String> {
    if path == "-" {
        debug!("reading expression from standard input");
        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .context("Failed to read standard input")?;
        return Ok(buffer);
    }

    debug!("reading expression from {}", path);
    fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))
}

/// Runs the conversion, turning a rejected input into a report that points
/// at the offending position in `source`.
fn convert_source(source: &str, context_lines: usize) -> Result<String> {
    convert(source).map_err(|diagnostic| {
        let formatter = ErrorFormatter::new(source).with_context_lines(context_lines);
        match formatter.format(&diagnostic) {
            Ok(report) => anyhow::Error::new(Report(report)),
            Err(error) => error.context(diagnostic),
        }
    })
}

fn write_output(path: Option<&Path>, latex: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", latex))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", latex),
    }
    Ok(())
}
