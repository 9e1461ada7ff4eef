use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use f::input::Input;
use f::interpreter::{self, Config};
use f::operators::{DEFAULT_JOIN, Format, Joined, JsonArray, SeparatorSet};
use f::parser;

#[derive(Parser)]
#[command(name = "f", version)]
#[command(
    about = "Pick fields from each input line by position.",
    after_help = "SPEC is N, N:, :N, N:M or ':'. Fields are numbered from 1; negative numbers count \
                  from the last field and 0 selects every field. A range whose left end lies past \
                  its right end prints its fields in reverse. Options must come before the first SPEC."
)]
struct Cli {
    /// Field specifications, applied in order
    #[arg(value_name = "SPEC", allow_hyphen_values = true)]
    specs: Vec<String>,

    /// Field separator characters (default: whitespace)
    #[arg(short = 'F', long = "field-separators", value_name = "CHARS")]
    separators: Option<String>,

    /// String placed between output fields (default: a space)
    #[arg(short = 'j', long = "join", value_name = "STRING", conflicts_with = "json")]
    join: Option<String>,

    /// Read FILE instead of stdin; may be repeated
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Output each line as a JSON array of strings
    #[arg(long = "json")]
    json: bool,

    /// Do not flush output after every line
    #[arg(long = "no-flush")]
    no_flush: bool,

    /// Log more; repeat for more detail (overridden by F_LOG)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("f: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("F_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let rules = parser::parse_rules(cli.specs.as_slice())?;

    let format: Box<dyn Format> = if cli.json {
        Box::new(JsonArray)
    } else {
        Box::new(Joined::new(cli.join.as_deref().unwrap_or(DEFAULT_JOIN)))
    };
    let config = Config {
        separators: SeparatorSet::new(cli.separators.as_deref().unwrap_or_default()),
        format,
        flush: !cli.no_flush,
    };

    let inputs: Vec<Input> = if cli.inputs.is_empty() {
        vec![Input::Stdin]
    } else {
        cli.inputs.into_iter().map(Input::File).collect()
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = interpreter::run(config, rules, &inputs, &mut out)?;
    tracing::info!(lines = stats.lines, fields = stats.fields, "done");
    Ok(())
}
