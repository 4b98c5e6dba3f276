//! Command-line front end for `jsonset-core`.
//!
//! Plays the role of the editing shell around the core: it reads the current
//! document, resolves the selected path, shows the node the way an editor
//! would, and writes the re-encoded document after a replacement.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use jsonset_core::{
    apply_edit, lookup, normalize_to_text, rows_of, ConflictPolicy, IndexPolicy, Path, SetOptions,
};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JSONSET_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "jsonset",
    version,
    about = "Replace values inside JSON documents by path.",
    after_help = "Paths are JSON arrays of keys and indices, e.g. '[\"customer\",0,\"name\"]'.\n\
                  Set JSONSET_LOG (e.g. JSONSET_LOG=debug) to control diagnostics on STDERR."
)]
struct Cli {
    /// Emit debug diagnostics on STDERR.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replace the value at PATH and write the updated document.
    Set(SetArgs),
    /// Print the content of the node at PATH followed by its JSON path.
    Show(ShowArgs),
    /// Print PATH in `$["key"][0]` notation.
    Path {
        /// JSON array of keys and indices.
        path: String,
    },
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Document to edit; `-` reads STDIN.
    file: PathBuf,

    /// Location of the value to replace; `[]` replaces the whole document.
    #[arg(short = 'p', long = "path", default_value = "[]")]
    path: String,

    /// Replacement value as JSON. Read from STDIN when omitted.
    #[arg(long = "value")]
    value: Option<String>,

    /// Write the updated document to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output", conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the input document.
    #[arg(short = 'i', long = "in-place", action = ArgAction::SetTrue)]
    in_place: bool,

    /// JSON object of options, e.g. '{"conflict":"fail","index":"pad_with_null"}'.
    #[arg(long = "opts", default_value = "{}")]
    opts: String,

    /// Fail instead of replacing populated slots of the wrong kind.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Fill gaps with null when an index lies past the end of an array.
    #[arg(long = "pad", action = ArgAction::SetTrue)]
    pad: bool,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Document to inspect; `-` reads STDIN.
    file: PathBuf,

    /// Location of the node to show.
    #[arg(short = 'p', long = "path", default_value = "[]")]
    path: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        let _ = writeln!(io::stderr(), "{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Set(args) => run_set(&args),
        Command::Show(args) => run_show(&args),
        Command::Path { path } => {
            let path = parse_path(&path)?;
            println!("{path}");
            Ok(())
        }
    }
}

fn run_set(args: &SetArgs) -> Result<()> {
    let source = InputSource::from_arg(&args.file);
    if args.in_place && source == InputSource::Stdin {
        bail!("--in-place requires a document file, not STDIN");
    }
    let path = parse_path(&args.path)?;
    let options = build_options(args)?;
    debug!(%path, conflict = %options.conflict_policy(), index = %options.index_policy(), "set");

    let document = read_input(&source)?;
    let value = match (&args.value, &source) {
        (Some(value), _) => value.clone(),
        (None, InputSource::File(_)) => read_input(&InputSource::Stdin)?,
        (None, InputSource::Stdin) => {
            bail!("--value is required when the document is read from STDIN")
        }
    };

    let outcome = apply_edit(&document, &path, &value, &options)
        .with_context(|| format!("failed to set value at {path}"))?;
    if !outcome.has_changes {
        info!(%path, "document unchanged");
    }

    let destination = match (&args.output, &source) {
        (Some(output), _) => Some(output.clone()),
        (None, InputSource::File(file)) if args.in_place => Some(file.clone()),
        _ => None,
    };
    match destination {
        Some(file) => fs::write(&file, format!("{}\n", outcome.contents))
            .with_context(|| format!("failed to write output to {}", file.display()))?,
        None => {
            println!("{}", outcome.contents);
            io::stdout().flush().ok();
        }
    }
    Ok(())
}

fn run_show(args: &ShowArgs) -> Result<()> {
    let path = parse_path(&args.path)?;
    let text = read_input(&InputSource::from_arg(&args.file))?;
    let document: Value = serde_json::from_str(&text).context("failed to parse document")?;
    let Some(node) = lookup(&document, &path) else {
        bail!("no value at {path}");
    };

    println!("{}", normalize_to_text(&rows_of(node)));
    println!("JSON Path: {path}");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn from_arg(arg: &std::path::Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read STDIN")?;
            Ok(buffer)
        }
    }
}

fn parse_path(raw: &str) -> Result<Path> {
    Path::from_json_str(raw.trim()).with_context(|| format!("invalid path: {raw}"))
}

fn build_options(args: &SetArgs) -> Result<SetOptions> {
    let mut options: SetOptions = serde_json::from_str(args.opts.trim())
        .with_context(|| format!("failed to parse --opts JSON: {}", args.opts))?;
    if args.strict {
        options = options.with_conflict_policy(ConflictPolicy::Fail);
    }
    if args.pad {
        options = options.with_index_policy(IndexPolicy::PadWithNull);
    }
    Ok(options)
}
