//! lablog CLI - print JSON documents through the colored console.
//!
//! Reads each file (or stdin), parses it as JSON and logs it: strings print
//! as plain text, everything else as 4-space-indented JSON with long strings
//! truncated.

#![forbid(unsafe_code)]

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lablog_console::logging::ConsoleLogger;
use lablog_console::{Color, LabConsole, LogConfig, Loggable, Stream};
use lablog_core::logging::{debug, targets};

/// lablog - Pretty-print JSON values with colors and size limits.
#[derive(Parser, Debug)]
#[command(name = "lablog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input files; reads stdin when none are given or for `-`.
    files: Vec<PathBuf>,

    /// Treat every non-empty line as its own JSON document.
    #[arg(long, short = 'l')]
    lines: bool,

    /// Color for each document (black, red, green, yellow, blue, magenta,
    /// cyan, white, gray, darkgray).
    #[arg(long, short = 'c', default_value = "white")]
    color: Color,

    /// Write documents to stderr instead of stdout.
    #[arg(long)]
    stderr: bool,

    /// Maximum characters kept from any single string.
    #[arg(long, value_name = "N")]
    max_string: Option<usize>,

    /// Never emit color codes.
    #[arg(long, conflicts_with = "force_color")]
    no_color: bool,

    /// Always emit color codes.
    #[arg(long)]
    force_color: bool,

    /// Print a divider line before each document.
    #[arg(long)]
    divider: bool,

    /// Divider width in characters (1-200).
    #[arg(long, default_value_t = lablog_console::divider::DEFAULT_DIVIDER_WIDTH)]
    width: usize,

    /// Report what the tool is doing on stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    fn config(&self) -> LogConfig {
        let mut config = LogConfig::from_env();
        if let Some(max) = self.max_string {
            config = config.with_max_string_len(max);
        }
        if self.no_color {
            config = config.plain_mode();
        } else if self.force_color {
            config = config.force_color(true);
        }
        config
    }

    fn stream(&self) -> Stream {
        if self.stderr {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }
}

/// A single input that could not be processed.
#[derive(Debug)]
enum InputError {
    /// The input could not be read.
    Read { source: String, err: io::Error },
    /// A document is not valid JSON. `line` is set in `--lines` mode.
    Parse {
        source: String,
        line: Option<usize>,
        err: serde_json::Error,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Read { source, err } => write!(f, "{source}: {err}"),
            InputError::Parse {
                source,
                line: Some(line),
                err,
            } => write!(f, "{source}:{line}: {err}"),
            InputError::Parse {
                source,
                line: None,
                err,
            } => write!(f, "{source}: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Read { err, .. } => Some(err),
            InputError::Parse { err, .. } => Some(err),
        }
    }
}

/// Where one input comes from.
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self, stdin: &mut dyn Read) -> Result<String, InputError> {
        let result = match self {
            Input::Stdin => {
                let mut text = String::new();
                stdin.read_to_string(&mut text).map(|_| text)
            }
            Input::File(path) => fs::read_to_string(path),
        };
        result.map_err(|err| InputError::Read {
            source: self.name(),
            err,
        })
    }
}

fn inputs(files: &[PathBuf]) -> Vec<Input> {
    if files.is_empty() {
        return vec![Input::Stdin];
    }
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                Input::Stdin
            } else {
                Input::File(path.clone())
            }
        })
        .collect()
}

/// Splits `text` into documents, each parsed independently.
fn documents(
    text: &str,
    source: &str,
    lines: bool,
) -> Vec<Result<serde_json::Value, InputError>> {
    let parse = |doc: &str, line: Option<usize>| {
        serde_json::from_str::<serde_json::Value>(doc).map_err(|err| InputError::Parse {
            source: source.to_string(),
            line,
            err,
        })
    };

    if lines {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| parse(line, Some(i + 1)))
            .collect()
    } else {
        vec![parse(text, None)]
    }
}

/// Logs every document from every input. Returns false if anything failed.
fn run(cli: &Cli, console: &LabConsole, stdin: &mut dyn Read) -> bool {
    let stream = cli.stream();
    let mut ok = true;

    for input in inputs(&cli.files) {
        let source = input.name();
        debug!(target: targets::CLI, "reading {source}");

        let text = match input.read(stdin) {
            Ok(text) => text,
            Err(err) => {
                console.error([format!("lablog: {err}")]);
                ok = false;
                continue;
            }
        };

        for doc in documents(&text, &source, cli.lines) {
            match doc {
                Ok(value) => {
                    if cli.divider {
                        let line = console.divider_line(Color::Gray, '─', cli.width);
                        console.write_line(stream, &line);
                    }
                    console.log([Loggable::from(value)], cli.color, stream);
                }
                Err(err) => {
                    console.error([format!("lablog: {err}")]);
                    ok = false;
                }
            }
        }
    }

    ok
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    if cli.verbose {
        // Diagnostics share stderr so they never mix with rendered documents
        let diagnostics = LabConsole::with_writers(config.clone(), io::stderr(), io::stderr());
        ConsoleLogger::builder()
            .level(log::Level::Debug)
            .with_console(std::sync::Arc::new(diagnostics))
            .try_init();
    }

    let console = LabConsole::with_config(config);
    if run(&cli, &console, &mut io::stdin()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
