use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::Instant,
};

use clap::{Parser as ClapParser, ValueEnum};
use derive_attrs::{
    ast::ast::Derive,
    config::{LogLevel, ParserConfig},
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Rust debug output of the tree
    Debug,
    /// The annotation re-written in canonical form
    Canonical,
    /// JSON, one document per annotation
    Json,
}

/// Parse `#[ident(key=value, ...)]` annotations and print their structure.
#[derive(Debug, ClapParser)]
#[command(name = "derive-attrs", version)]
struct Cli {
    /// Annotation to parse. Reads --file or stdin when omitted, one annotation per line.
    annotation: Option<String>,

    /// Read annotations from this file
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Maximum map nesting, overrides DERIVE_ATTRS_MAX_DEPTH
    #[arg(long)]
    max_depth: Option<usize>,

    /// trace, debug, info, warn or error; overrides DERIVE_ATTRS_LOG_LEVEL
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_filter_str()))
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .finish();

    // The first subscriber wins if one is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn render(derive: &Derive, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Debug => Ok(format!("{:#?}", derive)),
        Format::Canonical => Ok(derive.to_string()),
        Format::Json => serde_json::to_string(derive),
    }
}

fn parse_line(line: &str, label: &Arc<String>, config: &ParserConfig) -> Result<Derive, Error> {
    let tokens = tokenize(line, Some(label.to_string()))?;
    parse(tokens, Arc::clone(label), config)
}

fn read_input(cli: &Cli) -> io::Result<(String, String)> {
    if let Some(annotation) = &cli.annotation {
        return Ok((String::from(derive_attrs::DEFAULT_SOURCE), annotation.clone()));
    }

    match &cli.file {
        Some(path) => Ok((path.display().to_string(), read_to_string(path)?)),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((String::from("<stdin>"), buffer))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match LogLevel::from_env() {
        Ok(level) => cli.log_level.unwrap_or(level),
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };
    init_logging(log_level);

    let config = match ParserConfig::from_env() {
        Ok(config) => config.apply_overrides(cli.max_depth),
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let (label, contents) = match read_input(&cli) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Failed to read input: {}", error);
            return ExitCode::FAILURE;
        }
    };
    let label = Arc::new(label);

    let start = Instant::now();
    let mut failures = 0;
    let mut parsed = 0;

    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        match parse_line(line, &label, &config) {
            Ok(derive) => match render(&derive, cli.format) {
                Ok(text) => {
                    println!("{}", text);
                    parsed += 1;
                }
                Err(error) => {
                    eprintln!("Failed to render `{}`: {}", derive.identity, error);
                    failures += 1;
                }
            },
            Err(error) => {
                eprintln!("{}", display_error(&error, line));
                failures += 1;
            }
        }
    }

    tracing::info!(parsed, failures, elapsed = ?start.elapsed(), "done");

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
