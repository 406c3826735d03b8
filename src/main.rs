//! turtle-logo — run a Logo program and emit the drawing.
//!
//! ```text
//! turtle-logo square.logo -o square.svg
//! turtle-logo --format commands < spiral.logo
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use turtle_logo::config::{default_config_path, load_config, Config};
use turtle_logo::lang::lexer::Lexer;
use turtle_logo::lang::{ErrorKind, Interpreter, LogoError};
use turtle_logo::report;
use turtle_logo::turtle::{svg, Canvas, CommandLog, SvgStyle};

/// Interpreter for a Logo-like turtle graphics language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program to run. Reads standard input when omitted.
    path: Option<PathBuf>,

    /// What to emit once the program finishes.
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write output here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ~/.turtle-logo/config.yaml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the token stream and exit.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed program in canonical form and exit.
    #[arg(long)]
    ast: bool,

    /// More logging on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// An SVG drawing.
    Svg,
    /// One device command per line.
    Commands,
    /// The device commands as JSON.
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn load(path: Option<&Path>) -> io::Result<Config> {
    match path {
        Some(path) if !path.exists() => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("config file '{}' not found", path.display()),
        )),
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(path) => load_config(&path),
            None => Ok(Config::default()),
        },
    }
}

fn dump_tokens(source: &str) -> Result<String, LogoError> {
    let mut out = String::new();
    for token in Lexer::new(source) {
        let token = token?;
        out.push_str(&format!("{}\t{token}\n", token.position));
    }
    Ok(out)
}

fn execute(source: &str, config: &Config, format: Format) -> Result<String, LogoError> {
    let interpreter = Interpreter::new(&config.interpreter);
    match format {
        Format::Svg => {
            let mut canvas = Canvas::from_config(&config.canvas);
            interpreter.run(source, &mut canvas)?;
            Ok(svg::render(&canvas, &SvgStyle::from_config(&config.svg)))
        }
        Format::Commands => {
            let mut log = CommandLog::new();
            interpreter.run(source, &mut log)?;
            Ok(log
                .commands
                .iter()
                .map(|command| format!("{command}\n"))
                .collect())
        }
        Format::Json => {
            let mut log = CommandLog::new();
            interpreter.run(source, &mut log)?;
            serde_json::to_string_pretty(&log)
                .map(|json| json + "\n")
                .map_err(|e| LogoError::internal(format!("cannot serialize commands: {e}")))
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = read_source(args.path.as_deref()).unwrap_or_else(|e| {
        match &args.path {
            Some(path) => eprintln!("failed to read '{}': {e}", path.display()),
            None => eprintln!("failed to read standard input: {e}"),
        }
        std::process::exit(1);
    });

    let config = load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("failed to load config: {e}");
        std::process::exit(1);
    });

    let result = if args.tokens {
        dump_tokens(&source)
    } else if args.ast {
        Interpreter::parse(&source).map(|program| program.to_string())
    } else {
        execute(&source, &config, args.format)
    };

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            if err.kind == ErrorKind::Internal {
                tracing::error!(%err, "internal interpreter failure");
            }
            eprint!("{}", report::render(&source, &err));
            std::process::exit(1);
        }
    };

    let written = match &args.output {
        Some(path) => std::fs::write(path, output),
        None => {
            print!("{output}");
            Ok(())
        }
    };
    if let Err(e) = written {
        eprintln!("failed to write output: {e}");
        std::process::exit(1);
    }
}
