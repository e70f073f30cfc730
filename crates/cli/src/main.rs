mod config;
mod demo;
mod error;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use augment::Scale;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use config::Config;
use demo::{Demo, Transcript};
use error::Result;

const CONFIG_FILE: &str = "playground.toml";

#[derive(Parser)]
#[command(name = "playground")]
#[command(about = "Extension traits and default trait methods, one line at a time", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./playground.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run demonstrations (all of them when none are named)
    Run {
        /// Demonstrations to run
        #[arg(value_enum)]
        demos: Vec<Demo>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Temperature in degrees Celsius, overriding the config
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,
        /// Scale to print (repeatable), overriding the config
        #[arg(short, long)]
        scale: Vec<Scale>,
    },
    /// List available demonstrations
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per result
    Text,
    /// One JSON object per demonstration
    Json,
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Run {
            demos,
            format,
            temperature,
            scale,
        }) => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(value) = temperature {
                config.temperature.value = value;
            }
            if !scale.is_empty() {
                config.temperature.scales = scale;
            }
            config.validate()?;
            cmd_run(&config, &demos, format, &mut stdout)
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            cmd_run(&config, &[], Format::Text, &mut stdout)
        }
        Some(Commands::List) => cmd_list(&mut stdout),
    }
}

fn cmd_run(config: &Config, requested: &[Demo], format: Format, out: &mut impl Write) -> Result<()> {
    for demo in demo::select(requested) {
        let transcript = demo.run(config);
        write_transcript(&transcript, format, out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_transcript(transcript: &Transcript, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => {
            for line in &transcript.lines {
                writeln!(out, "{line}")?;
            }
        }
        Format::Json => {
            writeln!(out, "{}", serde_json::to_string(transcript)?)?;
        }
    }
    Ok(())
}

fn cmd_list(out: &mut impl Write) -> Result<()> {
    for demo in Demo::ALL {
        writeln!(out, "{:<24}{}", demo.id(), demo.description())?;
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        tracing::info!(path = %path.display(), "loading config");
        return Ok(Config::load(path)?);
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        tracing::info!(path = %default_path.display(), "loading config");
        Ok(Config::load(default_path)?)
    } else {
        tracing::debug!("no {CONFIG_FILE} found, using defaults");
        Ok(Config::default_config())
    }
}
