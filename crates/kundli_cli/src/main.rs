mod config;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use kundli_rs::{
    KundliError, ParseOptions, analyze, analyze_career, analyze_doshas, dignity_by_name,
    house_sign_name, parse_chart, ruler_name_of, to_json,
};
use thiserror::Error;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::config::{ConfigError, KundliConfig};

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic chart rule engines: career and dosha analysis")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Compact single-line JSON
    #[arg(long, global = true)]
    compact: bool,
    /// Reject charts without a recognisable ascendant
    #[arg(long, global = true)]
    require_ascendant: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ruling planet of a zodiac sign
    Ruler {
        /// Sign name (English, Sanskrit or Hindi)
        sign: String,
    },
    /// Dignity of a planet placed in a sign
    Dignity {
        /// Planet name
        planet: String,
        /// Sign name
        sign: String,
    },
    /// Sign on a house for a given ascendant
    HouseSign {
        /// Ascendant sign
        ascendant: String,
        /// House number (wraps modulo 12)
        #[arg(allow_negative_numbers = true)]
        house: i32,
    },
    /// Career analysis of a chart document
    Career {
        /// Chart JSON path, or - for stdin
        chart: PathBuf,
    },
    /// Dosha analysis of a chart document
    Doshas {
        /// Chart JSON path, or - for stdin
        chart: PathBuf,
    },
    /// Chart summary, career and dosha analysis together
    Report {
        /// Chart JSON path, or - for stdin
        chart: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Kundli(#[from] KundliError),
    #[error("cannot read chart {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flags win over the file; -v raises the level, never lowers it.
fn effective_level(config: &KundliConfig, verbose: u8) -> Result<Level, ConfigError> {
    let configured = config.log_level()?;
    let from_flag = match verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    Ok(configured.max(from_flag))
}

fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn read_chart(path: &Path) -> Result<String, CliError> {
    let input_error = |source| CliError::Input {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(input_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(input_error)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = KundliConfig::load(cli.config.as_deref())?;
    init_logging(effective_level(&config, cli.verbose)?);
    debug!(?config, "configuration loaded");

    let pretty = config.output.pretty && !cli.compact;
    let options = ParseOptions {
        require_ascendant: config.input.require_ascendant || cli.require_ascendant,
    };

    match cli.command {
        Commands::Ruler { sign } => println!("{}", ruler_name_of(&sign)),
        Commands::Dignity { planet, sign } => println!("{}", dignity_by_name(&planet, &sign)),
        Commands::HouseSign { ascendant, house } => {
            println!("{}", house_sign_name(&ascendant, house))
        }
        Commands::Career { chart } => {
            let chart = parse_chart(&read_chart(&chart)?, options)?;
            println!("{}", to_json(&analyze_career(&chart), pretty)?);
        }
        Commands::Doshas { chart } => {
            let chart = parse_chart(&read_chart(&chart)?, options)?;
            println!("{}", to_json(&analyze_doshas(&chart), pretty)?);
        }
        Commands::Report { chart } => {
            let chart = parse_chart(&read_chart(&chart)?, options)?;
            println!("{}", to_json(&analyze(&chart), pretty)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
