//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use mishnah_core::{CheckOutcome, SourceTables, build, check_file, serialize, summarize, write_to_file};
use mishnah_shared::{GeneratorConfig, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// mishnah-gen — build the Mishnah structure dataset.
#[derive(Parser)]
#[command(
    name = "mishnah-gen",
    version,
    about = "Generate the nested seder/tractate/chapter reference dataset as JSON.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML config file. Nothing is read unless this is given.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    /// Defaults to `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build the dataset and write it, overwriting any existing file.
    Generate {
        /// Output path (defaults to mishnah_full.json).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fail if the file on disk is missing or differs from a fresh build.
    Check {
        /// Path to compare (defaults to mishnah_full.json).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "mishnah=info",
        1 => "mishnah=debug",
        _ => "mishnah=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config_file {
        Some(path) => load_config_from(path)?,
        None => GeneratorConfig::default(),
    };

    match cli.command {
        None => cmd_generate(&config, None),
        Some(Command::Generate { out }) => cmd_generate(&config, out.as_deref()),
        Some(Command::Check { out }) => cmd_check(&config, out.as_deref()),
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(config: &GeneratorConfig, out: Option<&Path>) -> Result<()> {
    let path = config.output_path(out);
    let tables = SourceTables::embedded();

    let document = build(&tables);
    let summary = summarize(&tables, &document);
    info!(
        orders = summary.orders,
        tractates = summary.tractates,
        chapters = summary.chapters,
        mishnayot = summary.mishnayot,
        "dataset built"
    );
    if !summary.tractates_without_counts.is_empty() {
        info!(
            tractates = ?summary.tractates_without_counts,
            "tractates emitted without chapters"
        );
    }

    let bytes = serialize(&document)?;
    let result = write_to_file(&path, &bytes)?;

    println!("Generated {} successfully.", result.path.display());
    println!("  Sedarim:   {}", summary.orders);
    println!("  Tractates: {}", summary.tractates);
    println!("  Chapters:  {}", summary.chapters);
    println!("  Mishnayot: {}", summary.mishnayot);
    println!("  SHA-256:   {}", result.sha256);

    Ok(())
}

fn cmd_check(config: &GeneratorConfig, out: Option<&Path>) -> Result<()> {
    let path = config.output_path(out);
    let bytes = serialize(&build(&SourceTables::embedded()))?;

    match check_file(&path, &bytes)? {
        CheckOutcome::UpToDate => {
            println!("{} is up to date.", path.display());
            Ok(())
        }
        CheckOutcome::Stale => Err(eyre!(
            "{} is out of date; run `mishnah-gen generate` to rebuild it",
            path.display()
        )),
        CheckOutcome::Missing => Err(eyre!(
            "{} does not exist; run `mishnah-gen generate` to create it",
            path.display()
        )),
    }
}

fn cmd_config_show(config: &GeneratorConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}
