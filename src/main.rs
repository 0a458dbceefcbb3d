//! lexigrade: quality-control viewer for text simplification grading results
//!
//! Shows the verdict of a grading run and lets you edit the original text next
//! to its simplified version.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use lexigrade::{
    cli,
    config::{
        AppConfig, EditConfig, ReportConfig, ResultSource, Validatable, CONFIG_FILE_NAMES,
    },
    error::LexiGradeError,
    pipeline::{exit_codes, OutputTarget},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Grading service JSON response (file or stdin)",
        "\n\nOutput Formats:",
        "\n  tui, summary, json"
    )
}

#[derive(Parser)]
#[command(name = "lexigrade")]
#[command(version, long_version = build_long_version())]
#[command(about = "Quality-control viewer for text simplification grading results", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Result rejected (with --fail-on-reject)
    3  Error occurred

EXAMPLES:
    # Browse a grading result interactively
    lexigrade report result.json

    # CI check on a result piped from the grading service
    curl -s $GRADER/grade | lexigrade report -o summary --fail-on-reject

    # Edit the original text next to its simplification
    lexigrade edit --original in.txt --result result.json --save in.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Path to the grading result JSON (stdin if omitted or `-`)
    result: Option<PathBuf>,

    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the result was rejected
    #[arg(long)]
    fail_on_reject: bool,
}

/// Arguments for the `edit` subcommand
#[derive(Parser)]
struct EditArgs {
    /// File holding the original text
    #[arg(long)]
    original: Option<PathBuf>,

    /// File holding the simplified text (defaults to the result's `text`)
    #[arg(long)]
    simplified: Option<PathBuf>,

    /// Grading result JSON to show next to the editor
    #[arg(long)]
    result: Option<PathBuf>,

    /// Estimated CEFR level of the original (defaults to the result's `original_cefr`)
    #[arg(long)]
    cefr: Option<String>,

    /// Write the edited original text here on exit
    #[arg(long)]
    save: Option<PathBuf>,

    /// Placeholder shown while the original text is empty
    #[arg(long)]
    placeholder: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the quality-control report for one grading result
    Report(ReportArgs),

    /// Edit the original text next to its simplified version
    Edit(EditArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .lexigrade.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(0) => {}
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Initialize logging.
///
/// Interactive sessions share the terminal with the log output, so they only
/// log warnings unless `RUST_LOG` says otherwise.
fn init_logging(cli: &Cli) {
    let interactive = match &cli.command {
        Commands::Edit(_) => true,
        Commands::Report(args) => {
            OutputTarget::from_option(args.output_file.clone()).resolve_format(args.output)
                == ReportFormat::Tui
        }
        _ => false,
    };
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else if interactive {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Load the config file and layer the global CLI flags over it.
fn effective_config(cli: &Cli, overrides: AppConfig) -> Result<AppConfig> {
    let (mut config, _) = lexigrade::config::load_or_default(cli.config.as_deref());

    let mut cli_config = overrides;
    cli_config.output.no_color = cli.no_color;
    config.merge(&cli_config);

    let errors = config.validate();
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LexiGradeError::config(message).into());
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Report(ref args) => {
            let mut overrides = AppConfig::default();
            overrides.output.format = args.output;
            overrides.report.fail_on_reject = args.fail_on_reject;
            let app_config = effective_config(&cli, overrides)?;

            let config = ReportConfig {
                source: ResultSource::from_arg(args.result.clone()),
                output: app_config.output,
                output_file: args.output_file.clone(),
                fail_on_reject: app_config.report.fail_on_reject,
                tui: app_config.tui,
                quiet: cli.quiet,
            };
            cli::run_report(config)
        }

        Commands::Edit(ref args) => {
            let mut overrides = AppConfig::default();
            if let Some(placeholder) = &args.placeholder {
                overrides.editor.placeholder.clone_from(placeholder);
            }
            let app_config = effective_config(&cli, overrides)?;

            let config = EditConfig {
                original: args.original.clone(),
                simplified: args.simplified.clone(),
                result: args.result.clone(),
                cefr: args.cefr.clone(),
                save: args.save.clone(),
                editor: app_config.editor,
                tui: app_config.tui,
            };
            cli::run_edit(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "lexigrade", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { ref output } => {
            let schema = lexigrade::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { ref action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    lexigrade::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in lexigrade::config::search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match lexigrade::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".lexigrade.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = lexigrade::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
