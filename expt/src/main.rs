//! Expt CLI - command-line driver for the Express lexer.
//!
//! This is the main entry point for the expt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{error_messages, OutputFormat};
use commands::{run_init, run_lex, InitArgs, LexArgs};
use config::Config;
use error::{ExptError, Result};

/// Expt - tokenize Express source files
///
/// Expt runs the Express lexer over a source file and prints the resulting
/// token stream.
#[derive(Parser, Debug)]
#[command(name = "expt")]
#[command(author = "Express Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Express source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "EXPT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "EXPT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "EXPT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the expt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a source file
    ///
    /// Writes the token stream as JSON, or a count of tokens per kind. If
    /// lexing stops early, the tokens produced so far are still written and
    /// the command fails.
    Lex(LexCommand),

    /// Write a default expt.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to tokenize
    input: PathBuf,

    /// Output format (json, summary) (default: from config)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stream the file through a buffered reader instead of reading it at once
    #[arg(long)]
    no_prefetch: bool,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the expt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays machine-readable.
/// `RUST_LOG` overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ExptError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

/// Execute the lex command.
///
/// Command-line flags take precedence over the `[lex]` table of the config.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = resolve_lex_args(args, verbose, config)?;
    run_lex(lex_args)?;
    Ok(())
}

fn resolve_lex_args(args: LexCommand, verbose: bool, config: Config) -> Result<LexArgs> {
    let format_name = args.format.unwrap_or(config.lex.format);
    let format = OutputFormat::parse(&format_name).ok_or_else(|| {
        ExptError::Validation(format!(
            "{} '{}' (expected json or summary)",
            error_messages::UNKNOWN_FORMAT,
            format_name
        ))
    })?;

    Ok(LexArgs {
        verbose,
        input: args.input,
        output: args.output,
        format,
        prefetch: config.lex.prefetch && !args.no_prefetch,
        pretty: config.lex.pretty && !args.compact,
    })
}

/// Execute the init command.
fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexConfig;

    fn lex_command(cli: Cli) -> LexCommand {
        match cli.command {
            Commands::Lex(args) => args,
            other => panic!("Expected Lex command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["expt", "lex", "main.exp"]);
        let args = lex_command(cli);
        assert_eq!(args.input, PathBuf::from("main.exp"));
        assert_eq!(args.format, None);
        assert!(!args.no_prefetch);
        assert!(!args.compact);
    }

    #[test]
    fn test_cli_parse_lex_requires_input() {
        assert!(Cli::try_parse_from(["expt", "lex"]).is_err());
    }

    #[test]
    fn test_cli_parse_lex_with_options() {
        let cli = Cli::parse_from([
            "expt",
            "lex",
            "main.exp",
            "--format",
            "summary",
            "--output",
            "out.txt",
            "--no-prefetch",
            "--compact",
        ]);
        let args = lex_command(cli);
        assert_eq!(args.format, Some("summary".to_string()));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.no_prefetch);
        assert!(args.compact);
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["expt", "init", "--path", "/tmp/test", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/test")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "expt",
            "lex",
            "main.exp",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/expt.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/expt.toml")));
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let args = lex_command(Cli::parse_from(["expt", "lex", "main.exp"]));
        let config = Config {
            verbose: false,
            lex: LexConfig {
                prefetch: false,
                format: "summary".to_string(),
                pretty: true,
            },
        };

        let resolved = resolve_lex_args(args, true, config).unwrap();
        assert!(resolved.verbose);
        assert_eq!(resolved.format, OutputFormat::Summary);
        assert!(!resolved.prefetch);
        assert!(resolved.pretty);
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let args = lex_command(Cli::parse_from([
            "expt", "lex", "main.exp", "-F", "JSON", "--no-prefetch", "--compact",
        ]));

        let resolved = resolve_lex_args(args, false, Config::default()).unwrap();
        assert_eq!(resolved.format, OutputFormat::Json);
        assert!(!resolved.prefetch);
        assert!(!resolved.pretty);
    }

    #[test]
    fn test_resolve_rejects_unknown_format() {
        let args = lex_command(Cli::parse_from(["expt", "lex", "main.exp", "-F", "xml"]));
        let result = resolve_lex_args(args, false, Config::default());
        assert!(matches!(result, Err(ExptError::Validation(_))));
    }
}
