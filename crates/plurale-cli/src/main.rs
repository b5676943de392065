//! Plurale CLI entry point.
//!
//! Provides command-line tools for inspecting plural category selection:
//! - `plurale select` - Select categories for numbers in a locale
//! - `plurale options` - Show the options a locale and option bag resolve to
//! - `plurale supported` - Filter locale tags down to the supported ones
//! - `plurale categories` - List the categories a locale distinguishes

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_categories, run_options, run_select, run_supported, CategoriesArgs, OptionsArgs,
    SelectArgs, SupportedArgs,
};
use tracing_subscriber::EnvFilter;

/// Plural category selection tools.
#[derive(Debug, Parser)]
#[command(name = "plurale")]
#[command(about = "Plural category selection tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log locale negotiation and rule dispatch to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select plural categories for numbers
    Select(SelectArgs),
    /// Show resolved options for a locale and option bag
    Options(OptionsArgs),
    /// Filter locale tags down to the supported ones
    Supported(SupportedArgs),
    /// List the plural categories of a locale
    Categories(CategoriesArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install a stderr subscriber when verbose output was requested.
///
/// `RUST_LOG` takes precedence over the default `plurale=debug` filter.
fn setup_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plurale=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Select(args) => run_select(args),
        Commands::Options(args) => run_options(args),
        Commands::Supported(args) => run_supported(args),
        Commands::Categories(args) => run_categories(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
