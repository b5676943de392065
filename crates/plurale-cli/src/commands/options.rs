//! Implementation of the `plurale options` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use plurale::PluralRules;

use crate::commands::input::{
    load_options, report_options, report_rejected, requested_locales, TypeArg,
};
use crate::output::table::format_options_table;

/// Arguments for the options command.
#[derive(Debug, Args)]
pub struct OptionsArgs {
    /// Requested locale, in preference order (repeatable)
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,

    /// Resolve ordinal instead of cardinal rules
    #[arg(long = "type", value_enum)]
    pub plural_type: Option<TypeArg>,

    /// Option bag as JSON, e.g. '{"maximumSignificantDigits": 3}'
    #[arg(long)]
    pub options: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the options command.
pub fn run_options(args: OptionsArgs) -> Result<i32> {
    let options = match load_options(args.options.as_deref(), args.plural_type) {
        Ok(options) => options,
        Err(diagnostic) => return Ok(report_options(diagnostic)),
    };

    let resolved = match PluralRules::from_value(requested_locales(&args.locales), &options)
        .and_then(|rules| rules.resolved_options())
    {
        Ok(resolved) => resolved,
        Err(e) => return Ok(report_rejected(&e)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved).into_diagnostic()?);
    } else {
        println!("{}", format_options_table(&resolved));
    }

    Ok(exitcode::OK)
}
