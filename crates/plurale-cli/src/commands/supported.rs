//! Implementation of the `plurale supported` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use plurale::PluralRules;

use crate::commands::input::{report_rejected, MatcherArg};

/// Arguments for the supported command.
#[derive(Debug, Args)]
pub struct SupportedArgs {
    /// Locale tags to check
    #[arg(required = true)]
    pub locales: Vec<String>,

    /// Negotiation strategy
    #[arg(long, value_enum, default_value_t = MatcherArg::BestFit)]
    pub matcher: MatcherArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the supported command.
pub fn run_supported(args: SupportedArgs) -> Result<i32> {
    let supported = match PluralRules::supported_locales_of(args.locales, args.matcher.into()) {
        Ok(supported) => supported,
        Err(e) => return Ok(report_rejected(&e)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&supported).into_diagnostic()?);
    } else {
        for locale in &supported {
            println!("{locale}");
        }
    }

    Ok(exitcode::OK)
}
