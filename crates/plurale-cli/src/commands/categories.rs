//! Implementation of the `plurale categories` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use plurale::{category_name, PluralRules, PluralRulesOptions, PluralType};
use serde::Serialize;

use crate::commands::input::{report_rejected, requested_locales, TypeArg};

/// Arguments for the categories command.
#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Requested locale, in preference order (repeatable)
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,

    /// List ordinal instead of cardinal categories
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Cardinal)]
    pub plural_type: TypeArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the categories command.
#[derive(Debug, Serialize)]
struct CategoriesJson {
    locale: String,
    #[serde(rename = "type")]
    plural_type: PluralType,
    categories: Vec<&'static str>,
}

/// Run the categories command.
pub fn run_categories(args: CategoriesArgs) -> Result<i32> {
    let options = PluralRulesOptions::builder()
        .plural_type(args.plural_type.into())
        .build();
    let rules = match PluralRules::new(requested_locales(&args.locales), options) {
        Ok(rules) => rules,
        Err(e) => return Ok(report_rejected(&e)),
    };

    let resolved = rules.resolved_options().into_diagnostic()?;
    let categories: Vec<&'static str> = rules
        .categories()
        .into_diagnostic()?
        .into_iter()
        .map(category_name)
        .collect();

    if args.json {
        let output = CategoriesJson {
            locale: resolved.locale,
            plural_type: resolved.plural_type,
            categories,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}: {}", resolved.locale, categories.join(", "));
    }

    Ok(exitcode::OK)
}
