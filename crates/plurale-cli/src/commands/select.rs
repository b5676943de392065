//! Implementation of the `plurale select` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use plurale::{
    category_name, format_number_to_string, DigitOptions, PluralRules, PluralRulesError,
    ResolvedOptions, SignificantDigits,
};
use serde::Serialize;

use crate::commands::input::{
    load_options, parse_value, report_options, report_rejected, requested_locales, TypeArg,
};
use crate::output::table::{format_selection_table, Selection};

/// Arguments for the select command.
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Requested locale, in preference order (repeatable)
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,

    /// Select ordinal instead of cardinal categories
    #[arg(long = "type", value_enum)]
    pub plural_type: Option<TypeArg>,

    /// Option bag as JSON, e.g. '{"minimumFractionDigits": 1}'
    #[arg(long)]
    pub options: Option<String>,

    /// Values to select categories for
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single selection.
#[derive(Debug, Serialize)]
struct SelectionJson<'a> {
    value: &'a str,
    rendered: &'a str,
    category: &'static str,
}

/// JSON output for the select command.
#[derive(Debug, Serialize)]
struct SelectJson<'a> {
    locale: &'a str,
    selections: Vec<SelectionJson<'a>>,
}

/// Digit bounds equivalent to a resolved options snapshot.
fn digit_options(resolved: &ResolvedOptions) -> DigitOptions {
    DigitOptions {
        minimum_integer_digits: resolved.minimum_integer_digits,
        minimum_fraction_digits: resolved.minimum_fraction_digits,
        maximum_fraction_digits: resolved.maximum_fraction_digits,
        significant: resolved
            .minimum_significant_digits
            .zip(resolved.maximum_significant_digits)
            .map(|(minimum, maximum)| SignificantDigits { minimum, maximum }),
    }
}

fn select_all(rules: &PluralRules, values: &[String]) -> Result<Vec<Selection>, PluralRulesError> {
    let digits = digit_options(&rules.resolved_options()?);
    values
        .iter()
        .map(|raw| {
            let value = parse_value(raw);
            let category = rules.select(value.clone())?;
            Ok(Selection {
                value: raw.clone(),
                rendered: format_number_to_string(&digits, value.to_number()),
                category: category_name(category),
            })
        })
        .collect()
}

/// Run the select command.
pub fn run_select(args: SelectArgs) -> Result<i32> {
    let options = match load_options(args.options.as_deref(), args.plural_type) {
        Ok(options) => options,
        Err(diagnostic) => return Ok(report_options(diagnostic)),
    };

    let rules = match PluralRules::from_value(requested_locales(&args.locales), &options) {
        Ok(rules) => rules,
        Err(e) => return Ok(report_rejected(&e)),
    };
    let selections = match select_all(&rules, &args.values) {
        Ok(selections) => selections,
        Err(e) => return Ok(report_rejected(&e)),
    };
    let locale = rules.resolved_options().into_diagnostic()?.locale;

    if args.json {
        let output = SelectJson {
            locale: &locale,
            selections: selections
                .iter()
                .map(|s| SelectionJson {
                    value: &s.value,
                    rendered: &s.rendered,
                    category: s.category,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if let [single] = selections.as_slice() {
        println!(
            "{}",
            single
                .category
                .if_supports_color(Stream::Stdout, |text| text.green())
        );
    } else {
        println!(
            "Locale: {}",
            locale.if_supports_color(Stream::Stdout, |text| text.bold())
        );
        println!("{}", format_selection_table(&selections));
    }

    Ok(exitcode::OK)
}
