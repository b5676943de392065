//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use plurale::ResolvedOptions;

/// Selection result for a single input value.
pub struct Selection {
    /// The value as given on the command line.
    pub value: String,
    /// The number rendered under the instance's digit bounds.
    pub rendered: String,
    /// CLDR keyword of the selected category.
    pub category: &'static str,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format selection results as a table.
pub fn format_selection_table(selections: &[Selection]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Value", "Rendered", "Category"]);

    for selection in selections {
        table.add_row(vec![
            selection.value.clone(),
            selection.rendered.clone(),
            selection.category.to_owned(),
        ]);
    }

    table
}

/// Format a resolved options snapshot as a two-column table.
pub fn format_options_table(resolved: &ResolvedOptions) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Option", "Value"]);

    let digits = [
        ("maximumFractionDigits", resolved.maximum_fraction_digits),
        ("minimumSignificantDigits", resolved.minimum_significant_digits),
        ("maximumSignificantDigits", resolved.maximum_significant_digits),
    ];

    table.add_row(vec!["locale".to_owned(), resolved.locale.clone()]);
    table.add_row(vec!["type".to_owned(), resolved.plural_type.to_string()]);
    table.add_row(vec![
        "minimumIntegerDigits".to_owned(),
        resolved.minimum_integer_digits.to_string(),
    ]);
    table.add_row(vec![
        "minimumFractionDigits".to_owned(),
        resolved.minimum_fraction_digits.to_string(),
    ]);
    for (name, value) in digits {
        if let Some(value) = value {
            table.add_row(vec![name.to_owned(), value.to_string()]);
        }
    }

    table
}
