//! Argument parsing shared by the subcommands.

use std::collections::BTreeMap;

use clap::ValueEnum;
use miette::Report;
use plurale::{LocaleMatcher, Locales, PluralRulesError, PluralType, Value};

use crate::output::{OptionsDiagnostic, RulesDiagnostic};

/// Plural type as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Cardinal,
    Ordinal,
}

impl From<TypeArg> for PluralType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Cardinal => PluralType::Cardinal,
            TypeArg::Ordinal => PluralType::Ordinal,
        }
    }
}

/// Locale matcher as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MatcherArg {
    Lookup,
    BestFit,
}

impl From<MatcherArg> for LocaleMatcher {
    fn from(arg: MatcherArg) -> Self {
        match arg {
            MatcherArg::Lookup => LocaleMatcher::Lookup,
            MatcherArg::BestFit => LocaleMatcher::BestFit,
        }
    }
}

/// Requested locales, or the default locale when none were given.
pub fn requested_locales(locales: &[String]) -> Locales {
    if locales.is_empty() {
        Locales::Default
    } else {
        Locales::from(locales)
    }
}

/// Interpret a command-line value as JSON, falling back to a plain string.
///
/// `1` and `1.5` become numbers, `"1"` and `abc` become strings.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

/// Parse the `--options` bag and apply a `--type` override.
///
/// A missing bag is `undefined`. An explicit `--type` replaces any `type`
/// member of an object bag; on a missing bag it becomes the only member.
pub fn load_options(
    options: Option<&str>,
    plural_type: Option<TypeArg>,
) -> Result<Value, OptionsDiagnostic> {
    let mut bag = match options {
        Some(content) => serde_json::from_str(content)
            .map_err(|e| OptionsDiagnostic::from_json_error(content, &e))?,
        None => Value::Undefined,
    };

    if let Some(plural_type) = plural_type {
        let name = Value::from(PluralType::from(plural_type).as_str());
        if bag.is_undefined() {
            bag = Value::Object(BTreeMap::new());
        }
        if let Value::Object(members) = &mut bag {
            members.insert("type".to_owned(), name);
        }
    }
    Ok(bag)
}

/// Print a rejected-input error and return the matching exit code.
pub fn report_rejected(err: &PluralRulesError) -> i32 {
    eprintln!("{:?}", Report::new(RulesDiagnostic::from_error(err)));
    exitcode::DATAERR
}

/// Print an option bag parse error and return the matching exit code.
pub fn report_options(diagnostic: OptionsDiagnostic) -> i32 {
    eprintln!("{:?}", Report::new(diagnostic));
    exitcode::DATAERR
}

#[cfg(test)]
mod tests {
    use plurale::Value;

    use super::{load_options, parse_value, TypeArg};

    #[test]
    fn values_parse_as_json_first() {
        assert_eq!(parse_value("1"), Value::Integer(1));
        assert_eq!(parse_value("1.5"), Value::Float(1.5));
        assert_eq!(parse_value("\"1\""), Value::from("1"));
        assert_eq!(parse_value("abc"), Value::from("abc"));
    }

    #[test]
    fn type_flag_overrides_bag() {
        let bag = load_options(Some(r#"{ "type": "cardinal" }"#), Some(TypeArg::Ordinal)).unwrap();
        let members = bag.as_object().unwrap();
        assert_eq!(members.get("type"), Some(&Value::from("ordinal")));
    }

    #[test]
    fn type_flag_without_bag_creates_one() {
        let bag = load_options(None, Some(TypeArg::Ordinal)).unwrap();
        assert_eq!(bag.as_object().unwrap().len(), 1);
        assert_eq!(load_options(None, None).unwrap(), Value::Undefined);
    }

    #[test]
    fn malformed_bag_is_a_diagnostic() {
        assert!(load_options(Some("{ \"type\": "), None).is_err());
    }
}
