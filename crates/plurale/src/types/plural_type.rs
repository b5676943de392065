use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PluralRulesError;

/// Which counting role a number plays.
///
/// Cardinal numbers answer "how many" ("3 files"), ordinal numbers answer
/// "which position" ("3rd file").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralType {
    #[default]
    Cardinal,
    Ordinal,
}

impl PluralType {
    /// Values accepted for the `type` option.
    pub const ALLOWED: &'static [&'static str] = &["cardinal", "ordinal"];

    /// The option string for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralType::Cardinal => "cardinal",
            PluralType::Ordinal => "ordinal",
        }
    }
}

impl FromStr for PluralType {
    type Err = PluralRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardinal" => Ok(PluralType::Cardinal),
            "ordinal" => Ok(PluralType::Ordinal),
            _ => Err(PluralRulesError::InvalidOption {
                option: "type",
                value: s.to_owned(),
                allowed: Self::ALLOWED.to_vec(),
            }),
        }
    }
}

impl Display for PluralType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Strategy used to pick a supported locale from a requested list.
///
/// `Lookup` only accepts a requested tag or one of its truncations.
/// `BestFit` additionally accepts an available locale that shares the
/// requested language when no truncation matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleMatcher {
    #[serde(rename = "lookup")]
    Lookup,
    #[default]
    #[serde(rename = "best fit")]
    BestFit,
}

impl LocaleMatcher {
    /// Values accepted for the `localeMatcher` option.
    pub const ALLOWED: &'static [&'static str] = &["lookup", "best fit"];

    /// The option string for this matcher.
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleMatcher::Lookup => "lookup",
            LocaleMatcher::BestFit => "best fit",
        }
    }
}

impl FromStr for LocaleMatcher {
    type Err = PluralRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lookup" => Ok(LocaleMatcher::Lookup),
            "best fit" => Ok(LocaleMatcher::BestFit),
            _ => Err(PluralRulesError::InvalidOption {
                option: "localeMatcher",
                value: s.to_owned(),
                allowed: Self::ALLOWED.to_vec(),
            }),
        }
    }
}

impl Display for LocaleMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
