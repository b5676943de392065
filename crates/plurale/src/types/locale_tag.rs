use std::fmt::{Display, Formatter, Result as FmtResult};

/// A locale tag split into its subtags, most specific last.
///
/// Tags are parsed once and the segment list is reused for every truncation
/// walk (rule fallback, best-available matching), so callers never re-split
/// strings. Both `-` and `_` are accepted as delimiters; the rendered form
/// always uses `-`.
///
/// # Example
///
/// ```
/// use plurale::LocaleTag;
///
/// let tag = LocaleTag::parse("pt_PT");
/// assert_eq!(tag.to_string(), "pt-PT");
/// assert_eq!(tag.fallback_chain().collect::<Vec<_>>(), vec!["pt-PT", "pt"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    segments: Vec<String>,
}

impl LocaleTag {
    /// Split a tag on `-` and `_`, dropping empty subtags.
    pub fn parse(tag: &str) -> Self {
        Self {
            segments: tag
                .split(['-', '_'])
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// The subtags of this tag.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The primary language subtag, if any.
    pub fn language(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Returns true if the tag has no subtags.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Tags obtained by repeatedly removing the last subtag, starting with
    /// the full tag itself.
    pub fn fallback_chain(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.segments.len())
            .rev()
            .map(|len| self.segments[..len].join("-"))
    }

    /// This tag with every Unicode extension sequence (`-u-...`) removed.
    ///
    /// Private-use sequences (`-x-...`) are left untouched.
    pub fn without_unicode_extensions(&self) -> LocaleTag {
        let mut segments = Vec::with_capacity(self.segments.len());
        let mut in_unicode_extension = false;
        let mut in_private_use = false;
        for segment in &self.segments {
            if !in_private_use && segment.len() == 1 {
                in_unicode_extension = segment.eq_ignore_ascii_case("u");
                in_private_use = segment.eq_ignore_ascii_case("x");
            }
            if !in_unicode_extension {
                segments.push(segment.clone());
            }
        }
        LocaleTag { segments }
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.segments.join("-"))
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::LocaleTag;

    #[test]
    fn fallback_chain_pops_last_segment() {
        let tag = LocaleTag::parse("zh-Hant-TW");
        let chain: Vec<String> = tag.fallback_chain().collect();
        assert_eq!(chain, vec!["zh-Hant-TW", "zh-Hant", "zh"]);
    }

    #[test]
    fn empty_tag_has_no_chain() {
        let tag = LocaleTag::parse("");
        assert!(tag.is_empty());
        assert_eq!(tag.fallback_chain().count(), 0);
    }

    #[test]
    fn unicode_extensions_are_removed() {
        let tag = LocaleTag::parse("de-DE-u-co-phonebk-x-private");
        assert_eq!(tag.without_unicode_extensions().to_string(), "de-DE-x-private");
    }

    #[test]
    fn private_use_u_is_kept() {
        let tag = LocaleTag::parse("en-x-u-foo");
        assert_eq!(tag.without_unicode_extensions().to_string(), "en-x-u-foo");
    }
}
