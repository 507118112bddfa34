//! Blunt diacritic handling: everything outside 7-bit ASCII goes.
//!
//! This is a filter, not a transliteration. `café` becomes `caf`, and
//! non-Latin scripts, emoji and currency symbols vanish along with accents.
//! Use [`ReplaceAccents`](crate::ReplaceAccents) first to keep the base
//! letters of the common Latin-1 accented set.

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::{
    stage::{Stage, replace_runs},
    unicode::is_non_ascii,
};
use std::borrow::Cow;

/// Deletes every non-ASCII character.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        Cow::Owned(text.chars().filter(char::is_ascii).collect())
    }
}

/// Replaces each maximal run of non-ASCII characters with one copy of
/// `replacement`: `"naïve"` with `"-"` gives `"na-ve"`, `"日本"` gives `"-"`.
#[derive(Debug, Clone)]
pub struct ReplaceDiacritics {
    replacement: String,
}

impl ReplaceDiacritics {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Stage for ReplaceDiacritics {
    fn name(&self) -> &'static str {
        "replace_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_runs(text, is_non_ascii, &self.replacement)
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveDiacritics {
    fn samples() -> &'static [&'static str] {
        &["café", "naïve résumé", "日本語", "plain ascii ~!", "€5 👍", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["cafe", "plain ascii ~!@#", "\t\r\n", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("café", "caf"),
            ("naïve", "nave"),
            ("price €5", "price 5"),
            ("日本語", ""),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceDiacritics {
    fn samples() -> &'static [&'static str] {
        &["café", "naïve résumé", "日本語", "plain ascii ~!", "€5 👍", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["cafe", "plain ascii ~!@#", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Café, résumé, naïve, jalapeño -", "Caf?, r?sum?, na?ve, jalape?o -"),
            ("日本語", "?"),
            ("a日b本", "a?b?"),
        ]
    }
}
