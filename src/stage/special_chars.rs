//! Special-character stages.
//!
//! A "special character" is anything that is not ASCII whitespace
//! (`\t \n \x0C \r` and space), not a Unicode letter (`\p{L}`) and not a
//! Unicode number (`\p{N}`). ASCII letters and digits are covered by those
//! classes. Accented letters, CJK and other scripts are kept; symbols,
//! punctuation, emoji and combining marks are not. Neither are `\x0B`, NBSP
//! or the other non-ASCII spaces.

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::stage::{Stage, replace_regex};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SPECIAL_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\t\n\x0C\r \p{L}\p{N}]+").expect("special-character pattern is valid")
});

/// Replaces each run of special characters with a single space.
///
/// Despite the name this does not delete: `"a!b"` becomes `"a b"`, so that
/// words on either side of the run stay apart. Follow it with
/// [`CollapseWhitespace`](crate::CollapseWhitespace) to tidy up the spacing.
pub struct RemoveSpecialCharacters;

impl Stage for RemoveSpecialCharacters {
    fn name(&self) -> &'static str {
        "remove_special_characters"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        SPECIAL_RUN.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_regex(&SPECIAL_RUN, text, " ")
    }
}

/// Replaces each run of special characters with `replacement`.
#[derive(Debug, Clone)]
pub struct ReplaceSpecialCharacters {
    replacement: String,
}

impl ReplaceSpecialCharacters {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Stage for ReplaceSpecialCharacters {
    fn name(&self) -> &'static str {
        "replace_special_characters"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        SPECIAL_RUN.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_regex(&SPECIAL_RUN, text, &self.replacement)
    }
}

/// Two-argument form of [`ReplaceSpecialCharacters`].
pub fn replace_special_characters(input: &str, replacement: &str) -> String {
    replace_regex(&SPECIAL_RUN, Cow::Borrowed(input), replacement).into_owned()
}

#[cfg(test)]
impl StageTestConfig for RemoveSpecialCharacters {
    fn samples() -> &'static [&'static str] {
        &["Hello! @World #2023", "cafe, resume! @2023", "ñandú", "φ (phi)", "👍👍", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "Ñandú 2023", "简体 中文", "a\tb\nc", "Ⅻ ½", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Hello! @World #2023", "Hello   World  2023"),
            ("cafe, resume! @2023", "cafe  resume   2023"),
            ("a--b", "a b"),
            ("price: 5€", "price  5 "),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceSpecialCharacters {
    fn samples() -> &'static [&'static str] {
        &["Hello! @World #2023", "ñandú", "φ (phi)", "👍👍", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "Ñandú 2023", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Hello! @World #2023", "Helloz zWorld z2023"),
            ("φ (phi)", "φ zphiz"),
        ]
    }
}
