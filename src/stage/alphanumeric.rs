#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::{
    stage::{Stage, replace_runs},
    unicode::is_ascii_alnum,
};
use std::borrow::Cow;

#[inline(always)]
fn has_non_alnum(text: &str) -> bool {
    !text.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Deletes everything outside `[A-Za-z0-9]`, spaces and accented letters
/// included.
pub struct RemoveNonAlphanumeric;

impl Stage for RemoveNonAlphanumeric {
    fn name(&self) -> &'static str {
        "remove_non_alphanumeric"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        has_non_alnum(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_runs(text, |c| !is_ascii_alnum(c), "")
    }
}

/// Replaces each run of characters outside `[A-Za-z0-9]` with one copy of
/// the replacement: `"test! @2023"` with `"-"` gives `"test-2023"`.
#[derive(Debug, Clone)]
pub struct ReplaceNonAlphanumeric {
    replacement: String,
}

impl ReplaceNonAlphanumeric {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Stage for ReplaceNonAlphanumeric {
    fn name(&self) -> &'static str {
        "replace_non_alphanumeric"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        has_non_alnum(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_runs(text, |c| !is_ascii_alnum(c), &self.replacement)
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveNonAlphanumeric {
    fn samples() -> &'static [&'static str] {
        &["hello, world!", "hello123", "café 2023", "!!!", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello123", "ABCxyz09", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello, world!", "helloworld"),
            ("hello-world", "helloworld"),
            ("This is a test! @2023", "Thisisatest2023"),
            ("café", "caf"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceNonAlphanumeric {
    fn samples() -> &'static [&'static str] {
        &["hello, world!", "hello123", "café 2023", "!!!", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello123", "ABCxyz09", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello, world!", "helloxworldx"),
            ("a  --  b", "axb"),
            ("naïve", "naxve"),
        ]
    }
}
