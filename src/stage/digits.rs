#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::stage::{Stage, replace_each};
use std::borrow::Cow;

#[inline(always)]
fn has_ascii_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// Deletes ASCII digits `0-9`. Other numeral systems (`٣`, `Ⅻ`, `½`) stay.
pub struct RemoveDigits;

impl Stage for RemoveDigits {
    fn name(&self) -> &'static str {
        "remove_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        has_ascii_digit(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_each(text, |c| c.is_ascii_digit(), "")
    }
}

/// Replaces each ASCII digit with `replacement`, one copy per digit.
#[derive(Debug, Clone)]
pub struct ReplaceDigits {
    replacement: String,
}

impl ReplaceDigits {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Stage for ReplaceDigits {
    fn name(&self) -> &'static str {
        "replace_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        has_ascii_digit(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_each(text, |c| c.is_ascii_digit(), &self.replacement)
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveDigits {
    fn samples() -> &'static [&'static str] {
        &["hello123", "123456", "Year 2023", "٣ Ⅻ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "٣ Ⅻ ½", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("hello123", "hello"), ("123456", ""), ("a1b2c3", "abc")]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceDigits {
    fn samples() -> &'static [&'static str] {
        &["hello123", "123456", "Year 2023", "٣ Ⅻ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "٣ Ⅻ ½", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("hello123", "hello###"), ("123456", "######")]
    }
}
