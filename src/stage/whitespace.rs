//! Whitespace stages.
//!
//! [`Trim`] and [`CollapseWhitespace`] use the Unicode `White_Space` property
//! (`char::is_whitespace`). [`ReplaceSpace`] only targets ASCII whitespace
//! (`\t \n \x0C \r` and space) and [`RemoveAllSpace`] only U+0020.

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::stage::{Stage, replace_ascii_byte, replace_each};
use memchr::memchr;
use std::borrow::Cow;

/// Strips leading and trailing whitespace. Interior whitespace is untouched.
///
/// Borrowed input stays borrowed: the result is a sub-slice of the input.
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }
        text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }
}

/// Splits on whitespace, drops empty tokens and re-joins with one ASCII space.
///
/// Leading and trailing whitespace disappears, and every interior run
/// (tabs and newlines included) becomes a single `' '`.
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str) -> bool {
        // Treat the start of the string as whitespace so a leading run triggers.
        let mut prev_ws = true;
        for c in text.chars() {
            if c.is_whitespace() {
                if prev_ws || c != ' ' {
                    return true;
                }
                prev_ws = true;
            } else {
                prev_ws = false;
            }
        }
        prev_ws && !text.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for (i, word) in text.split_whitespace().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word);
        }
        Cow::Owned(out)
    }
}

/// Deletes every U+0020 SPACE. Tabs, newlines and other whitespace stay.
pub struct RemoveAllSpace;

impl Stage for RemoveAllSpace {
    fn name(&self) -> &'static str {
        "remove_all_space"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        memchr(b' ', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_ascii_byte(text, b' ', "")
    }
}

/// Replaces each ASCII whitespace character (`\t \n \x0C \r` and space)
/// with `replacement`, one copy per character: three spaces become three
/// replacements. `\x0B`, NBSP and other non-ASCII spaces are left alone.
///
/// `needs_apply` reports any whitespace, so a replacement equal to the
/// whitespace it replaces is treated as a change.
#[derive(Debug, Clone)]
pub struct ReplaceSpace {
    replacement: String,
}

impl ReplaceSpace {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Stage for ReplaceSpace {
    fn name(&self) -> &'static str {
        "replace_space"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.bytes().any(|b| b.is_ascii_whitespace())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_each(text, |c| c.is_ascii_whitespace(), &self.replacement)
    }
}

#[cfg(test)]
impl StageTestConfig for Trim {
    fn samples() -> &'static [&'static str] {
        &["  hello world  ", "hello", "\t\n x \r\n", "\u{3000}全角\u{3000}", "   ", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  hello world  ", "hello world"),
            ("  hello world", "hello world"),
            ("  hello       world    ", "hello       world"),
            (" \t\n hello \r\n ", "hello"),
            ("\u{00A0}x\u{0085}", "x"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for CollapseWhitespace {
    fn samples() -> &'static [&'static str] {
        &["  hello   world  ", "a b", "a\t\tb\nc", " ", "x\u{00A0}y", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "a b c", "x", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello   world", "hello world"),
            ("  hello   world  ", "hello world"),
            ("a\tb\nc\r\nd", "a b c d"),
            ("   ", ""),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveAllSpace {
    fn samples() -> &'static [&'static str] {
        &["hello world", "  a  b  ", "tab\tstays", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["helloworld", "a\tb\nc", "\u{00A0}", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello world", "helloworld"),
            ("  hello   world  ", "helloworld"),
            ("a \tb", "a\tb"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceSpace {
    fn samples() -> &'static [&'static str] {
        &["This is a test", "a\tb\nc", "   ", "nospace", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["nospace", "a\u{A0}b\u{B}c\u{3000}d", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("This is a test with spaces", "This_is_a_test_with_spaces"),
            ("a   b", "a___b"),
            ("a\tb\nc", "a_b_c"),
            ("a\x0Cb\r", "a_b_"),
        ]
    }
}
