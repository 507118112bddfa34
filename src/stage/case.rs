use crate::{
    stage::Stage,
    unicode::{changes_on_lowercase, changes_on_uppercase},
};
#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use std::borrow::Cow;

/// Unicode uppercase mapping (`str::to_uppercase`). Not locale-aware.
///
/// Length may grow: `ß` becomes `SS`.
pub struct Uppercase;

impl Stage for Uppercase {
    fn name(&self) -> &'static str {
        "uppercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_lowercase());
        }
        text.chars().any(changes_on_uppercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_uppercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_uppercase())
    }
}

/// Unicode lowercase mapping (`str::to_lowercase`). Not locale-aware.
///
/// Final sigma is handled by the standard library: `ΟΔΟΣ` becomes `οδος`.
pub struct Lowercase;

impl Stage for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(changes_on_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
impl StageTestConfig for Uppercase {
    fn samples() -> &'static [&'static str] {
        &["hello world", "Hello World", "HELLO", "straße", "ǆemal", "φ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["HELLO WORLD", "123 !@#", "", "ΑΒΓ"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello world", "HELLO WORLD"),
            ("Hello World", "HELLO WORLD"),
            ("café", "CAFÉ"),
            ("straße", "STRASSE"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for Lowercase {
    fn samples() -> &'static [&'static str] {
        &["HELLO WORLD", "Hello World", "hello", "ÀÉÎ", "ΟΔΟΣ", "ǅ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "123 !@#", "", "φ"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("HELLO WORLD", "hello world"),
            ("Hello World", "hello world"),
            ("CAFÉ", "café"),
            ("ΟΔΟΣ", "οδος"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn uppercase_contract() {
        assert_stage_contract!(Uppercase);
    }

    #[test]
    fn lowercase_contract() {
        assert_stage_contract!(Lowercase);
    }

    #[test]
    fn ascii_fast_path_allocates_once() {
        let out = Uppercase.apply(Cow::Borrowed("abc"));
        assert!(matches!(out, Cow::Owned(ref s) if s == "ABC"));
    }

    #[test]
    fn uncased_scripts_pass_through() {
        let input = "世界 123";
        let out = Lowercase.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert!(!Uppercase.needs_apply(input));
    }

    #[test]
    fn titlecase_digraph_detected() {
        assert!(Lowercase.needs_apply("ǅ"));
        assert_eq!(Lowercase.normalize("ǅ"), "ǆ");
    }
}
