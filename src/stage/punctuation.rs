#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::{
    stage::{Stage, replace_each},
    unicode::{is_ascii_punct, is_spanish_mark, is_spanish_opening_mark},
};
use std::borrow::Cow;

/// Deletes ASCII punctuation (POSIX `[[:punct:]]`) together with the
/// Spanish opening marks `¿` and `¡`, which sit outside ASCII.
///
/// `"hello, world!"` becomes `"hello world"` and `"¿Qué? ¡Sí!"` becomes
/// `"Qué Sí"`. The Spanish marks `¿ ! ¡` are not exempt here even though
/// they are sometimes described as kept: a slug of `"... in 2023!"` must end
/// in `2023`, not `2023!`. To keep them use [`RemovePunctuationKeepSpanish`].
pub struct RemovePunctuation;

#[inline(always)]
fn is_removable(c: char) -> bool {
    is_ascii_punct(c) || is_spanish_opening_mark(c)
}

impl Stage for RemovePunctuation {
    fn name(&self) -> &'static str {
        "remove_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.contains(is_removable)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_each(text, is_removable, "")
    }
}

/// Like [`RemovePunctuation`], but `¿`, `!` and `¡` are always preserved.
///
/// `"hello, world!"` becomes `"hello world!"`.
pub struct RemovePunctuationKeepSpanish;

#[inline(always)]
fn is_removable_keep_spanish(c: char) -> bool {
    is_ascii_punct(c) && !is_spanish_mark(c)
}

impl Stage for RemovePunctuationKeepSpanish {
    fn name(&self) -> &'static str {
        "remove_punctuation_keep_spanish"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.bytes().any(|b| b.is_ascii_punctuation() && b != b'!')
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_each(text, is_removable_keep_spanish, "")
    }
}

/// Replaces each ASCII punctuation character with `replacement`.
///
/// Only the ASCII class is targeted: `!` is replaced, `¿` and `¡` are not.
#[derive(Debug, Clone)]
pub struct ReplacePunctuation {
    replacement: String,
}

impl ReplacePunctuation {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Stage for ReplacePunctuation {
    fn name(&self) -> &'static str {
        "replace_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.bytes().any(|b| b.is_ascii_punctuation())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_each(text, is_ascii_punct, &self.replacement)
    }
}

#[cfg(test)]
impl StageTestConfig for RemovePunctuation {
    fn samples() -> &'static [&'static str] {
        &["hello, world!", "¿Qué? ¡Sí!", "1,618...", "a_b-c", "plain", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "Sí señor", "«quoted»", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello, world!", "hello world"),
            ("hello.world", "helloworld"),
            ("hello-world", "helloworld"),
            ("¿Qué? ¡Sí!", "Qué Sí"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for RemovePunctuationKeepSpanish {
    fn samples() -> &'static [&'static str] {
        &["hello, world!", "¿Qué? ¡Sí!", "1,618...", "¡Hola!", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world!", "¡Hola!", "¿Sí", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello, world!", "hello world!"),
            ("¿Qué? ¡Sí!", "¿Qué ¡Sí!"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplacePunctuation {
    fn samples() -> &'static [&'static str] {
        &["hello, world!", "¿Qué?", "1,618...", "plain", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "¿Sí ¡no", "«quoted»", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello, world!", "hello  world "),
            ("¿Qué?", "¿Qué "),
            ("a.b-c", "a b c"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn remove_contract() {
        assert_stage_contract!(RemovePunctuation);
    }

    #[test]
    fn keep_spanish_contract() {
        assert_stage_contract!(RemovePunctuationKeepSpanish);
    }

    #[test]
    fn replace_contract() {
        assert_stage_contract!(ReplacePunctuation::new(" "));
    }

    #[test]
    fn exclamation_is_removed_by_default_and_kept_on_request() {
        assert_eq!(RemovePunctuation.normalize("¡Hola!"), "Hola");
        assert_eq!(RemovePunctuationKeepSpanish.normalize("¡Hola!?"), "¡Hola!");
    }

    #[test]
    fn replace_targets_ascii_class_only() {
        assert_eq!(
            ReplacePunctuation::new(" ").normalize("hello, world!"),
            "hello  world "
        );
        assert_eq!(ReplacePunctuation::new("-").normalize("hello.world"), "hello-world");
        assert_eq!(ReplacePunctuation::new("_").normalize("hello-world"), "hello_world");
        assert_eq!(
            ReplacePunctuation::new("-").normalize("Hello, World! This is a test."),
            "Hello- World- This is a test-"
        );
        assert_eq!(ReplacePunctuation::new("-").normalize("¿Qué?"), "¿Qué-");
    }

    #[test]
    fn non_ascii_punctuation_is_out_of_scope() {
        assert!(!RemovePunctuation.needs_apply("“quoted” — dash…"));
    }
}
