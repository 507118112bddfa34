//! Tilde stages.
//!
//! The two names cover different things. [`RemoveTildes`] deletes the
//! standalone `~` character. [`ReplaceTildes`] rewrites the Spanish letter
//! `ñ`/`Ñ` to `n`/`N`. Neither touches the other's target.

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::{
    stage::{Stage, replace_ascii_byte},
    unicode::fold_enye,
};
use memchr::memchr;
use std::borrow::Cow;

/// Deletes every standalone tilde `~`. Letters such as `ñ` are untouched.
pub struct RemoveTildes;

impl Stage for RemoveTildes {
    fn name(&self) -> &'static str {
        "remove_tildes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        memchr(b'~', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_ascii_byte(text, b'~', "")
    }
}

/// `ñ` → `n` and `Ñ` → `N`. Nothing else, not even `ã` or `õ`.
pub struct ReplaceTildes;

impl Stage for ReplaceTildes {
    fn name(&self) -> &'static str {
        "replace_tildes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(|c| fold_enye(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().map(|c| fold_enye(c).unwrap_or(c)).collect())
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveTildes {
    fn samples() -> &'static [&'static str] {
        &["~/home", "a~b~c", "año", "~~", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["año", "Ñandú", "ã õ", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("~/home", "/home"), ("a~b~~c", "abc")]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceTildes {
    fn samples() -> &'static [&'static str] {
        &["Cañón, año, niño", "ÑANDÚ", "~", "São Paulo", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["~", "São Paulo", "Cancun", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Cañón, año, niño", "Canón, ano, nino"),
            ("ÑANDÚ", "NANDÚ"),
            ("jalapeño", "jalapeno"),
        ]
    }
}
