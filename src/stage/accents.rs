#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::{
    stage::Stage,
    unicode::{contains_accent, fold_accent},
};
use std::borrow::Cow;

/// Transliterates the Latin-1 accented letters to their ASCII base letter,
/// preserving case.
///
/// | from | to |
/// |------|----|
/// | `á à ã â ä` | `a` |
/// | `é è ê ë` | `e` |
/// | `í ì î ï` | `i` |
/// | `ó ò õ ô ö` | `o` |
/// | `ú ù û ü` | `u` |
/// | `ç` | `c` |
/// | `ñ` | `n` |
///
/// Uppercase forms map to the uppercase base letter. Anything outside the
/// table (`φ`, `ø`, `ÿ`, decomposed sequences) passes through unchanged.
pub struct ReplaceAccents;

impl Stage for ReplaceAccents {
    fn name(&self) -> &'static str {
        "replace_accents"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_accent(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !contains_accent(&text) {
            return text;
        }
        // Every mapping shrinks a 2-byte char to 1 byte
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            out.push(fold_accent(c).unwrap_or(c));
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceAccents {
    fn samples() -> &'static [&'static str] {
        &["Café, résumé, naïve, jalapeño", "ÁÉÍÓÚ", "φ", "ø ÿ", "plain", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["φ", "ø ÿ", "e\u{0301}", "plain", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Café, résumé, naïve, jalapeño", "Cafe, resume, naive, jalapeno"),
            ("É", "E"),
            ("é", "e"),
            ("ÀÃÂÄ àãâä", "AAAA aaaa"),
            ("ÇÑ çñ", "CN cn"),
            ("número áureo φ", "numero aureo φ"),
        ]
    }
}
