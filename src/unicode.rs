//! Character classes shared by the stages.
//!
//! Everything here is a plain predicate or a static table lookup; nothing
//! allocates and nothing depends on locale.

use phf::{Map, phf_map};

/// Latin-1 accented letters and their unaccented ASCII base letter.
///
/// Case is preserved: lowercase keys map to lowercase letters, uppercase keys
/// to uppercase letters. Anything not listed is left alone by
/// [`fold_accent`].
static ACCENT_FOLD: Map<char, char> = phf_map! {
    'á' => 'a', 'à' => 'a', 'ã' => 'a', 'â' => 'a', 'ä' => 'a',
    'é' => 'e', 'è' => 'e', 'ê' => 'e', 'ë' => 'e',
    'í' => 'i', 'ì' => 'i', 'î' => 'i', 'ï' => 'i',
    'ó' => 'o', 'ò' => 'o', 'õ' => 'o', 'ô' => 'o', 'ö' => 'o',
    'ú' => 'u', 'ù' => 'u', 'û' => 'u', 'ü' => 'u',
    'ç' => 'c',
    'ñ' => 'n',
    'Á' => 'A', 'À' => 'A', 'Ã' => 'A', 'Â' => 'A', 'Ä' => 'A',
    'É' => 'E', 'È' => 'E', 'Ê' => 'E', 'Ë' => 'E',
    'Í' => 'I', 'Ì' => 'I', 'Î' => 'I', 'Ï' => 'I',
    'Ó' => 'O', 'Ò' => 'O', 'Õ' => 'O', 'Ô' => 'O', 'Ö' => 'O',
    'Ú' => 'U', 'Ù' => 'U', 'Û' => 'U', 'Ü' => 'U',
    'Ç' => 'C',
    'Ñ' => 'N',
};

/// ASCII base letter for a table-listed accented letter, `None` otherwise.
#[inline(always)]
pub fn fold_accent(c: char) -> Option<char> {
    // Every key lives in U+00C0..=U+00FF
    if !('\u{00C0}'..='\u{00FF}').contains(&c) {
        return None;
    }
    ACCENT_FOLD.get(&c).copied()
}

#[inline]
pub fn contains_accent(text: &str) -> bool {
    !text.is_ascii() && text.chars().any(|c| fold_accent(c).is_some())
}

/// `ñ`/`Ñ` to `n`/`N`. Only the Spanish eñe; other tilde-bearing letters
/// (`ã`, `õ`) are not touched.
#[inline(always)]
pub const fn fold_enye(c: char) -> Option<char> {
    match c {
        'ñ' => Some('n'),
        'Ñ' => Some('N'),
        _ => None,
    }
}

/// `[A-Za-z0-9]`
#[inline(always)]
pub const fn is_ascii_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[inline(always)]
pub const fn is_non_ascii(c: char) -> bool {
    !c.is_ascii()
}

/// POSIX `[[:punct:]]`: the 32 ASCII punctuation and symbol characters.
#[inline(always)]
pub const fn is_ascii_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Spanish opening marks. They sit outside ASCII and so outside
/// [`is_ascii_punct`].
#[inline(always)]
pub const fn is_spanish_opening_mark(c: char) -> bool {
    matches!(c, '¿' | '¡')
}

/// Marks kept by `RemovePunctuationKeepSpanish`.
#[inline(always)]
pub const fn is_spanish_mark(c: char) -> bool {
    matches!(c, '¿' | '!' | '¡')
}

/// A character changes under `to_lowercase` (multi-char expansions included).
#[inline]
pub fn changes_on_lowercase(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

/// A character changes under `to_uppercase` (multi-char expansions included).
#[inline]
pub fn changes_on_uppercase(c: char) -> bool {
    let mut upper = c.to_uppercase();
    upper.next() != Some(c) || upper.next().is_some()
}
