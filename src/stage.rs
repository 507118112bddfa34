//! Core normalization stage abstraction.
//!
//! A [`Stage`] is a pure `&str -> String` transform with two extra hooks that
//! keep pipelines cheap:
//!
//! * `needs_apply(&self, &str) -> bool` is a fast pre-check. Returning `false`
//!   promises that `apply` would hand the input back unchanged, so pipelines
//!   skip the stage entirely.
//! * `apply(&self, Cow<str>) -> Cow<str>` threads ownership through the
//!   pipeline. A stage that finds nothing to change returns its input as-is,
//!   which keeps a borrowed input borrowed all the way to the caller.
//!
//! Stages never fail. Every stage is total over all valid `str` values,
//! including the empty string.

pub mod accents;
pub mod alphanumeric;
pub mod case;
pub mod control_chars;
pub mod custom;
pub mod diacritics;
pub mod digits;
pub mod punctuation;
pub mod special_chars;
pub mod tildes;
pub mod whitespace;

use memchr::memchr;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Snake-case identifier. Used in trace output and in textual pipeline
    /// configuration (see [`crate::StageKind`]).
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// Convenience for one-off calls outside a pipeline.
    fn normalize(&self, text: &str) -> String {
        if !self.needs_apply(text) {
            return text.to_owned();
        }
        self.apply(Cow::Borrowed(text)).into_owned()
    }
}

impl<S: Stage + ?Sized> Stage for Box<S> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        (**self).needs_apply(text)
    }
    #[inline]
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        (**self).apply(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
//  Shared rewriting helpers
// ────────────────────────────────────────────────────────────────────────────

/// Replace every occurrence of a single ASCII byte with `replacement`.
#[inline]
pub(crate) fn replace_ascii_byte<'a>(
    text: Cow<'a, str>,
    target: u8,
    replacement: &str,
) -> Cow<'a, str> {
    debug_assert!(target.is_ascii());
    if memchr(target, text.as_bytes()).is_none() {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    for (i, part) in text.split(target as char).enumerate() {
        if i > 0 {
            out.push_str(replacement);
        }
        out.push_str(part);
    }
    Cow::Owned(out)
}

/// Replace every character matching `pred` independently with `replacement`.
#[inline]
pub(crate) fn replace_each<'a>(
    text: Cow<'a, str>,
    pred: impl Fn(char) -> bool,
    replacement: &str,
) -> Cow<'a, str> {
    let Some(first) = text.find(&pred) else {
        return text;
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        if pred(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Replace every maximal run of characters matching `pred` with a single
/// copy of `replacement`.
#[inline]
pub(crate) fn replace_runs<'a>(
    text: Cow<'a, str>,
    pred: impl Fn(char) -> bool,
    replacement: &str,
) -> Cow<'a, str> {
    let Some(first) = text.find(&pred) else {
        return text;
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut in_run = false;
    for c in text[first..].chars() {
        if pred(c) {
            if !in_run {
                out.push_str(replacement);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    Cow::Owned(out)
}

/// Regex-driven replacement that keeps a borrowed input borrowed (and an
/// owned input un-reallocated) when nothing matches.
///
/// The replacement is inserted literally; `$name` is never expanded.
#[inline]
pub(crate) fn replace_regex<'a>(
    re: &Regex,
    text: Cow<'a, str>,
    replacement: &str,
) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => re.replace_all(s, NoExpand(replacement)),
        Cow::Owned(s) => {
            let replaced = match re.replace_all(&s, NoExpand(replacement)) {
                Cow::Owned(out) => Some(out),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(replaced.unwrap_or(s))
        }
    }
}
