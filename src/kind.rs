//! Stage catalog as a plain enum.
//!
//! `StageKind` names every built-in stage so that pipelines can be described
//! in configuration files, CLI flags or environment variables and turned into
//! real stages at runtime. The textual form is the stage's `name()`,
//! optionally followed by `:` and the replacement for parameterized stages:
//!
//! ```text
//! trim|lowercase|remove_punctuation|collapse_whitespace|replace_space:-
//! ```
//!
//! Everything after the first `:` is the replacement, verbatim. It may contain
//! `:` and spaces but not `|`, which separates stages.

use crate::{
    CollapseWhitespace, Lowercase, RemoveAllSpace, RemoveCarriageReturn, RemoveDiacritics,
    RemoveDigits, RemoveNewline, RemoveNonAlphanumeric, RemovePunctuation,
    RemovePunctuationKeepSpanish, RemoveSpecialCharacters, RemoveTab, RemoveTildes,
    ReplaceAccents, ReplaceCarriageReturn, ReplaceDiacritics, ReplaceDigits, ReplaceNewline,
    ReplaceNonAlphanumeric, ReplacePunctuation, ReplaceSpace, ReplaceSpecialCharacters,
    ReplaceTab, ReplaceTildes, Trim, Uppercase, process::DynamicProcess, stage::Stage,
};
use std::{fmt, str::FromStr, sync::Arc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseStageError {
    #[error("unknown stage `{0}`")]
    UnknownStage(String),

    #[error("stage `{0}` requires a replacement (`{0}:<replacement>`)")]
    MissingReplacement(&'static str),

    #[error("stage `{0}` does not take a replacement")]
    UnexpectedReplacement(&'static str),
}

/// Every built-in stage, with the replacement for the parameterized ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageKind {
    Uppercase,
    Lowercase,
    Trim,
    CollapseWhitespace,
    RemoveAllSpace,
    RemoveNewline,
    RemoveTab,
    RemoveCarriageReturn,
    RemoveNonAlphanumeric,
    RemoveTildes,
    RemoveDiacritics,
    RemoveSpecialCharacters,
    RemovePunctuation,
    RemovePunctuationKeepSpanish,
    RemoveDigits,
    ReplaceAccents,
    ReplaceTildes,
    ReplaceTab(String),
    ReplaceCarriageReturn(String),
    ReplaceNonAlphanumeric(String),
    ReplacePunctuation(String),
    ReplaceDigits(String),
    ReplaceSpace(String),
    ReplaceDiacritics(String),
    ReplaceNewline(String),
    ReplaceSpecialCharacters(String),
}

impl StageKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Trim => "trim",
            Self::CollapseWhitespace => "collapse_whitespace",
            Self::RemoveAllSpace => "remove_all_space",
            Self::RemoveNewline => "remove_newline",
            Self::RemoveTab => "remove_tab",
            Self::RemoveCarriageReturn => "remove_carriage_return",
            Self::RemoveNonAlphanumeric => "remove_non_alphanumeric",
            Self::RemoveTildes => "remove_tildes",
            Self::RemoveDiacritics => "remove_diacritics",
            Self::RemoveSpecialCharacters => "remove_special_characters",
            Self::RemovePunctuation => "remove_punctuation",
            Self::RemovePunctuationKeepSpanish => "remove_punctuation_keep_spanish",
            Self::RemoveDigits => "remove_digits",
            Self::ReplaceAccents => "replace_accents",
            Self::ReplaceTildes => "replace_tildes",
            Self::ReplaceTab(_) => "replace_tab",
            Self::ReplaceCarriageReturn(_) => "replace_carriage_return",
            Self::ReplaceNonAlphanumeric(_) => "replace_non_alphanumeric",
            Self::ReplacePunctuation(_) => "replace_punctuation",
            Self::ReplaceDigits(_) => "replace_digits",
            Self::ReplaceSpace(_) => "replace_space",
            Self::ReplaceDiacritics(_) => "replace_diacritics",
            Self::ReplaceNewline(_) => "replace_newline",
            Self::ReplaceSpecialCharacters(_) => "replace_special_characters",
        }
    }

    pub fn replacement(&self) -> Option<&str> {
        match self {
            Self::ReplaceTab(r)
            | Self::ReplaceCarriageReturn(r)
            | Self::ReplaceNonAlphanumeric(r)
            | Self::ReplacePunctuation(r)
            | Self::ReplaceDigits(r)
            | Self::ReplaceSpace(r)
            | Self::ReplaceDiacritics(r)
            | Self::ReplaceNewline(r)
            | Self::ReplaceSpecialCharacters(r) => Some(r),
            _ => None,
        }
    }

    /// Build the concrete stage.
    pub fn into_stage(self) -> Arc<dyn Stage> {
        match self {
            Self::Uppercase => Arc::new(Uppercase),
            Self::Lowercase => Arc::new(Lowercase),
            Self::Trim => Arc::new(Trim),
            Self::CollapseWhitespace => Arc::new(CollapseWhitespace),
            Self::RemoveAllSpace => Arc::new(RemoveAllSpace),
            Self::RemoveNewline => Arc::new(RemoveNewline),
            Self::RemoveTab => Arc::new(RemoveTab),
            Self::RemoveCarriageReturn => Arc::new(RemoveCarriageReturn),
            Self::RemoveNonAlphanumeric => Arc::new(RemoveNonAlphanumeric),
            Self::RemoveTildes => Arc::new(RemoveTildes),
            Self::RemoveDiacritics => Arc::new(RemoveDiacritics),
            Self::RemoveSpecialCharacters => Arc::new(RemoveSpecialCharacters),
            Self::RemovePunctuation => Arc::new(RemovePunctuation),
            Self::RemovePunctuationKeepSpanish => Arc::new(RemovePunctuationKeepSpanish),
            Self::RemoveDigits => Arc::new(RemoveDigits),
            Self::ReplaceAccents => Arc::new(ReplaceAccents),
            Self::ReplaceTildes => Arc::new(ReplaceTildes),
            Self::ReplaceTab(r) => Arc::new(ReplaceTab::new(r)),
            Self::ReplaceCarriageReturn(r) => Arc::new(ReplaceCarriageReturn::new(r)),
            Self::ReplaceNonAlphanumeric(r) => Arc::new(ReplaceNonAlphanumeric::new(r)),
            Self::ReplacePunctuation(r) => Arc::new(ReplacePunctuation::new(r)),
            Self::ReplaceDigits(r) => Arc::new(ReplaceDigits::new(r)),
            Self::ReplaceSpace(r) => Arc::new(ReplaceSpace::new(r)),
            Self::ReplaceDiacritics(r) => Arc::new(ReplaceDiacritics::new(r)),
            Self::ReplaceNewline(r) => Arc::new(ReplaceNewline::new(r)),
            Self::ReplaceSpecialCharacters(r) => Arc::new(ReplaceSpecialCharacters::new(r)),
        }
    }
}

impl FromStr for StageKind {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, replacement) = match s.split_once(':') {
            Some((name, r)) => (name.trim(), Some(r.to_owned())),
            None => (s.trim(), None),
        };

        let nullary = match name {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "trim" => Some(Self::Trim),
            "collapse_whitespace" => Some(Self::CollapseWhitespace),
            "remove_all_space" => Some(Self::RemoveAllSpace),
            "remove_newline" => Some(Self::RemoveNewline),
            "remove_tab" => Some(Self::RemoveTab),
            "remove_carriage_return" => Some(Self::RemoveCarriageReturn),
            "remove_non_alphanumeric" => Some(Self::RemoveNonAlphanumeric),
            "remove_tildes" => Some(Self::RemoveTildes),
            "remove_diacritics" => Some(Self::RemoveDiacritics),
            "remove_special_characters" => Some(Self::RemoveSpecialCharacters),
            "remove_punctuation" => Some(Self::RemovePunctuation),
            "remove_punctuation_keep_spanish" => Some(Self::RemovePunctuationKeepSpanish),
            "remove_digits" => Some(Self::RemoveDigits),
            "replace_accents" => Some(Self::ReplaceAccents),
            "replace_tildes" => Some(Self::ReplaceTildes),
            _ => None,
        };
        if let Some(kind) = nullary {
            return match replacement {
                Some(_) => Err(ParseStageError::UnexpectedReplacement(kind.name())),
                None => Ok(kind),
            };
        }

        let build: fn(String) -> Self = match name {
            "replace_tab" => Self::ReplaceTab,
            "replace_carriage_return" => Self::ReplaceCarriageReturn,
            "replace_non_alphanumeric" => Self::ReplaceNonAlphanumeric,
            "replace_punctuation" => Self::ReplacePunctuation,
            "replace_digits" => Self::ReplaceDigits,
            "replace_space" => Self::ReplaceSpace,
            "replace_diacritics" => Self::ReplaceDiacritics,
            "replace_newline" => Self::ReplaceNewline,
            "replace_special_characters" => Self::ReplaceSpecialCharacters,
            other => return Err(ParseStageError::UnknownStage(other.to_owned())),
        };
        match replacement {
            Some(r) => Ok(build(r)),
            None => Err(ParseStageError::MissingReplacement(build(String::new()).name())),
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.replacement() {
            Some(r) => write!(f, "{}:{r}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// Parse a `|`-separated pipeline description. Empty segments are ignored,
/// so `""` yields the empty (identity) pipeline.
pub fn parse_pipeline(spec: &str) -> Result<Vec<StageKind>, ParseStageError> {
    let kinds = spec
        .split('|')
        .filter(|segment| !segment.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<StageKind>, _>>()?;
    debug!(stages = kinds.len(), "pipeline configuration parsed");
    Ok(kinds)
}

impl FromIterator<StageKind> for DynamicProcess {
    fn from_iter<I: IntoIterator<Item = StageKind>>(iter: I) -> Self {
        iter.into_iter().map(StageKind::into_stage).collect()
    }
}
