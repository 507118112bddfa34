pub mod kind;
pub mod normalizer;
pub mod process;
pub mod profile;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use kind::{ParseStageError, StageKind};
pub use normalizer::{Normalizer, NormalizerBuilder, NormalizerError};
pub use process::{ChainedProcess, DynamicProcess, EmptyProcess, Process, apply_pipeline};
pub use profile::Profile;
pub use stage::Stage;
pub use stage::accents::ReplaceAccents;
pub use stage::alphanumeric::{RemoveNonAlphanumeric, ReplaceNonAlphanumeric};
pub use stage::case::{Lowercase, Uppercase};
pub use stage::control_chars::{
    RemoveCarriageReturn, RemoveNewline, RemoveTab, ReplaceCarriageReturn, ReplaceNewline,
    ReplaceTab,
};
pub use stage::custom::FnStage;
pub use stage::diacritics::{RemoveDiacritics, ReplaceDiacritics};
pub use stage::digits::{RemoveDigits, ReplaceDigits};
pub use stage::punctuation::{RemovePunctuation, RemovePunctuationKeepSpanish, ReplacePunctuation};
pub use stage::special_chars::{
    RemoveSpecialCharacters, ReplaceSpecialCharacters, replace_special_characters,
};
pub use stage::tildes::{RemoveTildes, ReplaceTildes};
pub use stage::whitespace::{CollapseWhitespace, RemoveAllSpace, ReplaceSpace, Trim};
