use crate::{
    kind::{ParseStageError, StageKind, parse_pipeline},
    process::{DynamicProcess, Process},
    stage::Stage,
};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("configuration error: {0}")]
    Config(#[from] ParseStageError),
}

/// Top-level entry point: an ordered, reusable set of stages.
///
/// ```
/// use textnorm::{CollapseWhitespace, Lowercase, Normalizer, RemovePunctuation, ReplaceSpace, Trim};
///
/// let slug = Normalizer::builder()
///     .add_stage(Trim)
///     .add_stage(Lowercase)
///     .add_stage(RemovePunctuation)
///     .add_stage(CollapseWhitespace)
///     .add_stage(ReplaceSpace::new("-"))
///     .build();
///
/// assert_eq!(
///     slug.normalize("How to Create Amazing Web Apps in 2023!"),
///     "how-to-create-amazing-web-apps-in-2023"
/// );
/// ```
pub struct Normalizer {
    pipeline: DynamicProcess,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Build from a `|`-separated description such as
    /// `"trim|lowercase|replace_space:-"`. See [`crate::kind`] for the grammar.
    pub fn from_config(spec: &str) -> Result<Self, NormalizerError> {
        let kinds = parse_pipeline(spec)?;
        Ok(kinds
            .into_iter()
            .fold(Self::builder(), NormalizerBuilder::add_kind)
            .build())
    }

    /// Run every stage in order. Returns the input borrowed when no stage
    /// changed it.
    #[inline]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pipeline.process(Cow::Borrowed(text))
    }

    /// Like [`Normalizer::normalize`], but takes ownership and reuses the
    /// buffer when nothing changes.
    pub fn normalize_owned(&self, text: String) -> String {
        self.pipeline.process(Cow::Owned(text)).into_owned()
    }

    /// Validate raw bytes as UTF-8, then normalize.
    pub fn normalize_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, NormalizerError> {
        let text = validate_utf8(bytes)?;
        Ok(self.normalize(text))
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }

    pub fn len(&self) -> usize {
        self.pipeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipeline.is_empty()
    }
}

#[cfg(feature = "simd")]
fn validate_utf8(bytes: &[u8]) -> Result<&str, NormalizerError> {
    simdutf8::compat::from_utf8(bytes).map_err(|e| NormalizerError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

#[cfg(not(feature = "simd"))]
fn validate_utf8(bytes: &[u8]) -> Result<&str, NormalizerError> {
    std::str::from_utf8(bytes).map_err(|e| NormalizerError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

#[derive(Default)]
pub struct NormalizerBuilder {
    pipeline: DynamicProcess,
}

impl NormalizerBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.pipeline = self.pipeline.push(stage);
        self
    }

    pub fn add_shared(mut self, stage: Arc<dyn Stage>) -> Self {
        self.pipeline = self.pipeline.push_arc(stage);
        self
    }

    pub fn add_kind(self, kind: StageKind) -> Self {
        self.add_shared(kind.into_stage())
    }

    pub fn build(self) -> Normalizer {
        debug!(stages = self.pipeline.len(), "normalizer built");
        Normalizer {
            pipeline: self.pipeline,
        }
    }
}
