//! Process abstraction.
//!
//! `ChainedProcess` is monomorphised: the compiler knows the concrete type of
//! every stage and can inline the whole chain. `DynamicProcess` is the runtime
//! fallback for pipelines assembled from configuration or plugins.
//!
//! Both run stages strictly left-to-right, feeding each stage the previous
//! stage's output, and skip a stage whenever its `needs_apply` says so. An
//! empty process is the identity.
use crate::stage::Stage;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// Number of stages in the process.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if !stage.needs_apply(&text) {
        trace!(stage = stage.name(), "skipped");
        return text;
    }
    let before = text.len();
    let out = stage.apply(text);
    trace!(stage = stage.name(), before, after = out.len(), "applied");
    out
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }

    #[inline(always)]
    fn len(&self) -> usize {
        0
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        run_stage(&self.stage, current)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.previous.len() + 1
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline(always)]
    pub fn push_arc(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl FromIterator<Arc<dyn Stage>> for DynamicProcess {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Stage>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text);
        }
        text
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.stages.len()
    }
}

/// Runs `stages` over `input` in order. An empty slice returns `input`.
pub fn apply_pipeline(stages: &[&dyn Stage], input: &str) -> String {
    let mut text = Cow::Borrowed(input);
    for &stage in stages {
        text = run_stage(stage, text);
    }
    text.into_owned()
}
