use crate::stage::Stage;
use std::borrow::Cow;

/// Caller-defined stage backed by a closure.
///
/// ```
/// use textnorm::{FnStage, Stage};
///
/// let foo_to_bar = FnStage::new("foo_to_bar", |s: &str| s.replace("foo", "bar"));
/// assert_eq!(
///     foo_to_bar.normalize("foo is everywhere, foo here, foo there"),
///     "bar is everywhere, bar here, bar there"
/// );
/// ```
///
/// The closure cannot be inspected cheaply, so `needs_apply` always says yes.
/// `apply` still hands back the original `Cow` when the closure's output is
/// equal to its input.
pub struct FnStage<F> {
    name: &'static str,
    f: F,
}

impl<F> FnStage<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Stage for FnStage<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    fn needs_apply(&self, _text: &str) -> bool {
        true
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let out = (self.f)(&text);
        if out == *text { text } else { Cow::Owned(out) }
    }
}
