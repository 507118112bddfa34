use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged and still borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal contract.
///
/// 1. `zero_copy_when_no_changes`: no allocation when input == output
/// 2. `stage_is_idempotent`: applying twice yields the same result as once
/// 3. `needs_apply_is_accurate`: predicts whether `apply()` would change text
/// 4. `handles_empty_string`: `""` maps to `""`
/// 5. `no_panic_on_mixed_scripts`: survives pathological real-world input
/// 6. `transforms_as_declared`: every `should_transform` pair holds
///
/// `Send + Sync + 'static` is enforced by the trait bounds.
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
        $crate::testing::stage_contract::transforms_as_declared(&$stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        // First pass – respect needs_apply
        if stage.needs_apply(&text) {
            text = stage.apply(text);
            assert_ne!(
                text.as_ref(),
                input,
                "stage `{}` claimed a change but returned its input: `{input}`",
                stage.name()
            );
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass – the output is already normalized, nothing may move
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass (stage: `{}`, input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let original_ptr = pass_through as *const str;
        // apply() must be zero-copy on its own, without needs_apply gating
        let text = stage.apply(Cow::Borrowed(pass_through));

        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(_)),
            "pass-through sample became owned (stage: `{}`, input: `{pass_through}`)",
            stage.name()
        );
        assert_eq!(original_ptr, text.as_ref() as *const str);
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(
            once,
            twice,
            "apply() not idempotent for `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for &sample in S::samples() {
        check_accuracy(stage, sample);
    }
    for &sample in S::should_pass_through() {
        check_accuracy(stage, sample);
    }
    for &(sample, _) in S::should_transform() {
        check_accuracy(stage, sample);
    }
    let must_check = ["", "hello", "world123", " !@#", "a\tb\r\nc", "ñandú ~ φ"];
    for &sample in &must_check {
        check_accuracy(stage, sample);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input so that the comparison is purely semantic
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input:?}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    assert!(!stage.needs_apply(""));
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
    assert_eq!(stage.normalize(""), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let inputs = [
        "Hello 世界 русский Türkçe العربية 简体中文",
        "🇫🇷 café\u{0301} \u{200B}\u{FEFF} ½ ﬁ",
        "\u{0085}\u{00A0}\u{3000}\t\n\r\u{000B}\u{000C}",
    ];
    for input in inputs {
        let _ = stage.apply(Cow::Borrowed(input));
        let _ = stage.normalize(input);
    }
}

pub fn transforms_as_declared<S: StageTestConfig>(stage: &S) {
    for &(input, expected) in S::should_transform() {
        let got = stage.normalize(input);
        assert_eq!(
            got,
            expected,
            "stage `{}` on `{input:?}`",
            stage.name()
        );
        let via_apply = stage.apply(Cow::Borrowed(input));
        assert_eq!(via_apply.as_ref(), expected);
    }
}
