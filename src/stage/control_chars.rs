//! Newline, tab and carriage-return stages.
//!
//! Each targets exactly one ASCII control character. `\r\n` is two
//! characters here: `RemoveNewline` leaves the `\r` behind.

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;
use crate::stage::{Stage, replace_ascii_byte};
use memchr::memchr;
use std::borrow::Cow;

macro_rules! control_char_stages {
    ($(
        $byte:literal, $escaped:literal,
        remove: $remove:ident => $remove_name:literal,
        replace: $replace:ident => $replace_name:literal
    );* $(;)?) => {
        $(
            #[doc = concat!("Deletes every `", $escaped, "`.")]
            pub struct $remove;

            impl Stage for $remove {
                fn name(&self) -> &'static str {
                    $remove_name
                }

                #[inline(always)]
                fn needs_apply(&self, text: &str) -> bool {
                    memchr($byte, text.as_bytes()).is_some()
                }

                fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
                    replace_ascii_byte(text, $byte, "")
                }
            }

            #[doc = concat!("Replaces every `", $escaped, "` with a fixed string.")]
            #[derive(Debug, Clone)]
            pub struct $replace {
                replacement: String,
            }

            impl $replace {
                pub fn new(replacement: impl Into<String>) -> Self {
                    Self {
                        replacement: replacement.into(),
                    }
                }

                pub fn replacement(&self) -> &str {
                    &self.replacement
                }
            }

            impl Stage for $replace {
                fn name(&self) -> &'static str {
                    $replace_name
                }

                #[inline(always)]
                fn needs_apply(&self, text: &str) -> bool {
                    memchr($byte, text.as_bytes()).is_some()
                }

                fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
                    replace_ascii_byte(text, $byte, &self.replacement)
                }
            }
        )*
    };
}

control_char_stages! {
    b'\n', "\\n",
        remove: RemoveNewline => "remove_newline",
        replace: ReplaceNewline => "replace_newline";
    b'\t', "\\t",
        remove: RemoveTab => "remove_tab",
        replace: ReplaceTab => "replace_tab";
    b'\r', "\\r",
        remove: RemoveCarriageReturn => "remove_carriage_return",
        replace: ReplaceCarriageReturn => "replace_carriage_return";
}

#[cfg(test)]
impl StageTestConfig for RemoveNewline {
    fn samples() -> &'static [&'static str] {
        &["Line 1\nLine 2\nLine 3", "\n\n", "crlf\r\n", "no breaks", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello\nworld", "helloworld"),
            ("crlf\r\n", "crlf\r"),
            ("\n", ""),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceNewline {
    fn samples() -> &'static [&'static str] {
        &["Line 1\nLine 2\nLine 3", "\n\n", "crlf\r\n", "no breaks", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Line 1\nLine 2\nLine 3", "Line 1 Line 2 Line 3"),
            ("\n\n", "  "),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveTab {
    fn samples() -> &'static [&'static str] {
        &["hello\tworld", "\t\t", "no tabs", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("hello\tworld", "helloworld"), ("\ta\tb\t", "ab")]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceTab {
    fn samples() -> &'static [&'static str] {
        &["Hello\tWorld\tTest", "\t\t", "no tabs", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Hello\tWorld\tTest", "Hello World Test"),
            ("This\tis\ta\ttest", "This is a test"),
        ]
    }
}

#[cfg(test)]
impl StageTestConfig for RemoveCarriageReturn {
    fn samples() -> &'static [&'static str] {
        &["hello\rworld", "crlf\r\n", "\r", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("hello\rworld", "helloworld"), ("a\r\nb", "a\nb")]
    }
}

#[cfg(test)]
impl StageTestConfig for ReplaceCarriageReturn {
    fn samples() -> &'static [&'static str] {
        &["This\ris\ra\rcarriage\rreturn", "\r", "plain", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("This\ris\ra\rcarriage\rreturn", "This is a carriage return")]
    }
}
