use crate::{
    CollapseWhitespace, Lowercase, RemoveCarriageReturn, RemovePunctuation,
    RemoveSpecialCharacters, ReplaceAccents, ReplaceNewline, ReplaceSpace, ReplaceTab,
    ReplaceTildes, Trim, Uppercase, process::Process, profile::Profile,
};

/// URL slugs: `"How to Create Amazing Web Apps in 2023!"` →
/// `"how-to-create-amazing-web-apps-in-2023"`.
pub fn slug() -> Profile<impl Process> {
    Profile::builder("slug")
        .add_stage(Trim)
        .add_stage(Lowercase)
        .add_stage(RemovePunctuation)
        .add_stage(CollapseWhitespace)
        .add_stage(ReplaceSpace::new("-"))
        .build()
}

/// Comparison and indexing keys: lowercase, unaccented, symbols dropped,
/// single-spaced. `"  CAFÉ, résumé! @2023  "` → `"cafe resume 2023"`.
pub fn search_key() -> Profile<impl Process> {
    Profile::builder("search_key")
        .add_stage(Trim)
        .add_stage(Lowercase)
        .add_stage(ReplaceAccents)
        .add_stage(RemoveSpecialCharacters)
        .add_stage(CollapseWhitespace)
        .build()
}

/// Free-form user input tidied for display: trimmed, one space between words.
pub fn clean_input() -> Profile<impl Process> {
    Profile::builder("clean_input")
        .add_stage(Trim)
        .add_stage(CollapseWhitespace)
        .build()
}

/// Multi-line text folded onto one line. Every line break, tab and carriage
/// return becomes a single space; surrounding spacing is otherwise kept.
pub fn flatten_lines() -> Profile<impl Process> {
    Profile::builder("flatten_lines")
        .add_stage(RemoveCarriageReturn)
        .add_stage(ReplaceNewline::new(" "))
        .add_stage(ReplaceTab::new(" "))
        .build()
}

/// Spanish prose to unaccented, punctuation-free uppercase on a single line.
pub fn spanish_uppercase() -> Profile<impl Process> {
    Profile::builder("spanish_uppercase")
        .add_stage(ReplaceTildes)
        .add_stage(ReplaceAccents)
        .add_stage(RemovePunctuation)
        .add_stage(Uppercase)
        .add_stage(ReplaceNewline::new(" "))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_preset() {
        let p = slug();
        assert_eq!(
            p.apply("How to Create Amazing Web Apps in 2023!"),
            "how-to-create-amazing-web-apps-in-2023"
        );
        assert_eq!(p.apply("  Hello,   World  "), "hello-world");
    }

    #[test]
    fn search_key_preset() {
        assert_eq!(search_key().apply("  CAFÉ, résumé! @2023  "), "cafe resume 2023");
    }

    #[test]
    fn clean_input_preset() {
        assert_eq!(clean_input().apply(" \t hello \n  world \r\n"), "hello world");
    }

    #[test]
    fn flatten_lines_preset() {
        assert_eq!(flatten_lines().apply("a\r\nb\tc\n"), "a b c ");
    }

    #[test]
    fn spanish_uppercase_preset() {
        let input = "\n¿Sabías que el número áureo, representado por la letra griega φ (phi), \
                     es aproximadamente 1,6180339887...?\n";
        assert_eq!(
            spanish_uppercase().apply(input),
            " SABIAS QUE EL NUMERO AUREO REPRESENTADO POR LA LETRA GRIEGA Φ PHI \
             ES APROXIMADAMENTE 16180339887 "
        );
    }

    #[test]
    fn preset_names() {
        assert_eq!(slug().name(), "slug");
        assert_eq!(search_key().name(), "search_key");
        assert_eq!(spanish_uppercase().len(), 5);
    }
}
