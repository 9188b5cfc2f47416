use isolang::Language;

/// Language tag utilities.
///
/// Language tags in the output document are free-form strings and are
/// never validated or rejected. These helpers only look tags up against
/// the ISO 639 tables so the interactive prompts can warn about likely
/// typos and show a readable language name next to a recognized code.
/// Look up a language code and return its English name if recognized.
///
/// Accepts ISO 639-1 (2-letter) and ISO 639-3 (3-letter) codes, case
/// insensitively. Returns `None` for anything else.
pub fn describe(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    };

    language.map(|lang| lang.to_name())
}

/// Check whether a code is a known ISO 639-1 or ISO 639-3 code
pub fn is_known_code(code: &str) -> bool {
    describe(code).is_some()
}
