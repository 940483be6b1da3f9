use std::sync::OnceLock;

use regex::Regex;

/// Letters (including the Spanish accented vowels and `ü`) and whitespace.
///
/// Roman numerals need no special case: `I`, `V`, `X`, `L`, `C`, `D` and `M`
/// are letters, so "Matemáticas II" passes.
const NAME_PATTERN: &str = r"^[a-zA-ZáéíóúüÁÉÍÓÚÜ\s]+$";
const POSTAL_CODE_PATTERN: &str = r"^[0-9]{5}$";

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static POSTAL_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

fn postal_code_re() -> &'static Regex {
    POSTAL_CODE_RE.get_or_init(|| {
        Regex::new(POSTAL_CODE_PATTERN).expect("postal code pattern is a valid regex")
    })
}

/// Whether `name` is acceptable as a student or subject name.
pub fn is_valid_name(name: &str) -> bool {
    name_re().is_match(name)
}

/// Whether `code` is exactly five ASCII digits.
pub fn is_valid_postal_code(code: &str) -> bool {
    postal_code_re().is_match(code)
}

/// Case-insensitive substring test used by every `search` operation.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
