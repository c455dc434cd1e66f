//! Guest and contact extraction from free-text episode descriptions.
//!
//! Best-effort pattern matching, not NLP. The contract is determinism on the
//! same input; absence is the failure signal, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// "featuring", "guest", or "with" (any case) followed by a capitalized
/// first and last name. Only the keyword is case-insensitive; the name span
/// must be capitalized.
static GUEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:featuring|guest|with)\s+([A-Z][a-z]+ [A-Z][a-z]+)").unwrap()
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// What the extractor found in one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Extract a guest name. The leftmost match wins when several keyword
/// occurrences are present.
pub fn extract_guest_name(text: Option<&str>) -> Option<String> {
    let text = text?;
    GUEST_RE.captures(text).map(|cap| cap[1].to_string())
}

/// Extract the first embedded email address. Scanning, not full-string
/// validation: surrounding prose is fine.
pub fn extract_email(text: Option<&str>) -> Option<String> {
    let text = text?;
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Run both extractors over the same text.
pub fn extract(text: Option<&str>) -> Extraction {
    Extraction {
        name: extract_guest_name(text),
        email: extract_email(text),
    }
}
