//! String utility functions for common text manipulation operations.
//!
//! Case conversion helpers used by the bundle naming convention, plus
//! `right_replace` and docstring formatting for the CLI tables.
//!
//! All functions map `""` to `""`. Absent input is handled by the caller
//! with `Option::map`, so `None.map(snake_case)` stays `None`.

use std::sync::LazyLock;

use regex::Regex;

/// A character followed by a capitalized word, e.g. `aCamel` -> `a` + `Camel`
#[allow(clippy::expect_used)]
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));

/// A lowercase letter or digit followed by an uppercase letter
#[allow(clippy::expect_used)]
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Insert `delimiter` at every camel-case word boundary
///
/// When `lowercase` is set the result is lowercased; otherwise doubled
/// delimiters produced by boundaries next to existing separators are collapsed.
fn de_camel(s: &str, delimiter: &str, lowercase: bool) -> String {
    let replacement = format!("${{1}}{delimiter}${{2}}");
    let s1 = CAPITALIZED_WORD.replace_all(s, replacement.as_str());
    let s2 = LOWER_UPPER.replace_all(&s1, replacement.as_str());
    if lowercase {
        return s2.to_lowercase();
    }
    s2.replace(&format!("_{delimiter}"), delimiter)
        .replace(&delimiter.repeat(2), delimiter)
}

/// Uppercase the first character of every alphanumeric run, lowercase the rest
///
/// Digits do not start a new run, so `a1b` becomes `A1b`.
fn title_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut prev_is_alnum = false;
    for c in word.chars() {
        if prev_is_alnum {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_is_alnum = c.is_alphanumeric();
    }
    result
}

/// A word is "upper" when it has at least one cased letter and no lowercase ones
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// Convert a string to camelCase
///
/// ```text
/// camel_case("A_snake_cased_string") == "aSnakeCasedString"
/// ```
pub fn camel_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let snake = snake_case(s);
    let mut parts = snake.split('_').peekable();

    let mut result = String::new();
    while parts.peek().is_some_and(|part| part.is_empty()) {
        result.push('_');
        parts.next();
    }
    if let Some(first) = parts.next() {
        result.push_str(first);
    }
    for part in parts {
        result.push_str(&title_word(part));
    }
    result
}

/// Convert a string to kebab-case
pub fn kebab_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    de_camel(&s.replace('_', "-").replace(' ', "-"), "-", true)
}

/// Convert a string to snake_case
pub fn snake_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    de_camel(&s.replace('-', "_").replace(' ', "_"), "_", true)
}

/// Convert a string to Title Case
///
/// Words that are already all-uppercase (acronyms) are kept as-is.
pub fn title_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let spaced = de_camel(&s.replace('_', " ").replace('-', " "), " ", false);
    spaced
        .trim()
        .split(' ')
        .map(|part| {
            if is_upper(part) {
                part.to_string()
            } else {
                title_word(part)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace the last `count` occurrences of `old` in `s` with `new`
///
/// Earlier occurrences are left untouched. If `count` exceeds the number of
/// occurrences, all of them are replaced. An empty `old` leaves `s` unchanged.
pub fn right_replace(s: &str, old: &str, new: &str, count: usize) -> String {
    if s.is_empty() || old.is_empty() {
        return s.to_string();
    }
    let mut pieces: Vec<&str> = s.rsplitn(count.saturating_add(1), old).collect();
    pieces.reverse();
    pieces.join(new)
}

/// First non-empty line of a docstring, trimmed
pub fn format_docstring(doc: &str) -> String {
    doc.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}
