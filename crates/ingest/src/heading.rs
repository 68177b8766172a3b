use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("invalid selector: h2"));

// "Constituency:" and "Assembly Constituency" prefixes.
static RE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:assembly\s+)?constituency\s*:?\s*").expect("invalid regex: prefix")
});
static RE_LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*").expect("invalid regex: leading number"));

/// Text of an element with each text node trimmed and joined by single spaces.
pub(crate) fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Constituency name shown on a results page, or an empty string.
///
/// The first `<h2>` is tried first. When it is missing, does not look like a
/// constituency heading, or yields nothing, the first text node mentioning
/// "constituency" that yields a name is used instead.
pub fn extract_constituency_name(document: &Html) -> String {
    let from_heading = document
        .select(&HEADING)
        .next()
        .map(element_text)
        .filter(|text| is_constituency_heading(text))
        .map(|text| name_from_heading(&text))
        .unwrap_or_default();

    if !from_heading.is_empty() {
        return from_heading;
    }

    document
        .root_element()
        .text()
        .filter(|t| t.to_lowercase().contains("constituency"))
        .map(|t| name_from_heading(t.trim()))
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}

/// A heading carries a name only if it mentions "constituency" or has a
/// "-" separator.
fn is_constituency_heading(text: &str) -> bool {
    text.contains('-') || text.to_lowercase().contains("constituency")
}

/// Pull the name out of a heading such as
/// `Assembly Constituency 1 - Valmiki Nagar (Bihar)` or
/// `Constituency: 195 Maner - Patna(12)`.
///
/// After the prefix and the constituency number are removed, the first
/// non-empty "-" segment is the name, cut at the first "(". Hyphenated
/// names therefore lose everything after the hyphen.
pub fn name_from_heading(heading: &str) -> String {
    let rest = RE_PREFIX.replace(heading.trim(), "");
    let rest = RE_LEADING_NUMBER.replace(rest.trim(), "");

    let segment = rest
        .split('-')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("");

    let name = segment.split('(').next().unwrap_or("").trim();
    title_case(name)
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
