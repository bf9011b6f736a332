//! Text rules applied to card fields before rendering

use once_cell::sync::Lazy;
use regex::Regex;

static DESIGNATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Za-z0-9_]+)>").expect("designator pattern is valid"));

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z]*(?: [A-Z][A-Za-z]*)*)[.:]").expect("keyword pattern is valid")
});

/// Bold the keyword abilities that open each sentence of rules text.
///
/// A keyword is a run of capitalized words ending in `.` or `:` at the start
/// of the text or right after `". "`, e.g. `Unique.` or `Toughness:`.
pub fn bold_keywords(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in KEYWORD.captures_iter(text) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let start = name.start();
        if start != 0 && !text[..start].ends_with(". ") {
            continue;
        }
        out.push_str(&text[last..start]);
        out.push_str("<b>");
        out.push_str(name.as_str());
        out.push_str("</b>");
        last = name.end();
    }

    out.push_str(&text[last..]);
    out
}

/// Full emphasis pass for rules text: designator italics, then keyword bold.
///
/// Designators go first so the `<b>` tags added here are never read as a
/// designator.
pub fn format_rules(text: &str) -> String {
    bold_keywords(&format_designators(text))
}

/// Render the first `<Designator>` in `text` as italics.
///
/// Only one designator is rewritten per call; any later ones are left as
/// written.
pub fn format_designators(text: &str) -> String {
    DESIGNATOR.replace(text, "<i>$1</i>").into_owned()
}

/// Uppercase resource codes and remap `A` to `W`.
///
/// Only characters that were `a` or `A` before uppercasing become `W`.
pub fn remap_resources(codes: &str) -> String {
    let mut out = String::with_capacity(codes.len());
    for ch in codes.chars() {
        match ch {
            'a' | 'A' => out.push('W'),
            _ => out.extend(ch.to_uppercase()),
        }
    }
    out
}

/// Faction name as it appears in MSE attributes
pub fn normalize_faction(faction: &str) -> String {
    match faction {
        "Lotus" => "eaters of the lotus".to_string(),
        "Monarchs" => "four monarchs".to_string(),
        "Hand" => "guiding hand".to_string(),
        other => other.to_lowercase(),
    }
}

/// Card type as it appears in MSE attributes
pub fn normalize_card_type(card_type: &str) -> String {
    match card_type {
        "Feng Shui Site" => "fss".to_string(),
        other => other.to_lowercase(),
    }
}

/// Attribute line value: `<type>, <faction>`.
///
/// Empty parts are left out; returns `None` when both are empty.
pub fn attributes(card_type: &str, faction: &str) -> Option<String> {
    let mut parts = Vec::with_capacity(2);
    if !card_type.is_empty() {
        parts.push(normalize_card_type(card_type));
    }
    if !faction.is_empty() {
        parts.push(normalize_faction(faction));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
