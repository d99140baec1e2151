#![deny(rust_2018_idioms)]

use once_cell::sync::Lazy;
use regex::Regex;

pub mod record;
pub use record::{read_records, Billionaire, Profile};

pub mod merge;
pub use merge::function::merge;

/// Extract the amount of billions from values like `12.3 B`, or return `0.0` if there is no `<number> B` in `net_worth`.
///
/// The unit marker is case-sensitive and may be separated from the number by whitespace.
pub fn parse_net_worth(net_worth: &str) -> f64 {
    static NET_WORTH: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*B").expect("valid pattern"));
    NET_WORTH
        .captures(net_worth)
        .and_then(|caps| caps.get(1))
        .and_then(|number| number.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Turn `['Tech','Finance']` or a bare `Tech` into a list of industry names.
///
/// Pseudo-lists are split on every comma, so names containing commas or quotes come out wrong.
/// The HTML entity `&#38;` is decoded to `&` in list items.
pub fn parse_industries(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let raw = raw.trim();
    match raw
        .strip_prefix('[')
        .and_then(|list| list.strip_suffix(']'))
    {
        Some(list) => list
            .split(',')
            .map(|item| {
                item.trim()
                    .trim_matches(|c: char| c == '\'' || c == '"')
                    .replace("&#38;", "&")
            })
            .collect(),
        None => vec![raw.to_owned()],
    }
}
