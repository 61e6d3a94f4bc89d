// ABOUTME: Locates the JSON payload inside a completion
// ABOUTME: Prefers a json-tagged fence, then any fence, then the whole text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::sync::LazyLock;

use regex::Regex;

/// Fenced block explicitly tagged as JSON
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static JSON_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)```json[ \t]*\r?\n(.*?)```").ok());

/// Any fenced block; the first line (language tag, possibly empty) is skipped
static ANY_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```[^\n]*\n(.*?)```").ok());

/// Extract the candidate JSON text from a completion, trimmed
#[must_use]
pub fn extract_payload(text: &str) -> &str {
    [&JSON_FENCE, &ANY_FENCE]
        .into_iter()
        .filter_map(|pattern| pattern.as_ref())
        .find_map(|pattern| pattern.captures(text).and_then(|caps| caps.get(1)))
        .map_or(text, |body| body.as_str())
        .trim()
}
