// SPDX-License-Identifier: MIT

//! HTML escaping for step values rendered in forms

/// A text-to-text transform applied before values are rendered
pub trait TextTransform: Send + Sync {
    fn transform(&self, input: &str) -> String;
}

/// Escapes the five HTML-significant characters
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl TextTransform for HtmlEscaper {
    fn transform(&self, input: &str) -> String {
        escape_html(input)
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
