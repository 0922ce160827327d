use crate::models::Turn;

/// Known render variants for a turn line.
///
/// Upstream producers emit one of these two shapes; keeping them as a closed
/// set means each has exactly one render rule and one strip rule, so
/// rendering and stats parsing can never disagree on what a clean line looks
/// like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// `**Speaker 1:** text`
    MarkdownBold,
    /// `<strong>Speaker 1:</strong> text`
    HtmlBold,
}

impl RenderStyle {
    /// Render a turn in this variant's shape.
    pub fn render(&self, turn: &Turn) -> String {
        match self {
            RenderStyle::MarkdownBold => {
                format!("**{}:** {}", turn.display_label, turn.text)
            }
            RenderStyle::HtmlBold => {
                format!("<strong>{}:</strong> {}", turn.display_label, turn.text)
            }
        }
    }

    /// Remove this variant's markup from a line.
    pub fn strip(&self, s: &str) -> String {
        match self {
            RenderStyle::MarkdownBold => s.replace('*', ""),
            RenderStyle::HtmlBold => strip_tags(s),
        }
    }
}

/// Render a turn in the canonical shape used downstream: markdown-bold.
pub fn render_turn(turn: &Turn) -> String {
    RenderStyle::MarkdownBold.render(turn)
}

/// Remove markup from a line regardless of which variant produced it.
///
/// Applies both strip rules: complete `<...>` tags go, then `*` characters.
/// A line with neither passes through unchanged.
pub fn strip_markup(s: &str) -> String {
    RenderStyle::MarkdownBold.strip(&RenderStyle::HtmlBold.strip(s))
}

/// Remove complete `<...>` tags. An unterminated `<` is not a tag and stays.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
