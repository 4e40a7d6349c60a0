//! Pattern-based extraction from the HTML sample pages
//!
//! Matching is positional: the first CSS rule and the first icon card
//! qualified by a status class win, even when a later match would be the
//! intended one.

use crate::artifacts::pack::glyph::Glyph;
use crate::artifacts::pack::gradient::{Gradient, HEX_COLOR_REGEX, HexColor};
use anyhow::Context;
use regex::Regex;

const SVG_BLOCK_REGEX: &str = r"(?s)<svg[^>]*>(.*?)</svg>";
const PATH_ELEMENT_REGEX: &str = r"<path[^>]+>";

fn gradient_rule_regex(class: &str) -> String {
    format!(
        r"\.{}\s+\.icon-wrapper\s*\{{[^}}]*background:\s*linear-gradient\([^)]+\)",
        regex::escape(class)
    )
}

fn icon_card_regex(class: &str) -> String {
    format!(
        r#"(?s)<div class="icon-card {}">.*?</div>\s*</div>\s*</div>"#,
        regex::escape(class)
    )
}

fn compile(pattern: &str) -> anyhow::Result<Regex> {
    Regex::new(pattern).with_context(|| format!("invalid extraction regex: {pattern}"))
}

/// First two hex colors of the status' `.icon-wrapper` gradient, or the
/// default gray pair when the rule is missing or names fewer colors.
pub fn extract_gradient(html: &str, class: &str) -> anyhow::Result<Gradient> {
    let rule = compile(&gradient_rule_regex(class))?;

    let Some(rule_match) = rule.find(html) else {
        tracing::debug!(class, "no gradient rule, using default colors");
        return Ok(Gradient::default());
    };

    let colors = compile(HEX_COLOR_REGEX)?
        .find_iter(rule_match.as_str())
        .take(2)
        .map(|color| HexColor::try_parse(color.as_str()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match <[HexColor; 2]>::try_from(colors) {
        Ok([start, end]) => Ok(Gradient::new(start, end)),
        Err(colors) => {
            tracing::debug!(class, found = colors.len(), "gradient has too few colors");
            Ok(Gradient::default())
        }
    }
}

/// Path elements of the first `<svg>` block inside the status' icon card.
///
/// Returns `None` when there is no card, no svg block, or the block holds no
/// path elements.
pub fn extract_glyph(html: &str, class: &str) -> anyhow::Result<Option<Glyph>> {
    let Some(card) = compile(&icon_card_regex(class))?.find(html) else {
        tracing::debug!(class, "no icon card");
        return Ok(None);
    };

    let Some(svg_body) = compile(SVG_BLOCK_REGEX)?
        .captures(card.as_str())
        .and_then(|captures| captures.get(1))
    else {
        tracing::debug!(class, "icon card has no svg block");
        return Ok(None);
    };

    let paths = compile(PATH_ELEMENT_REGEX)?
        .find_iter(svg_body.as_str())
        .map(|path| path.as_str().to_string())
        .collect::<Vec<_>>();

    if paths.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Glyph::new(paths)))
    }
}
