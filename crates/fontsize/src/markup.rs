use std::sync::LazyLock;

use regex::Regex;

use crate::size::FontSize;

static FONT_SIZE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="font-size: (\d+)px""#).unwrap());

/// Result of rewriting a markup fragment to a new font size.
///
/// `inserted_len` is the byte length of `result`, kept separate so the caller
/// can reposition the selection after replacing text whose length changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRewrite {
    pub result: String,
    pub inserted_len: usize,
}

/// Rewrites a markup fragment so it renders at `size`.
///
/// A fragment that already carries inline font-size declarations has every
/// declaration rewritten in place, leaving the surrounding markup untouched.
/// Anything else, including the empty fragment, is wrapped in a styled span.
pub fn apply_font_size_tag(text: &str, size: FontSize) -> TagRewrite {
    let result = if FONT_SIZE_STYLE.is_match(text) {
        FONT_SIZE_STYLE
            .replace_all(text, style_attr(size).as_str())
            .into_owned()
    } else {
        format!(r#"<span class="size" {}>{text}</span>"#, style_attr(size))
    };
    let inserted_len = result.len();
    TagRewrite {
        result,
        inserted_len,
    }
}

/// Reads the first font-size declaration out of a markup fragment.
pub fn detect_font_size_tag(text: &str) -> Option<FontSize> {
    let captures = FONT_SIZE_STYLE.captures(text)?;
    let px: u32 = captures.get(1)?.as_str().parse().ok()?;
    FontSize::new(px)
}

fn style_attr(size: FontSize) -> String {
    format!(r#"style="font-size: {size}px""#)
}
