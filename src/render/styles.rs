//! Display templates for recognized tags.
//!
//! Each recognized element name maps to a fixed template. Templates come in
//! two variants: `Styled` wraps the text in ANSI emphasis via crossterm, and
//! `Plain` emits the same shape with no escape codes (the text-only mode, and
//! the easiest form to assert on in tests).

use crossterm::style::{Color, Stylize};

/// Hyperlink color, also used by the bookmark and history listings.
pub const LINK_COLOR: Color = Color::Rgb {
    r: 0x3b,
    g: 0x9d,
    b: 0xff,
};

/// Tags that participate in the trailing-blank-line rule for list groups.
pub const LIST_TAGS: [&str; 3] = ["li", "dt", "dd"];

/// Whether output is emphasized with ANSI styling or left plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    Styled,
    Plain,
}

impl StyleMode {
    fn is_styled(self) -> bool {
        matches!(self, StyleMode::Styled)
    }
}

/// Whether `tag` has a block display template of its own.
///
/// `a` is handled separately by the renderer (it needs an ordinal).
pub fn is_display_tag(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "aside" | "li" | "code"
    )
}

/// Applies the display template for `tag` to its flattened text.
///
/// Returns `None` for element names with no template.
pub fn display(mode: StyleMode, tag: &str, text: &str) -> Option<String> {
    let styled = mode.is_styled();
    let block = match tag {
        "p" => format!("{}\n\n", text),
        "h1" => {
            let banner = format!("## {} ##", text);
            if styled {
                format!("{}\n", banner.as_str().white().bold().underlined())
            } else {
                format!("{}\n", banner)
            }
        }
        "h2" if styled => format!("{}\n", text.white().bold().underlined()),
        "h3" if styled => format!("{}\n", text.white().bold()),
        "h4" if styled => format!("{}\n", text.white().italic().underlined()),
        "h5" if styled => format!("{}\n", text.white().italic()),
        "h2" | "h3" | "h4" | "h5" | "h6" => format!("{}\n", text),
        "aside" => {
            if styled {
                format!("{}\n\n", text.dim())
            } else {
                format!("{}\n\n", text)
            }
        }
        "li" => {
            let item = format!("• {}", text);
            if styled {
                format!(" {}\n", item.as_str().yellow())
            } else {
                format!(" {}\n", item)
            }
        }
        "code" => format!("{}\n\n", text),
        _ => return None,
    };
    Some(block)
}

/// Formats a hyperlink with its assigned ordinal: `(N) text`.
pub fn link(mode: StyleMode, ordinal: usize, text: &str) -> String {
    let reference = format!("({}) {}", ordinal, text);
    if mode.is_styled() {
        format!("{}", reference.as_str().with(LINK_COLOR).underlined())
    } else {
        reference
    }
}

/// Formats a page heading using the `h1` template.
pub fn heading(mode: StyleMode, text: &str) -> String {
    // is_display_tag("h1") holds, so the template always applies
    display(mode, "h1", text).unwrap_or_default()
}

/// Formats the single user-facing failure line for an unloadable page.
pub fn failure(mode: StyleMode, message: &str) -> String {
    if mode.is_styled() {
        format!("{}", message.red())
    } else {
        message.to_string()
    }
}
