//! Tag renderer for termweb.
//!
//! Converts a parsed DOM subtree into one styled text block, assigning
//! sequential ordinals to hyperlinks as they are encountered in document
//! order. The caller owns a [`RenderContext`] per page view; the ordered
//! link table it accumulates is what `*N` references resolve against.

pub mod styles;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::types::errors::RenderError;
use styles::{StyleMode, LIST_TAGS};

/// Bound on element nesting; deeper trees fail with `RenderError::TooDeep`
/// and the offending top-level tag is skipped.
const MAX_DEPTH: usize = 64;

/// Per-render state: the style mode and the ordered link table.
///
/// Ordinals are 1-based, assigned in document order, and never reused or
/// renumbered within one render.
pub struct RenderContext {
    mode: StyleMode,
    links: Vec<String>,
}

impl RenderContext {
    pub fn new(mode: StyleMode) -> Self {
        Self {
            mode,
            links: Vec::new(),
        }
    }

    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    /// The link table accumulated so far, ordinal N at index N-1.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn into_links(self) -> Vec<String> {
        self.links
    }

    /// Records a link target and returns its assigned ordinal.
    fn push_link(&mut self, href: String) -> usize {
        self.links.push(href);
        self.links.len()
    }
}

/// Parses raw HTML into a DOM tree.
pub fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts).one(html)
}

/// Finds the `<body>` element of a parsed document.
pub fn find_body(dom: &RcDom) -> Option<Handle> {
    fn walk(handle: &Handle) -> Option<Handle> {
        if element_name(handle).as_deref() == Some("body") {
            return Some(handle.clone());
        }
        for child in handle.children.borrow().iter() {
            if let Some(body) = walk(child) {
                return Some(body);
            }
        }
        None
    }
    walk(&dom.document)
}

/// Renders every top-level tag of `body` in order.
///
/// A tag whose render fails contributes an empty string; the rest of the
/// page still renders.
pub fn render_body(body: &Handle, ctx: &mut RenderContext) -> String {
    let mut content = String::new();
    for child in element_children(body) {
        match render_tag(&child, ctx, 0) {
            Ok(block) => content.push_str(&block),
            Err(e) => {
                log::warn!(
                    "skipping <{}>: {}",
                    element_name(&child).unwrap_or_default(),
                    e
                );
            }
        }
    }
    content
}

/// Renders one tag subtree into its styled text block.
///
/// - standalone `a` tags take the next ordinal and render `(N) text`;
/// - tags with a display template flatten their text, then substitute each
///   inline link's text with its numbered form (first occurrence only);
/// - structural tags recurse into element children and concatenate, adding
///   a blank line when the group ends in a list tag;
/// - anything else renders as the empty string.
pub fn render_tag(
    handle: &Handle,
    ctx: &mut RenderContext,
    depth: usize,
) -> Result<String, RenderError> {
    if depth > MAX_DEPTH {
        return Err(RenderError::TooDeep);
    }

    let name = match element_name(handle) {
        Some(name) => name,
        None => return Ok(String::new()),
    };

    // A standalone link, i.e. not inline within a styled block.
    if name == "a" {
        let href = attr_value(handle, "href").unwrap_or_default();
        let text = flatten_text(handle);
        let ordinal = ctx.push_link(href);
        return Ok(format!("{}\n\n", styles::link(ctx.mode, ordinal, &text)));
    }

    let children = element_children(handle);

    if let Some(mut block) = styles::display(ctx.mode, &name, &flatten_text(handle)) {
        if !children.is_empty() {
            // Number every inline link in document order, then splice each
            // numbered form over the first literal occurrence of its text.
            // Repeated or absent link text degrades to a misplaced or missing
            // substitution; the ordinal itself is always recorded.
            let mut inline_links = Vec::new();
            collect_links(handle, &mut inline_links);

            for (text, href) in inline_links {
                let ordinal = ctx.push_link(href);
                if text.is_empty() {
                    continue;
                }
                let numbered = styles::link(ctx.mode, ordinal, &text);
                block = block.replacen(&text, &numbered, 1);
            }
        }
        return Ok(block);
    }

    // No template of its own: render whatever recognized descendants exist.
    if children.is_empty() {
        return Ok(String::new());
    }

    let mut content = String::new();
    let last = children.len() - 1;
    for (index, child) in children.iter().enumerate() {
        content.push_str(&render_tag(child, ctx, depth + 1)?);

        // One blank line after the final item of a contiguous list group.
        if index == last {
            if let Some(child_name) = element_name(child) {
                if LIST_TAGS.contains(&child_name.as_str()) {
                    content.push('\n');
                }
            }
        }
    }
    Ok(content)
}

/// Returns the local element name, or `None` for non-element nodes.
fn element_name(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Returns the value of the named attribute on an element node.
fn attr_value(handle: &Handle, attr: &str) -> Option<String> {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &a.name.local == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Direct element children, skipping text and comment nodes.
fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Flattens all text descendants into one string, collapsing whitespace
/// runs so markup indentation does not leak into the terminal.
fn flatten_text(handle: &Handle) -> String {
    fn gather(handle: &Handle, out: &mut String) {
        match handle.data {
            NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
            _ => {
                for child in handle.children.borrow().iter() {
                    gather(child, out);
                }
            }
        }
    }

    let mut raw = String::new();
    gather(handle, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collects every descendant `a` tag as `(flattened text, href)`, in
/// document order.
fn collect_links(handle: &Handle, out: &mut Vec<(String, String)>) {
    for child in handle.children.borrow().iter() {
        if element_name(child).as_deref() == Some("a") {
            out.push((
                flatten_text(child),
                attr_value(child, "href").unwrap_or_default(),
            ));
        }
        collect_links(child, out);
    }
}
