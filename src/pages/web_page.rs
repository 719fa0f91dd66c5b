//! A fetched and rendered web page.

use crate::render::styles::StyleMode;
use crate::render::{find_body, parse_html, render_body, RenderContext};
use crate::services::fetcher::FetcherTrait;

use super::{Page, PageView};

/// A web page view: fetch the URL, parse the markup, render the body.
pub struct WebPage<'a> {
    url: String,
    mode: StyleMode,
    fetcher: &'a dyn FetcherTrait,
}

impl<'a> WebPage<'a> {
    /// Creates a web page view for `url`. `text_only` disables inline
    /// styling in the rendered output.
    pub fn new(url: impl Into<String>, text_only: bool, fetcher: &'a dyn FetcherTrait) -> Self {
        let mode = if text_only {
            StyleMode::Plain
        } else {
            StyleMode::Styled
        };
        Self {
            url: url.into(),
            mode,
            fetcher,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Page for WebPage<'_> {
    /// Builds the page view.
    ///
    /// Any fetch or parse failure yields the single failure view; nothing
    /// propagates past this call.
    fn build(&self) -> PageView {
        let html = match self.fetcher.get(&self.url) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("fetch of {} failed: {}", self.url, e);
                return PageView::failure(self.mode);
            }
        };

        let dom = parse_html(&html);
        let body = match find_body(&dom) {
            Some(body) => body,
            None => {
                log::warn!("{} has no <body> element", self.url);
                return PageView::failure(self.mode);
            }
        };

        let mut ctx = RenderContext::new(self.mode);
        let content = render_body(&body, &mut ctx);
        PageView::new(content, ctx.into_links())
    }
}
