use scraper::{Html, Selector};
use url::Url;

use crate::domain::{FeedEntries, FeedFormat};
use crate::errors::{PicfeedError, PicfeedResult};
use crate::sources::traits::FeedParser;

const LISTING_SELECTOR: &str = "#siteTable";
const POST_LINK_SELECTOR: &str = "#siteTable a.title";

/// Parser for the rendered listing page.
///
/// Relative post links are resolved against the page URL.
pub struct ListingHtmlParser {
    page_url: Url,
}

impl ListingHtmlParser {
    pub fn new(page_url: &str) -> PicfeedResult<Self> {
        let page_url =
            Url::parse(page_url).map_err(|e| PicfeedError::InvalidUrl(e.to_string()))?;
        Ok(Self { page_url })
    }

    fn selector(css: &str) -> PicfeedResult<Selector> {
        Selector::parse(css).map_err(|e| PicfeedError::FeedParse(e.to_string()))
    }

    fn resolve(&self, href: &str) -> Option<String> {
        self.page_url.join(href).ok().map(String::from)
    }
}

impl FeedParser for ListingHtmlParser {
    fn format(&self) -> FeedFormat {
        FeedFormat::Html
    }

    fn parse(&self, body: &str) -> PicfeedResult<FeedEntries> {
        let document = Html::parse_document(body);

        let listing = Self::selector(LISTING_SELECTOR)?;
        if document.select(&listing).next().is_none() {
            return Err(PicfeedError::FeedParse(
                "page has no post listing".to_string(),
            ));
        }

        let links = Self::selector(POST_LINK_SELECTOR)?;
        let mut entries = FeedEntries::new();

        for anchor in document.select(&links) {
            let title = anchor
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");

            match anchor.value().attr("href").and_then(|h| self.resolve(h)) {
                Some(url) if !title.is_empty() => entries.insert(title, url),
                _ => tracing::debug!(%title, "skipping anchor without usable link"),
            }
        }

        Ok(entries)
    }
}
