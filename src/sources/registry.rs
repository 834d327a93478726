use crate::domain::{FeedEntries, FeedFormat};
use crate::errors::{PicfeedError, PicfeedResult};
use crate::sources::listing_html::ListingHtmlParser;
use crate::sources::listing_json::ListingJsonParser;
use crate::sources::traits::FeedParser;

/// All listing parsers available for one feed URL
pub struct SourceRegistry {
    parsers: Vec<Box<dyn FeedParser>>,
}

impl SourceRegistry {
    pub fn new(feed_url: &str) -> PicfeedResult<Self> {
        let mut registry = Self {
            parsers: Vec::new(),
        };

        registry.register(Box::new(ListingJsonParser::new()));
        registry.register(Box::new(ListingHtmlParser::new(feed_url)?));

        Ok(registry)
    }

    pub fn register(&mut self, parser: Box<dyn FeedParser>) {
        self.parsers.push(parser);
    }

    /// Find the parser for a listing format
    pub fn find_parser(&self, format: FeedFormat) -> Option<&dyn FeedParser> {
        self.parsers
            .iter()
            .find(|p| p.format() == format)
            .map(|p| p.as_ref())
    }

    /// Parse a listing body with the parser registered for `format`
    pub fn parse(&self, format: FeedFormat, body: &str) -> PicfeedResult<FeedEntries> {
        let parser = self.find_parser(format).ok_or_else(|| {
            PicfeedError::Config(format!("no parser for {} listings", format))
        })?;

        parser.parse(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_URL: &str = "http://www.reddit.com/r/Pics/";

    #[test]
    fn test_each_format_has_a_parser() {
        let registry = SourceRegistry::new(FEED_URL).unwrap();

        for format in [FeedFormat::Json, FeedFormat::Html] {
            let parser = registry.find_parser(format).unwrap();
            assert_eq!(parser.format(), format);
        }
    }

    #[test]
    fn test_parse_dispatches_on_format() {
        let registry = SourceRegistry::new(FEED_URL).unwrap();
        let body = r#"{"data": {"children": [{"data": {"title": "A", "url": "http://example.com/a.png"}}]}}"#;

        let entries = registry.parse(FeedFormat::Json, body).unwrap();
        assert_eq!(entries.len(), 1);

        // The same body is not a rendered listing page
        assert!(matches!(
            registry.parse(FeedFormat::Html, body),
            Err(PicfeedError::FeedParse(_))
        ));
    }

    #[test]
    fn test_invalid_feed_url_rejected() {
        assert!(matches!(
            SourceRegistry::new("not a url"),
            Err(PicfeedError::InvalidUrl(_))
        ));
    }
}
