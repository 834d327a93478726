use crate::domain::{FeedEntries, FeedFormat};
use crate::errors::{PicfeedError, PicfeedResult};
use crate::http::HttpTransport;
use crate::sources::SourceRegistry;

pub struct FetchService<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> FetchService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the raw listing with a single request.
    ///
    /// Redirects and error statuses are not treated specially here: their
    /// bodies are handed on and rejected by the parser.
    pub fn fetch_listing(&self, feed_url: &str) -> PicfeedResult<String> {
        let response = self.transport.get(feed_url)?;

        if !response.status.is_success() {
            tracing::warn!(
                url = feed_url,
                status = response.status.as_u16(),
                "feed request did not succeed"
            );
        }

        String::from_utf8(response.body)
            .map_err(|e| PicfeedError::FeedParse(format!("feed body is not UTF-8: {}", e)))
    }

    /// Fetch and parse the listing into title -> URL entries
    pub fn fetch_entries(&self, feed_url: &str, format: FeedFormat) -> PicfeedResult<FeedEntries> {
        let body = self.fetch_listing(feed_url)?;
        let registry = SourceRegistry::new(feed_url)?;
        let entries = registry.parse(format, &body)?;

        tracing::debug!(url = feed_url, entries = entries.len(), "parsed feed");

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::traits::MockHttpTransport;
    use crate::http::HttpResponse;
    use reqwest::StatusCode;

    const FEED_URL: &str = "http://www.reddit.com/r/Pics+WTF/hot.json";

    const LISTING: &str = r#"{"data": {"children": [
        {"data": {"title": "Cat!! #1", "url": "http://imgur.com/abc123"}},
        {"data": {"title": "Doc", "url": "http://example.com/file.php"}}
    ]}}"#;

    #[test]
    fn test_fetch_entries_parses_json_listing() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|url| {
                assert_eq!(url.to_string(), FEED_URL);
                Ok(HttpResponse::ok(LISTING))
            });

        let service = FetchService::new(transport);
        let entries = service.fetch_entries(FEED_URL, FeedFormat::Json).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("Doc"), Some("http://example.com/file.php"));
    }

    #[test]
    fn test_redirect_response_is_not_followed() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::redirect("https://www.reddit.com/r/Pics+WTF/hot.json")));

        let service = FetchService::new(transport);
        let result = service.fetch_entries(FEED_URL, FeedFormat::Json);

        assert!(matches!(result, Err(PicfeedError::FeedParse(_))));
    }

    #[test]
    fn test_error_status_body_fails_to_parse() {
        let mut transport = MockHttpTransport::new();
        transport.expect_get().times(1).returning(|_| {
            let mut response = HttpResponse::status(StatusCode::TOO_MANY_REQUESTS);
            response.body = b"<html>Too Many Requests</html>".to_vec();
            Ok(response)
        });

        let service = FetchService::new(transport);
        let result = service.fetch_entries(FEED_URL, FeedFormat::Json);

        assert!(matches!(result, Err(PicfeedError::FeedParse(_))));
    }

    #[test]
    fn test_invalid_utf8_body_is_a_parse_error() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::ok(vec![b'{', 0xff, 0xfe, b'}'])));

        let service = FetchService::new(transport);
        let result = service.fetch_entries(FEED_URL, FeedFormat::Json);

        assert!(matches!(result, Err(PicfeedError::FeedParse(_))));
    }

    #[test]
    fn test_transport_error_is_fatal() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|url| Err(PicfeedError::InvalidUrl(url.to_string())));

        let service = FetchService::new(transport);
        assert!(service.fetch_listing(FEED_URL).is_err());
    }
}
