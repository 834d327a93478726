pub mod traits;
pub mod feed_url;
pub mod listing_json;
pub mod listing_html;
pub mod registry;

pub use traits::FeedParser;
pub use feed_url::{banner, build_feed_url, display_url};
pub use listing_json::ListingJsonParser;
pub use listing_html::ListingHtmlParser;
pub use registry::SourceRegistry;
