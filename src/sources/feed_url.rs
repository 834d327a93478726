use crate::config::Config;
use crate::domain::{FeedFormat, SortMode};

const JSON_SUFFIX: &str = ".json";
const BANNER_PREFIX: &str = "Your Personal URL:  ";

/// Build the combined-feed URL for the configured sources.
///
/// Sources are sorted (case preserved, not deduplicated) and joined with `+`.
/// The JSON listing always names the sort mode; the HTML listing omits it for
/// the default ordering.
pub fn build_feed_url(config: &Config) -> String {
    let mut sources: Vec<&str> = config.sources.iter().map(String::as_str).collect();
    sources.sort_unstable();

    let base = config.base_url.trim_end_matches('/');
    let combined = sources.join("+");

    let mut url = match config.feed_format {
        FeedFormat::Json => format!("{}/r/{}/{}{}", base, combined, config.sort_mode, JSON_SUFFIX),
        FeedFormat::Html if config.sort_mode == SortMode::default() => {
            format!("{}/r/{}/", base, combined)
        }
        FeedFormat::Html => format!("{}/r/{}/{}/", base, combined, config.sort_mode),
    };

    if let Some(limit) = config.limit {
        url.push_str(&format!("?limit={}", limit));
    }

    url
}

/// The human-facing form of a feed URL (without the `.json` marker)
pub fn display_url(feed_url: &str) -> String {
    feed_url.replacen(JSON_SUFFIX, "", 1)
}

/// Console banner for a feed URL and the dash rule underlining it.
///
/// The rule is as long as the whole banner line.
pub fn banner(feed_url: &str) -> (String, String) {
    let line = format!("{}{}", BANNER_PREFIX, display_url(feed_url));
    let rule = "-".repeat(line.chars().count());
    (line, rule)
}
