use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::FeedEntries;

/// Hosts whose page URLs have a direct-content twin, with the subdomain
/// that serves the raw file.
const DIRECT_CONTENT_HOSTS: &[(&str, &str)] = &[("imgur.com", "i.")];

const DEFAULT_EXTENSION: &str = ".jpg";

static HOST_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    DIRECT_CONTENT_HOSTS
        .iter()
        .map(|(domain, prefix)| {
            let pattern = format!(
                r"(?i)^(https?://)(www\.)?{}(?:[/?#]|$)",
                regex::escape(domain)
            );
            (Regex::new(&pattern).expect("host pattern is valid"), *prefix)
        })
        .collect()
});

static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.+\.(bmp|gif|jpeg|jpg|png|tiff)$").expect("extension pattern is valid")
});

static SCRIPT_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(php|aspx?|jsp|cgi)(?:$|/)").expect("script pattern is valid")
});

/// Point a known image-host page URL at its direct-content subdomain.
///
/// Returns `None` when no rule applies; already-prefixed URLs never match.
pub fn rewrite_host(url: &str) -> Option<String> {
    HOST_RULES.iter().find_map(|(pattern, prefix)| {
        let caps = pattern.captures(url)?;
        let scheme = caps.get(1)?;
        // Drop a leading "www." along with the insertion
        let domain_start = caps.get(2).map_or(scheme.end(), |m| m.end());
        Some(format!("{}{}{}", scheme.as_str(), prefix, &url[domain_start..]))
    })
}

pub fn has_image_extension(url: &str) -> bool {
    IMAGE_EXTENSION.is_match(url)
}

/// True if the URL names a static image rather than a page or a script
/// that happens to serve one.
pub fn is_picture(url: &str) -> bool {
    if !has_image_extension(url) {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => !SCRIPT_EXTENSION.is_match(parsed.path()),
        Err(_) => false,
    }
}

/// Host rewrite followed by extension inference for rewritten URLs.
pub fn normalize_url(url: &str) -> String {
    match rewrite_host(url) {
        Some(mut rewritten) => {
            if !has_image_extension(&rewritten) {
                rewritten.push_str(DEFAULT_EXTENSION);
            }
            rewritten
        }
        None => url.to_string(),
    }
}

/// Normalize every URL and drop the entries that are not direct images.
pub fn filter_entries(mut entries: FeedEntries) -> FeedEntries {
    for url in entries.urls_mut() {
        let normalized = normalize_url(url);
        if normalized != *url {
            tracing::debug!(from = %url, to = %normalized, "rewrote link");
            *url = normalized;
        }
    }

    entries.retain(|entry| {
        let keep = is_picture(&entry.url);
        if !keep {
            tracing::debug!(title = %entry.title, url = %entry.url, "not a picture, dropping");
        }
        keep
    });

    entries
}
