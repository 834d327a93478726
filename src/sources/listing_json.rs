use serde::Deserialize;

use crate::domain::{FeedEntries, FeedFormat};
use crate::errors::{PicfeedError, PicfeedResult};
use crate::sources::traits::FeedParser;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Parser for the structured `.json` listing
#[derive(Debug, Default)]
pub struct ListingJsonParser;

impl ListingJsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeedParser for ListingJsonParser {
    fn format(&self) -> FeedFormat {
        FeedFormat::Json
    }

    fn parse(&self, body: &str) -> PicfeedResult<FeedEntries> {
        let listing: Listing =
            serde_json::from_str(body).map_err(|e| PicfeedError::FeedParse(e.to_string()))?;

        let mut entries = FeedEntries::new();
        for child in listing.data.children {
            match (child.data.title, child.data.url) {
                (Some(title), Some(url)) => entries.insert(title, url),
                (title, _) => {
                    tracing::debug!(?title, "skipping post without title or link");
                }
            }
        }

        Ok(entries)
    }
}
