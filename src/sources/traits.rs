use crate::domain::{FeedEntries, FeedFormat};
use crate::errors::PicfeedResult;

pub trait FeedParser {
    /// Listing format this parser understands
    fn format(&self) -> FeedFormat;

    /// Turn a raw listing body into the ordered title -> URL mapping
    fn parse(&self, body: &str) -> PicfeedResult<FeedEntries>;
}
