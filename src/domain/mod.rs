pub mod entry;
pub mod listing;
pub mod outcome;

pub use entry::{FeedEntries, FeedEntry};
pub use listing::{FeedFormat, SortMode};
pub use outcome::{DownloadOutcome, DownloadReport};
