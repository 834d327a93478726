use std::path::PathBuf;

use clap::Parser;

use crate::domain::{FeedFormat, SortMode};

#[derive(Parser, Debug)]
#[command(name = "picfeed")]
#[command(about = "Download the direct image links of one or more subreddit feeds")]
#[command(version)]
pub struct Cli {
    /// Maximum number of posts to request from the feed
    #[arg(short, long, env = "PICFEED_LIMIT", value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Folder to save pictures to [default: "Saved Reddit Pics"]
    #[arg(short, long, env = "PICFEED_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Comma-separated list of sources (subreddits) [default: Pics,WTF]
    #[arg(short, long, env = "PICFEED_SOURCES", value_delimiter = ',')]
    pub sources: Option<Vec<String>>,

    /// Feed ordering [default: hot]
    #[arg(long, env = "PICFEED_SORT", value_enum)]
    pub sort: Option<SortMode>,

    /// Base URL of the feed provider
    #[arg(long, env = "PICFEED_BASE_URL")]
    pub base_url: Option<String>,

    /// Listing format to request and parse [default: json]
    #[arg(long, env = "PICFEED_FORMAT", value_enum)]
    pub format: Option<FeedFormat>,

    /// Maximum number of requests made while following an image's redirects
    #[arg(long)]
    pub max_redirects: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Dry run - list the pictures that would be downloaded without fetching them
    #[arg(long)]
    pub dry_run: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
