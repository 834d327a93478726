pub mod fetch_service;
pub mod link_filter;
pub mod naming;
pub mod download_service;

pub use fetch_service::FetchService;
pub use link_filter::{filter_entries, is_picture, normalize_url, rewrite_host};
pub use naming::{file_name_for, sanitize};
pub use download_service::DownloadService;
