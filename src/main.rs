use clap::Parser;

use picfeed::cli::Cli;
use picfeed::config::Config;
use picfeed::domain::FeedEntries;
use picfeed::errors::PicfeedResult;
use picfeed::http::ReqwestTransport;
use picfeed::logging::init_logging;
use picfeed::services::{file_name_for, filter_entries, DownloadService, FetchService};
use picfeed::sources::{banner, build_feed_url};
use picfeed::storage::{FsImageStore, ImageStore};

fn main() {
    Config::load_env_file();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every picture was downloaded or already present
fn run(cli: &Cli) -> PicfeedResult<bool> {
    let config = Config::from_cli(cli)?;

    let feed_url = build_feed_url(&config);
    let (banner_line, rule) = banner(&feed_url);
    println!("{}", banner_line);
    println!("{}", rule);

    let transport = ReqwestTransport::new(config.timeout)?;

    let fetch_service = FetchService::new(&transport);
    let entries = filter_entries(fetch_service.fetch_entries(&feed_url, config.feed_format)?);

    if entries.is_empty() {
        println!("No pictures found in the feed.");
    }

    let store = FsImageStore::new(&config.output_dir);

    if config.dry_run {
        cmd_dry_run(&entries, &store);
        return Ok(true);
    }

    let download_service = DownloadService::new(&transport, store, config.max_redirects);
    let report = download_service.download_all(&entries, |entry| {
        println!("Downloading: {}\n\t{}\n", entry.title, entry.url);
    })?;

    println!("Downloading Complete");
    println!("{}", report.summary());
    for (entry, error) in report.failures() {
        println!("  ! {}: {}", entry.title, error);
    }

    Ok(!report.has_failures())
}

fn cmd_dry_run(entries: &FeedEntries, store: &FsImageStore) {
    let mut pending = 0;

    for entry in entries {
        match file_name_for(entry) {
            Ok(name) if store.exists(&name) => {
                println!("  [DRY RUN] {} (already saved)", entry.title);
            }
            Ok(name) => {
                pending += 1;
                println!(
                    "  [DRY RUN] {}\n\t{} -> {}",
                    entry.title,
                    entry.url,
                    store.path_for(&name).display()
                );
            }
            Err(e) => println!("  [DRY RUN] {}: {}", entry.title, e),
        }
    }

    println!("Dry run complete. Would download {} pictures.", pending);
}
