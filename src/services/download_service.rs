use url::Url;

use crate::domain::{DownloadOutcome, DownloadReport, FeedEntries, FeedEntry};
use crate::errors::{PicfeedError, PicfeedResult};
use crate::http::{HttpResponse, HttpTransport};
use crate::services::naming::file_name_for;
use crate::storage::ImageStore;

pub struct DownloadService<T: HttpTransport, S: ImageStore> {
    transport: T,
    store: S,
    max_redirects: usize,
}

impl<T: HttpTransport, S: ImageStore> DownloadService<T, S> {
    pub fn new(transport: T, store: S, max_redirects: usize) -> Self {
        Self {
            transport,
            store,
            max_redirects,
        }
    }

    /// GET `url`, following redirects for at most `max_redirects` requests
    pub fn fetch(&self, url: &str) -> PicfeedResult<HttpResponse> {
        let mut current = url.to_string();

        for _ in 0..self.max_redirects {
            let response = self.transport.get(&current)?;

            if response.status.is_success() {
                return Ok(response);
            }

            match response.location.as_deref() {
                Some(location) if response.is_redirect() => {
                    let next = resolve_location(&current, location)?;
                    tracing::debug!(from = %current, to = %next, "following redirect");
                    current = next;
                }
                _ => {
                    return Err(PicfeedError::HttpStatus {
                        status: response.status.as_u16(),
                        url: current,
                    });
                }
            }
        }

        Err(PicfeedError::TooManyRedirects {
            limit: self.max_redirects,
            url: url.to_string(),
        })
    }

    /// Download one entry unless its file is already on disk
    pub fn download(&self, entry: &FeedEntry) -> PicfeedResult<DownloadOutcome> {
        let file_name = file_name_for(entry)?;

        if self.store.exists(&file_name) {
            tracing::debug!(file = %file_name, "already downloaded, skipping");
            return Ok(DownloadOutcome::Skipped(self.store.path_for(&file_name)));
        }

        let response = self.fetch(&entry.url)?;
        let path = self.store.write(&file_name, &response.body)?;

        Ok(DownloadOutcome::Downloaded(path))
    }

    /// Download every entry in feed order.
    ///
    /// The output folder is created once up front; a failure there aborts the
    /// run. Failures of individual entries are recorded and the loop goes on.
    /// `on_entry` is called before each entry is attempted.
    pub fn download_all<F>(&self, entries: &FeedEntries, mut on_entry: F) -> PicfeedResult<DownloadReport>
    where
        F: FnMut(&FeedEntry),
    {
        self.store.ensure_dir()?;

        let mut report = DownloadReport::new();
        for entry in entries {
            on_entry(entry);

            let outcome = match self.download(entry) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(title = %entry.title, url = %entry.url, error = %e, "download failed");
                    DownloadOutcome::Failed(e)
                }
            };
            report.push(entry.clone(), outcome);
        }

        Ok(report)
    }
}

fn resolve_location(current: &str, location: &str) -> PicfeedResult<String> {
    let base = Url::parse(current).map_err(|e| PicfeedError::InvalidUrl(e.to_string()))?;
    base.join(location)
        .map(String::from)
        .map_err(|e| PicfeedError::InvalidUrl(format!("{}: {}", location, e)))
}
