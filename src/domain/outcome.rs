use std::path::PathBuf;

use crate::domain::FeedEntry;
use crate::errors::PicfeedError;

#[derive(Debug)]
pub enum DownloadOutcome {
    Downloaded(PathBuf),
    /// Target file was already on disk, nothing was requested
    Skipped(PathBuf),
    Failed(PicfeedError),
}

/// Per-entry outcomes of a download run, in feed order.
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub results: Vec<(FeedEntry, DownloadOutcome)>,
}

impl DownloadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FeedEntry, outcome: DownloadOutcome) {
        self.results.push((entry, outcome));
    }

    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, DownloadOutcome::Downloaded(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, DownloadOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DownloadOutcome::Failed(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&FeedEntry, &PicfeedError)> {
        self.results.iter().filter_map(|(entry, outcome)| match outcome {
            DownloadOutcome::Failed(e) => Some((entry, e)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} downloaded, {} skipped, {} failed",
            self.downloaded(),
            self.skipped(),
            self.failed()
        )
    }

    fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&DownloadOutcome) -> bool,
    {
        self.results.iter().filter(|(_, o)| pred(o)).count()
    }
}
