#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub url: String,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Title to URL mapping that remembers feed order.
///
/// Inserting a title that is already present replaces its URL but keeps the
/// position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntries {
    entries: Vec<FeedEntry>,
}

impl FeedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, title: impl Into<String>, url: impl Into<String>) {
        let title = title.into();
        let url = url.into();

        match self.entries.iter_mut().find(|e| e.title == title) {
            Some(existing) => existing.url = url,
            None => self.entries.push(FeedEntry { title, url }),
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedEntry> {
        self.entries.iter()
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&FeedEntry) -> bool,
    {
        self.entries.retain(keep);
    }

    pub fn urls_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.entries.iter_mut().map(|e| &mut e.url)
    }
}

impl IntoIterator for FeedEntries {
    type Item = FeedEntry;
    type IntoIter = std::vec::IntoIter<FeedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeedEntries {
    type Item = &'a FeedEntry;
    type IntoIter = std::slice::Iter<'a, FeedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<FeedEntry> for FeedEntries {
    fn from_iter<I: IntoIterator<Item = FeedEntry>>(iter: I) -> Self {
        let mut entries = FeedEntries::new();
        for entry in iter {
            entries.insert(entry.title, entry.url);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_feed_order() {
        let mut entries = FeedEntries::new();
        entries.insert("b", "http://example.com/b.png");
        entries.insert("a", "http://example.com/a.png");

        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_title_overwrites_in_place() {
        let mut entries = FeedEntries::new();
        entries.insert("same", "http://example.com/first.png");
        entries.insert("other", "http://example.com/other.png");
        entries.insert("same", "http://example.com/second.png");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries.iter().next().unwrap().title, "same");
        assert_eq!(entries.get("same"), Some("http://example.com/second.png"));
    }

    #[test]
    fn test_urls_mut_rewrites_in_place() {
        let mut entries = FeedEntries::new();
        entries.insert("x", "http://example.com/x");

        for url in entries.urls_mut() {
            url.push_str(".jpg");
        }

        assert_eq!(entries.get("x"), Some("http://example.com/x.jpg"));
    }
}
