use crate::domain::FeedEntry;
use crate::errors::{PicfeedError, PicfeedResult};

const UNTITLED: &str = "untitled";

/// Keep ASCII letters, digits, spaces and underscores, then turn each space
/// into `_`.
///
/// Every other byte is dropped; runs of spaces are not collapsed. Keeping `_`
/// makes the result stable under a second pass.
pub fn sanitize(title: &str) -> String {
    title
        .bytes()
        .filter(|b| *b == b' ' || *b == b'_' || b.is_ascii_alphanumeric())
        .map(|b| if b == b' ' { '_' } else { b as char })
        .collect()
}

/// Lower-cased text after the last `.` of the URL
pub fn extension_of(url: &str) -> Option<String> {
    url.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty() && !ext.contains('/'))
}

/// `<sanitized title>.<extension>` for an entry.
///
/// Titles with nothing left after sanitizing are saved as `untitled`.
pub fn file_name_for(entry: &FeedEntry) -> PicfeedResult<String> {
    let ext = extension_of(&entry.url).ok_or_else(|| {
        PicfeedError::InvalidUrl(format!("no file extension in {}", entry.url))
    })?;

    let stem = sanitize(&entry.title);
    let stem = if stem.is_empty() { UNTITLED.to_string() } else { stem };

    Ok(format!("{}.{}", stem, ext))
}
