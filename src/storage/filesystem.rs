use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PicfeedResult;
use crate::storage::traits::ImageStore;

const TEMP_SUFFIX: &str = ".part";

/// Image store rooted at a local output directory.
///
/// Writes go to `<name>.part` first and are renamed into place, so a file
/// with the final name is always complete.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

impl ImageStore for FsImageStore {
    fn ensure_dir(&self) -> PicfeedResult<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    fn exists(&self, file_name: &str) -> bool {
        self.path_for(file_name).exists()
    }

    fn write(&self, file_name: &str, bytes: &[u8]) -> PicfeedResult<PathBuf> {
        let final_path = self.path_for(file_name);
        let temp = temp_path(&final_path);

        fs::write(&temp, bytes)?;
        if let Err(e) = fs::rename(&temp, &final_path) {
            fs::remove_file(&temp).ok();
            return Err(e.into());
        }

        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested_folders() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("Saved Reddit Pics").join("nested");
        let store = FsImageStore::new(&root);

        store.ensure_dir().unwrap();
        assert!(root.is_dir());

        // Second call is a no-op
        store.ensure_dir().unwrap();
    }

    #[test]
    fn test_write_then_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsImageStore::new(temp_dir.path());

        assert!(!store.exists("Cat_1.jpg"));

        let path = store.write("Cat_1.jpg", b"\x89PNG").unwrap();

        assert_eq!(path, temp_dir.path().join("Cat_1.jpg"));
        assert!(store.exists("Cat_1.jpg"));
        assert_eq!(fs::read(&path).unwrap(), b"\x89PNG");
        assert!(!temp_path(&path).exists(), "temp file should be renamed away");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsImageStore::new(temp_dir.path().join("missing"));

        assert!(store.write("a.png", b"data").is_err());
    }

    #[test]
    fn test_temp_path_appends_part() {
        assert_eq!(
            temp_path(Path::new("/tmp/pics/a.jpg")),
            PathBuf::from("/tmp/pics/a.jpg.part")
        );
    }
}
