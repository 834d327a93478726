use std::path::PathBuf;

use crate::errors::PicfeedResult;

#[cfg_attr(test, mockall::automock)]
pub trait ImageStore {
    /// Create the destination folder (and its parents) if missing
    fn ensure_dir(&self) -> PicfeedResult<()>;
    fn path_for(&self, file_name: &str) -> PathBuf;
    fn exists(&self, file_name: &str) -> bool;
    /// Store `bytes` under `file_name`, returning the final path
    fn write(&self, file_name: &str, bytes: &[u8]) -> PicfeedResult<PathBuf>;
}
