pub mod traits;
pub mod filesystem;

pub use traits::ImageStore;
pub use filesystem::FsImageStore;
