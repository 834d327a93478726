pub mod traits;
pub mod client;

pub use traits::{HttpResponse, HttpTransport};
pub use client::ReqwestTransport;
