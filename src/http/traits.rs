use reqwest::StatusCode;

use crate::errors::PicfeedResult;

/// A single response, as received: redirects are not followed.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::OK,
            location: None,
            body: body.into(),
        }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FOUND,
            location: Some(location.into()),
            body: Vec::new(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            location: None,
            body: Vec::new(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport {
    /// Issue one GET request without following redirects
    fn get(&self, url: &str) -> PicfeedResult<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str) -> PicfeedResult<HttpResponse> {
        (**self).get(url)
    }
}
