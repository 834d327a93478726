use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;

use crate::errors::PicfeedResult;
use crate::http::traits::{HttpResponse, HttpTransport};

const USER_AGENT: &str = concat!("picfeed/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> PicfeedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> PicfeedResult<HttpResponse> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "response");

        Ok(HttpResponse {
            status,
            location,
            body,
        })
    }
}
