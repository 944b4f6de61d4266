use crate::errors::TransportError;
use crate::models::HttpResponse;
use reqwest::Client;
use std::future::Future;
use url::Url;

/// The single network seam of the loader. Implementations read the whole body.
pub trait Transport {
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Production transport. No timeout is configured, so reqwest's default applies.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
