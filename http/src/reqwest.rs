use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    Error, GenericClient, GenericRequestBuilder, GenericResponse, Method, RequestBuilder, Response,
    StatusCode,
};

pub struct ReqwestClient(reqwest::Client);

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self(client)
    }
}

impl GenericClient for ReqwestClient {
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(ReqwestRequestBuilder(Some(
            self.0.request(method.into(), url),
        )))
    }
}

pub struct ReqwestRequestBuilder(Option<reqwest::RequestBuilder>);

impl ReqwestRequestBuilder {
    fn map(&mut self, f: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder) {
        self.0 = self.0.take().map(f);
    }
}

#[async_trait]
impl GenericRequestBuilder for ReqwestRequestBuilder {
    fn header(&mut self, name: &str, value: &str) {
        self.map(|builder| builder.header(name, value));
    }

    fn body(&mut self, body: Bytes) {
        self.map(|builder| builder.body(body));
    }

    async fn send(&mut self) -> Result<Response, Error> {
        let builder = self.0.take().ok_or(Error::Consumed)?;
        let response = builder.send().await?;
        log::debug!(
            "send: url={} status={}",
            response.url(),
            response.status()
        );

        Ok(Response::new(ReqwestResponse {
            status: response.status().into(),
            headers: headers_to_btree(response.headers()),
            inner: Some(response),
        }))
    }
}

pub struct ReqwestResponse {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    inner: Option<reqwest::Response>,
}

#[async_trait]
impl GenericResponse for ReqwestResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    async fn bytes(&mut self) -> Result<Bytes, Error> {
        let response = self.inner.take().ok_or(Error::Consumed)?;
        Ok(response.bytes().await?)
    }
}

fn headers_to_btree(value: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    for (key, value) in value {
        if let Ok(value) = value.to_str() {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    headers
}
