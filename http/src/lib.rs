#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;

pub use igrest_http_models::{Method, StatusCode};

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "simulator")]
pub mod simulator;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "reqwest")]
    #[error(transparent)]
    Reqwest(#[from] ::reqwest::Error),
    #[error(transparent)]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("Simulator: {0}")]
    Simulator(String),
    #[error("Consumed")]
    Consumed,
}

pub trait GenericClient: Send + Sync {
    fn request(&self, method: Method, url: &str) -> RequestBuilder;
}

#[async_trait]
pub trait GenericRequestBuilder: Send + Sync {
    fn header(&mut self, name: &str, value: &str);

    fn body(&mut self, body: Bytes);

    async fn send(&mut self) -> Result<Response, Error>;
}

#[async_trait]
pub trait GenericResponse: Send + Sync {
    fn status(&self) -> StatusCode;

    fn headers(&self) -> &BTreeMap<String, String>;

    async fn bytes(&mut self) -> Result<Bytes, Error>;

    /// Strict UTF-8 decoding of the body. Backends that decode lossily must
    /// not override this.
    async fn text(&mut self) -> Result<String, Error> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

pub struct Client {
    client: Box<dyn GenericClient>,
}

macro_rules! impl_http_methods {
    ($($method:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[must_use]
                pub fn [< $method:lower >](&self, url: &str) -> RequestBuilder {
                    self.request(Method::$method, url)
                }
            )*
        }
    };
}

impl Client {
    /// Builds a client on the default backend. Proxy settings from the
    /// environment are ignored.
    ///
    /// # Errors
    ///
    /// * If the backend client fails to initialize
    ///
    /// # Panics
    ///
    /// * If all HTTP backend features are disabled
    pub fn new() -> Result<Self, Error> {
        if cfg!(feature = "reqwest") {
            #[cfg(feature = "reqwest")]
            {
                let client = ::reqwest::Client::builder().no_proxy().build()?;
                Ok(Self::from_generic(reqwest::ReqwestClient::new(client)))
            }
            #[cfg(not(feature = "reqwest"))]
            unreachable!()
        } else {
            panic!("No HTTP backend feature enabled");
        }
    }

    #[must_use]
    pub fn from_generic(client: impl GenericClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    #[must_use]
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::trace!("request: method={method} url={url}");
        self.client.request(method, url)
    }

    impl_http_methods!(Get, Post, Put, Patch, Delete, Head);
}

pub struct RequestBuilder {
    pub(crate) builder: Box<dyn GenericRequestBuilder>,
}

impl RequestBuilder {
    #[must_use]
    pub fn new(builder: impl GenericRequestBuilder + 'static) -> Self {
        Self {
            builder: Box::new(builder),
        }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder.header(name, value);
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.builder.body(body.into());
        self
    }

    /// # Errors
    ///
    /// * If the backend fails to deliver the request or receive the response
    ///   head
    pub async fn send(mut self) -> Result<Response, Error> {
        self.builder.send().await
    }
}

pub struct Response {
    pub(crate) inner: Box<dyn GenericResponse>,
}

impl Response {
    #[must_use]
    pub fn new(inner: impl GenericResponse + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        self.inner.headers()
    }

    /// # Errors
    ///
    /// * If the body fails to be read to completion
    pub async fn bytes(mut self) -> Result<Bytes, Error> {
        self.inner.bytes().await
    }

    /// # Errors
    ///
    /// * If the body fails to be read to completion
    /// * If the body is not valid UTF-8
    pub async fn text(mut self) -> Result<String, Error> {
        self.inner.text().await
    }
}
