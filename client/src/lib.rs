#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::{io::Write, string::FromUtf8Error};

use igrest_http::Client;

/// Where the instagrapi-rest service listens.
pub const BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Async(#[from] igrest_async::Error),
    #[error(transparent)]
    Http(#[from] igrest_http::Error),
    #[error("Version response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

#[must_use]
pub fn version_url(base_url: &str) -> String {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base_url}/version")
}

pub struct VersionFetcher {
    client: Client,
    base_url: String,
}

impl VersionFetcher {
    /// # Errors
    ///
    /// * If the HTTP client fails to initialize
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_client(Client::new()?, BASE_URL))
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        version_url(&self.base_url)
    }

    /// Sends a single GET to the version endpoint.
    ///
    /// Resolves to `None` when no response body could be obtained. The
    /// status code is not checked: any body that arrives is returned.
    ///
    /// # Errors
    ///
    /// * If the response body is not valid UTF-8
    pub async fn fetch(&self) -> Result<Option<String>, Error> {
        let url = self.url();
        log::debug!("fetch: GET {url}");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("fetch: request failed: {e:?}");
                return Ok(None);
            }
        };

        log::debug!("fetch: status={}", response.status());

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("fetch: failed to read body: {e:?}");
                return Ok(None);
            }
        };

        Ok(Some(String::from_utf8(body.to_vec())?))
    }
}

/// # Errors
///
/// * If writing to `out` fails
pub fn write_version(out: &mut impl Write, version: &str) -> std::io::Result<()> {
    writeln!(out, "\nVersion: {version}")?;
    out.flush()
}

/// Fetches the version and writes it to `out`. Nothing is written when the
/// service could not be reached.
///
/// # Errors
///
/// * If the response body is not valid UTF-8
/// * If writing to `out` fails
pub async fn run(fetcher: &VersionFetcher, out: &mut impl Write) -> Result<(), Error> {
    if let Some(version) = fetcher.fetch().await? {
        write_version(out, &version)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use igrest_http::{Method, StatusCode, simulator::SimulatorClient};
    use pretty_assertions::assert_eq;

    use super::*;

    fn fetcher(simulator: &SimulatorClient) -> VersionFetcher {
        VersionFetcher::with_client(Client::from_generic(simulator.clone()), BASE_URL)
    }

    #[test]
    fn version_url_appends_path() {
        assert_eq!(version_url(BASE_URL), "http://localhost:8000/version");
        assert_eq!(
            version_url("http://localhost:8000/"),
            "http://localhost:8000/version"
        );
    }

    #[test]
    fn write_version_prefixes_blank_line() {
        let mut out = Vec::new();

        write_version(&mut out, "1.0.0").unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\nVersion: 1.0.0\n");
    }

    #[test_log::test(tokio::test)]
    async fn prints_version_body() {
        let simulator = SimulatorClient::new();
        simulator.respond(Method::Get, version_url(BASE_URL), StatusCode::OK, "1.0.0");
        let mut out = Vec::new();

        run(&fetcher(&simulator), &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\nVersion: 1.0.0\n");
    }

    #[test_log::test(tokio::test)]
    async fn prints_body_regardless_of_status() {
        let simulator = SimulatorClient::new();
        simulator.respond(
            Method::Get,
            version_url(BASE_URL),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{\"detail\":\"boom\"}",
        );
        let mut out = Vec::new();

        run(&fetcher(&simulator), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nVersion: {\"detail\":\"boom\"}\n"
        );
    }

    #[test_log::test(tokio::test)]
    async fn unreachable_service_prints_nothing() {
        let simulator = SimulatorClient::new();
        let mut out = Vec::new();

        run(&fetcher(&simulator), &mut out).await.unwrap();

        assert!(out.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn invalid_utf8_is_fatal() {
        let simulator = SimulatorClient::new();
        simulator.respond(
            Method::Get,
            version_url(BASE_URL),
            StatusCode::OK,
            vec![b'1', 0xc3, 0x28],
        );
        let mut out = Vec::new();

        let result = run(&fetcher(&simulator), &mut out).await;

        assert!(matches!(result, Err(Error::InvalidUtf8(_))));
        assert!(out.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn issues_exactly_one_get_to_the_version_endpoint() {
        let simulator = SimulatorClient::new();
        simulator.respond(Method::Get, version_url(BASE_URL), StatusCode::OK, "1.0.0");

        run(&fetcher(&simulator), &mut Vec::new()).await.unwrap();

        let requests = simulator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "http://localhost:8000/version");
        assert!(requests[0].headers.is_empty());
        assert_eq!(requests[0].body, None);
    }
}
