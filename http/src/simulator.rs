//! In-process backend with canned responses.
//!
//! Every request sent through a [`SimulatorClient`] is recorded, whether or
//! not a response was registered for it. Requests without a registered
//! response fail the same way an unreachable host would.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    Error, GenericClient, GenericRequestBuilder, GenericResponse, Method, RequestBuilder, Response,
    StatusCode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Bytes>,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    body: Bytes,
}

#[derive(Default)]
struct State {
    responses: HashMap<(Method, String), CannedResponse>,
    requests: Vec<RecordedRequest>,
}

#[derive(Default, Clone)]
pub struct SimulatorClient {
    state: Arc<Mutex<State>>,
}

impl SimulatorClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response returned for `method` requests to `url`,
    /// replacing any earlier one.
    ///
    /// # Panics
    ///
    /// * If the state `Mutex` is poisoned
    pub fn respond(
        &self,
        method: Method,
        url: impl Into<String>,
        status: StatusCode,
        body: impl Into<Bytes>,
    ) {
        self.state.lock().unwrap().responses.insert(
            (method, url.into()),
            CannedResponse {
                status,
                headers: BTreeMap::new(),
                body: body.into(),
            },
        );
    }

    /// # Panics
    ///
    /// * If the state `Mutex` is poisoned
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl GenericClient for SimulatorClient {
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(SimulatorRequestBuilder {
            state: self.state.clone(),
            request: Some(RecordedRequest {
                method,
                url: url.to_string(),
                headers: BTreeMap::new(),
                body: None,
            }),
        })
    }
}

pub struct SimulatorRequestBuilder {
    state: Arc<Mutex<State>>,
    request: Option<RecordedRequest>,
}

#[async_trait]
impl GenericRequestBuilder for SimulatorRequestBuilder {
    fn header(&mut self, name: &str, value: &str) {
        if let Some(request) = &mut self.request {
            request
                .headers
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    fn body(&mut self, body: Bytes) {
        if let Some(request) = &mut self.request {
            request.body = Some(body);
        }
    }

    async fn send(&mut self) -> Result<Response, Error> {
        let request = self.request.take().ok_or(Error::Consumed)?;
        let key = (request.method, request.url.clone());

        let canned = {
            let mut state = self
                .state
                .lock()
                .map_err(|e| Error::Simulator(e.to_string()))?;
            state.requests.push(request);
            state.responses.get(&key).cloned()
        };

        let Some(canned) = canned else {
            log::debug!("send: no response registered for {} {}", key.0, key.1);
            return Err(Error::Simulator(format!(
                "Connection refused (url={})",
                key.1
            )));
        };

        log::debug!("send: {} {} -> {}", key.0, key.1, canned.status);

        Ok(Response::new(SimulatorResponse {
            status: canned.status,
            headers: canned.headers,
            body: Some(canned.body),
        }))
    }
}

pub struct SimulatorResponse {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    body: Option<Bytes>,
}

#[async_trait]
impl GenericResponse for SimulatorResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    async fn bytes(&mut self) -> Result<Bytes, Error> {
        self.body.take().ok_or(Error::Consumed)
    }
}
