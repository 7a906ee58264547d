// src/core/net.rs
//
// Blocking HTTP GET with query-string parameters.
// One call per user action; no retries, default client timeout.

use crate::error::QueryError;

/// Ordered query-string parameters.
pub type Params = Vec<(&'static str, String)>;

/// Seam between the lookups and the network.
pub trait Transport {
    /// GET `url` with `params` and return the body of a 2xx response.
    fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<String, QueryError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<String, QueryError> {
        (**self).get(url, params)
    }
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: reqwest::blocking::Client::new() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<String, QueryError> {
        // Errors are stripped of their URL: the query string carries the API key.
        let resp = self
            .client
            .get(url)
            .query(params)
            .send()
            .map_err(|e| QueryError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QueryError::Status { status: status.as_u16() });
        }

        resp.text()
            .map_err(|e| QueryError::Transport(format!("reading body: {}", e.without_url())))
    }
}
