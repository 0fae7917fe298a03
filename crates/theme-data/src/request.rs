//! Outbound GET request builder.

use std::collections::HashMap;

/// A GET request against the theme API.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new GET request builder.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add multiple headers to the request.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header that will be sent.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Send the request through the Spin outbound HTTP host.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<crate::Response, crate::FetchError> {
        use crate::FetchError;
        use spin_sdk::http::{Method, Request};

        let mut request = Request::builder();
        request.method(Method::Get).uri(&self.url);
        for (key, value) in &self.headers {
            request.header(key.as_str(), value.as_str());
        }

        let response: spin_sdk::http::Response = spin_sdk::http::send(request.build())
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(crate::Response::new(status, headers, response.into_body()))
    }

    /// Outbound HTTP needs a Spin host; native builds always fail here.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<crate::Response, crate::FetchError> {
        Err(crate::FetchError::RequestError(format!(
            "outbound HTTP to {} requires the Spin runtime",
            self.url
        )))
    }
}
