//! Platform-abstracted HTTP GET with Send-safe futures.
//!
//! On native the request runs on reqwest directly. On WASM `reqwest::Response` holds JS
//! values and is not `Send`, so the request is spawned on the JS thread with
//! `wasm_bindgen_futures::spawn_local` and the result comes back through a `flume` channel.
//! Either way commands can return `Pin<Box<dyn Future<Output = ()> + Send>>`.

use std::collections::HashMap;

use url::Url;

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A pending GET request.
#[derive(Debug, Clone)]
pub struct GetRequest {
    url: Url,
    headers: HashMap<String, String>,
}

impl GetRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            let Self { url, headers } = self;

            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(url, headers).await;
                // Receiver gone means the command was cancelled.
                let _ignored: Result<(), _> = tx.send_async(result).await;
            });

            rx.recv_async()
                .await
                .map_err(|_disconnected| HttpError::new("Request cancelled"))?
        }
    }
}

fn client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        static CLIENT: std::sync::OnceLock<reqwest::Client> = std::sync::OnceLock::new();
        CLIENT.get_or_init(reqwest::Client::new).clone()
    }

    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

async fn execute(url: Url, headers: HashMap<String, String>) -> HttpResult<Response> {
    let mut request = client().get(url);
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn json_body() {
        let value: serde_json::Value = response(200, br#"{"results": []}"#)
            .json()
            .expect("valid json");
        assert_eq!(value["results"], serde_json::json!([]));
    }

    #[test]
    fn request_keeps_headers() {
        let url = Url::parse("https://example.com/api/?page=0").expect("valid url");
        let request = GetRequest::new(url).header("accept", "application/json");
        assert_eq!(
            request.headers.get("accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn http_error_display() {
        assert_eq!(HttpError::new("boom").to_string(), "HTTP error: boom");
    }
}
