use std::io::Write;

pub mod http;

pub use http::HttpTransport;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to perform request: {0}")]
    Request(#[from] minreq::Error),

    /// Server answered with a non-2xx status code
    #[error("Request to {url} failed with status {code}")]
    Status {
        url: String,
        code: i32
    },

    /// Failed to push downloaded bytes to the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error)
}

/// Blocking HTTP client used by the API client and the downloader
pub trait Transport {
    /// Send GET request with given query params and return response body.
    /// 
    /// Params are URL-encoded and appended in the given order
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, TransportError>;

    /// Send POST request with `Content-Type: application/json` header
    /// and return response body
    fn post_json(&self, url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError>;

    /// Stream GET response body into the writer.
    /// 
    /// Return amount of written bytes
    fn download(&self, url: &str, writer: &mut dyn Write) -> Result<u64, TransportError>;
}
