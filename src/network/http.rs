use std::io::Write;
use std::time::Duration;

use minreq::{Request, Proxy};

use crate::consts::DOWNLOAD_CHUNK_SIZE;

use super::{Transport, TransportError};

#[inline]
fn is_success(code: i32) -> bool {
    (200..=299).contains(&code)
}

/// `minreq` based transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpTransport {
    timeout: Option<Duration>,
    proxy: Option<String>
}

impl HttpTransport {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            ..self
        }
    }

    /// Route all the requests through given proxy.
    /// 
    /// Return `Err` if proxy address can't be parsed
    pub fn with_proxy(self, proxy: impl Into<String>) -> Result<Self, minreq::Error> {
        let proxy = proxy.into();

        // Validate the address now so requests can't fail on it later
        Proxy::new(proxy.as_str())?;

        Ok(Self {
            proxy: Some(proxy),
            ..self
        })
    }

    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[inline]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    fn prepare(&self, mut request: Request) -> Result<Request, TransportError> {
        if let Some(timeout) = self.timeout {
            // minreq counts timeout in whole seconds
            request = request.with_timeout(timeout.as_secs().max(1));
        }

        if let Some(proxy) = &self.proxy {
            request = request.with_proxy(Proxy::new(proxy.as_str())?);
        }

        Ok(request)
    }

    fn send(&self, url: &str, request: Request) -> Result<Vec<u8>, TransportError> {
        let response = self.prepare(request)?.send()?;

        if !is_success(response.status_code) {
            return Err(TransportError::Status {
                url: url.to_string(),
                code: response.status_code
            });
        }

        Ok(response.into_bytes())
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(level = "trace", skip(self))]
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, TransportError> {
        let mut request = minreq::get(url);

        for (key, value) in query {
            request = request.with_param(*key, *value);
        }

        self.send(url, request)
    }

    #[tracing::instrument(level = "trace", skip(self, body), fields(body_len = body.len()))]
    fn post_json(&self, url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let request = minreq::post(url)
            .with_header("Content-Type", "application/json")
            .with_body(body.to_vec());

        self.send(url, request)
    }

    #[tracing::instrument(level = "trace", skip(self, writer))]
    fn download(&self, url: &str, writer: &mut dyn Write) -> Result<u64, TransportError> {
        let response = self.prepare(minreq::get(url))?.send_lazy()?;

        if !is_success(response.status_code) {
            return Err(TransportError::Status {
                url: url.to_string(),
                code: response.status_code
            });
        }

        let mut buffer = Vec::with_capacity(DOWNLOAD_CHUNK_SIZE);
        let mut total = 0;

        for byte in response {
            let (byte, _) = byte?;

            buffer.push(byte);

            if buffer.len() == DOWNLOAD_CHUNK_SIZE {
                writer.write_all(&buffer)?;

                total += buffer.len() as u64;

                buffer.clear();
            }
        }

        writer.write_all(&buffer)?;
        writer.flush()?;

        total += buffer.len() as u64;

        tracing::trace!("Downloaded {total} bytes from {url}");

        Ok(total)
    }
}
