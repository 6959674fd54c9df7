use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use crate::network::{Transport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>
}

#[derive(Debug, Clone)]
pub enum Reply {
    Body(Vec<u8>),
    Status(i32),
    Refused,

    /// Write part of the body, then lose the connection
    Interrupted(Vec<u8>)
}

impl Reply {
    fn into_result(self, url: &str, writer: Option<&mut dyn Write>) -> Result<Vec<u8>, TransportError> {
        match self {
            Self::Body(body) => Ok(body),

            Self::Status(code) => Err(TransportError::Status {
                url: url.to_string(),
                code
            }),

            Self::Refused => Err(refused()),

            Self::Interrupted(part) => {
                if let Some(writer) = writer {
                    writer.write_all(&part)?;
                }

                Err(refused())
            }
        }
    }
}

fn refused() -> TransportError {
    TransportError::Request(minreq::Error::IoError(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused"
    )))
}

/// Transport replying with predefined responses and recording all the requests
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: HashMap<String, Reply>,
    requests: RefCell<Vec<Request>>
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: impl Into<String>, reply: Reply) -> Self {
        self.replies.insert(url.into(), reply);

        self
    }

    pub fn json(self, url: impl Into<String>, body: &str) -> Self {
        self.reply(url, Reply::Body(body.as_bytes().to_vec()))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, url: &str) -> Vec<Request> {
        self.requests.borrow()
            .iter()
            .filter(|request| request.url == url)
            .cloned()
            .collect()
    }

    fn record(&self, method: &'static str, url: &str, query: &[(&str, &str)], body: Option<&[u8]>) -> Reply {
        self.requests.borrow_mut().push(Request {
            method,
            url: url.to_string(),
            query: query.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            body: body.map(|body| body.to_vec())
        });

        self.replies.get(url)
            .cloned()
            .unwrap_or(Reply::Status(404))
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, TransportError> {
        self.record("GET", url, query, None).into_result(url, None)
    }

    fn post_json(&self, url: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.record("POST", url, &[], Some(body)).into_result(url, None)
    }

    fn download(&self, url: &str, writer: &mut dyn Write) -> Result<u64, TransportError> {
        let body = self.record("GET", url, &[], None).into_result(url, Some(&mut *writer))?;

        writer.write_all(&body)?;

        Ok(body.len() as u64)
    }
}
