//! Response envelope and binary download stream

use crate::error::{Error, Result};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::header::HeaderMap;
use reqwest::Response;

/// Result of one API call together with the raw status and headers
#[derive(Debug)]
pub struct DetailedResponse<T> {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded result; `None` when the body was empty
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    pub fn new(status_code: u16, headers: HeaderMap, result: Option<T>) -> Self {
        Self {
            status_code,
            headers,
            result,
        }
    }

    /// Borrow the decoded result
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Take the decoded result
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Get a response header as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Unbuffered binary response body
///
/// Owned by the caller; dropping it releases the connection. The configured
/// timeout bounds only connection setup for downloads, so reading the body is
/// limited by the caller's [`Context`](super::Context) or not at all.
pub struct DownloadStream {
    response: Response,
}

impl DownloadStream {
    pub(crate) fn new(response: Response) -> Self {
        Self { response }
    }

    /// Length announced by the server, if any
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Read the next chunk; `None` at end of body
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        Ok(self.response.chunk().await?)
    }

    /// Read the remaining body into memory
    pub async fn bytes(self) -> Result<Bytes> {
        Ok(self.response.bytes().await?)
    }

    /// Convert into a stream of chunks
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes>> + Send {
        self.response.bytes_stream().map(|chunk| chunk.map_err(Error::Http))
    }
}

impl std::fmt::Debug for DownloadStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadStream")
            .field("content_length", &self.content_length())
            .finish_non_exhaustive()
    }
}
