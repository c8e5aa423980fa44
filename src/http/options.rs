//! Per-call request options
//!
//! A [`RequestOptions`] value describes one API call: method, path template,
//! parameters, headers and body. It is built fresh for every call and never
//! mutated by the pipeline, so it can be replayed on each retry attempt.

use crate::error::{Error, Result};
use crate::types::{Method, ResponseKind, StringMap};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Body of an outgoing request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON document
    Json(Value),
    /// multipart/form-data fields
    Multipart(Vec<MultipartField>),
}

/// One field of a multipart body
#[derive(Debug, Clone)]
pub enum MultipartField {
    /// Plain text field
    Text { name: String, value: String },
    /// File upload
    File {
        name: String,
        file_name: Option<String>,
        content_type: Option<String>,
        data: Bytes,
    },
}

impl MultipartField {
    /// Create a text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a file field
    pub fn file(
        name: impl Into<String>,
        file_name: Option<String>,
        content_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::File {
            name: name.into(),
            file_name,
            content_type,
            data: data.into(),
        }
    }
}

/// Parameters of one API call
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Path template with `{name}` placeholders, e.g. `/v1/{guid}/users`
    pub path: String,
    /// Values for the path placeholders
    pub path_params: Vec<(String, String)>,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: StringMap,
    /// Request body
    pub body: Option<RequestBody>,
    /// Expected response body
    pub response_kind: ResponseKind,
}

impl RequestOptions {
    /// Create options for `method` on the path template `path`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Bind a path placeholder
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present
    #[must_use]
    pub fn query_opt<T: ToString>(self, key: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a header only when a value is present
    #[must_use]
    pub fn header_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.header(key, value),
            None => self,
        }
    }

    /// Merge a caller-supplied header map
    #[must_use]
    pub fn headers(mut self, headers: &StringMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Serialize `body` as the JSON body
    pub fn json_body<T: Serialize>(self, body: &T) -> Result<Self> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    /// Set multipart body
    #[must_use]
    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = Some(RequestBody::Multipart(fields));
        self
    }

    /// Expect a binary response body
    #[must_use]
    pub fn binary_response(mut self) -> Self {
        self.response_kind = ResponseKind::Binary;
        self
    }

    /// Substitute the path placeholders
    ///
    /// Fails with [`Error::MissingParameter`] when a placeholder has no value
    /// or an empty one.
    pub fn resolve_path(&self) -> Result<Vec<String>> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let Some(name) = segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                else {
                    return Ok(segment.to_string());
                };
                self.path_params
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value)
                    .filter(|value| !value.is_empty())
                    .cloned()
                    .ok_or_else(|| Error::missing_parameter(name))
            })
            .collect()
    }

    /// Resolve the full request URL against `service_url`
    ///
    /// Path parameters are validated first, so a missing parameter is reported
    /// even when the service URL is absent too.
    pub fn build_url(&self, service_url: Option<&str>) -> Result<Url> {
        let segments = self.resolve_path()?;

        let service_url = service_url
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingServiceUrl)?;
        let mut url = Url::parse(service_url)?;

        url.path_segments_mut()
            .map_err(|()| Error::config(format!("service URL '{service_url}' cannot be a base")))?
            .pop_if_empty()
            .extend(segments.iter().map(String::as_str));

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }

    /// Build a multipart form for one attempt
    pub(crate) fn build_form(fields: &[MultipartField]) -> Result<Form> {
        let mut form = Form::new();
        for field in fields {
            form = match field {
                MultipartField::Text { name, value } => form.text(name.clone(), value.clone()),
                MultipartField::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    let mut part = Part::bytes(data.to_vec());
                    if let Some(file_name) = file_name {
                        part = part.file_name(file_name.clone());
                    }
                    if let Some(content_type) = content_type {
                        part = part.mime_str(content_type)?;
                    }
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}
