use crate::dispatch::Outcome;
use crate::error::TranscodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "",
    }
}

impl Response {
    fn with_type(status: u16, content_type: &str, body: String) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", content_type.to_string())],
            body,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::with_type(status, "text/plain; charset=utf-8", body.into())
    }

    pub fn html(body: String) -> Self {
        Self::with_type(200, "text/html; charset=utf-8", body)
    }

    pub fn json(body: String) -> Self {
        Self::with_type(200, "application/json", body)
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            headers: vec![("Location", location.to_string())],
            body: String::new(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Serializes as an HTTP/1.1 response. The connection is always closed
    /// after one exchange.
    pub fn to_bytes(&self, include_body: bool) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {} {}\r\n", self.status, reason(self.status));
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        head.push_str("Connection: close\r\n\r\n");

        let mut bytes = head.into_bytes();
        if include_body {
            bytes.extend_from_slice(self.body.as_bytes());
        }
        bytes
    }
}

impl From<Outcome> for Response {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Text(result) => {
                let mut response = Response::text(200, result.value);
                response.headers.push(("X-Encoding-Type", result.scheme.name().to_string()));
                response.headers.push(("X-Processing-Mode", result.mode.to_string()));
                if !result.partial_loss.is_empty() {
                    response
                        .headers
                        .push(("X-Partial-Loss", result.partial_loss.len().to_string()));
                }
                response
            }
            // the serialized Url is ASCII with no control characters
            Outcome::Redirect { target, .. } => Response::redirect(target.url().as_str()),
        }
    }
}

impl From<TranscodeError> for Response {
    fn from(err: TranscodeError) -> Self {
        Response::text(err.http_status(), format!("error: {}", err))
    }
}
