//! Buffering transport with the content-type relabel patch.
//!
//! Some orchestrator deployments answer 200 with `Content-Type: text/html`
//! while the body is JSON. The decoders key off the declared content type,
//! so every response is fully buffered here and relabeled when the body
//! parses as JSON. The decorator is built once at client construction; there
//! is no global state.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};

use crate::error::Result;

pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

/// A fully buffered HTTP response, normalized for decoding.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_json(&self) -> bool {
        self.content_type.starts_with(CONTENT_TYPE_JSON)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Decorator around the base HTTP client. Every response passes through
/// [`fix_content_type`] before any decoder sees it.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
}

impl Transport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send the request and buffer the response. Transport-level failures
    /// (no response obtained at all) surface as [`FabricError::Transport`].
    ///
    /// [`FabricError::Transport`]: crate::error::FabricError::Transport
    pub async fn execute(&self, request: RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().await?.to_vec();
        Ok(fix_content_type(RawResponse {
            status,
            content_type,
            body,
        }))
    }
}

/// Relabel a 200 `text/html` response as JSON when its body is valid JSON.
/// Everything else passes through untouched; the body is never modified.
pub(crate) fn fix_content_type(mut raw: RawResponse) -> RawResponse {
    if raw.status == StatusCode::OK
        && raw.content_type.contains("text/html")
        && serde_json::from_slice::<serde_json::Value>(&raw.body).is_ok()
    {
        raw.content_type = CONTENT_TYPE_JSON.to_string();
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, content_type: &str, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: content_type.to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn relabels_mislabeled_json() {
        let fixed = fix_content_type(raw(200, "text/html", r#"{"data":[]}"#));
        assert_eq!(fixed.content_type, "application/json");
        assert!(fixed.is_json());
    }

    #[test]
    fn relabels_html_with_charset_parameter() {
        let fixed = fix_content_type(raw(200, "text/html; charset=utf-8", r#"[1,2,3]"#));
        assert_eq!(fixed.content_type, "application/json");
    }

    #[test]
    fn leaves_actual_html_untouched() {
        let fixed = fix_content_type(raw(200, "text/html", "<html><body>502</body></html>"));
        assert_eq!(fixed.content_type, "text/html");
        assert!(!fixed.is_json());
    }

    #[test]
    fn leaves_non_200_untouched() {
        let fixed = fix_content_type(raw(404, "text/html", r#"{"data":[]}"#));
        assert_eq!(fixed.content_type, "text/html");
    }

    #[test]
    fn leaves_other_content_types_untouched() {
        let fixed = fix_content_type(raw(200, "application/json", r#"{"data":[]}"#));
        assert_eq!(fixed.content_type, "application/json");
        let fixed = fix_content_type(raw(200, "text/plain", r#"{"data":[]}"#));
        assert_eq!(fixed.content_type, "text/plain");
    }

    #[test]
    fn body_bytes_survive_the_patch() {
        let body = r#"{"data":[{"slice_id":"s1"}]}"#;
        let fixed = fix_content_type(raw(200, "text/html", body));
        assert_eq!(fixed.body, body.as_bytes());
    }
}
