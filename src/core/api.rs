//! HTTP client for the `/alunos` REST backend
//!
//! `StudentApi` is the seam the editor controller talks to. The browser
//! implementation uses `gloo-net`; tests substitute an in-memory fake.

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::student::{CreatedStudent, StudentId, StudentPayload, StudentResponse};

/// Base path of the students resource
pub const STUDENTS_PATH: &str = "/alunos";

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status { status: u16, errors: Vec<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build from a non-2xx response body shaped like `{"errors": [...]}`
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.errors)
            .unwrap_or_default();
        ApiError::Status { status, errors }
    }

    /// HTTP status, or 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            _ => 0,
        }
    }

    /// Messages reported by the backend
    pub fn server_errors(&self) -> &[String] {
        match self {
            ApiError::Status { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == 400
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == 401
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Backend operations used by the student editor
#[allow(async_fn_in_trait)]
pub trait StudentApi {
    /// `GET /alunos/{id}`
    async fn get(&self, id: &StudentId) -> Result<StudentResponse, ApiError>;

    /// `POST /alunos/`
    async fn create(&self, payload: &StudentPayload) -> Result<CreatedStudent, ApiError>;

    /// `PUT /alunos/{id}`
    async fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<StudentResponse, ApiError>;
}

/// `StudentApi` over the browser fetch API
#[derive(Debug, Clone, Default)]
pub struct HttpStudentApi {
    /// Origin prefix; empty for same-origin requests
    base_url: String,
    token: Option<String>,
}

impl HttpStudentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, STUDENTS_PATH, path)
    }

    /// URL of one record; the id is escaped so it stays a single segment
    fn record_url(&self, id: &StudentId) -> String {
        self.url(&format!("/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/json");
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response_body(status, &body))
        }
    }
}

impl StudentApi for HttpStudentApi {
    async fn get(&self, id: &StudentId) -> Result<StudentResponse, ApiError> {
        let response = self
            .authorize(Request::get(&self.record_url(id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read(response).await
    }

    async fn create(&self, payload: &StudentPayload) -> Result<CreatedStudent, ApiError> {
        let response = self
            .authorize(Request::post(&self.url("/")))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read(response).await
    }

    async fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<StudentResponse, ApiError> {
        let response = self
            .authorize(Request::put(&self.record_url(id)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_parsed() {
        let err = ApiError::from_response_body(400, r#"{"errors": ["Email already in use"]}"#);
        assert_eq!(err.status(), 400);
        assert!(err.is_bad_request());
        assert_eq!(err.server_errors(), ["Email already in use".to_string()]);
    }

    #[test]
    fn test_non_json_error_body_has_no_messages() {
        let err = ApiError::from_response_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), 502);
        assert!(err.server_errors().is_empty());

        let err = ApiError::from_response_body(401, r#"{"message": "expired"}"#);
        assert!(err.is_unauthorized());
        assert!(err.server_errors().is_empty());
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.status(), 0);
        assert!(err.server_errors().is_empty());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_urls_are_joined_under_students_path() {
        let api = HttpStudentApi::new("http://localhost:3001/");
        assert_eq!(api.url("/12"), "http://localhost:3001/alunos/12");

        let api = HttpStudentApi::default();
        assert_eq!(api.url("/"), "/alunos/");
    }

    #[test]
    fn test_record_url_escapes_the_id() {
        let api = HttpStudentApi::default();
        assert_eq!(api.record_url(&StudentId::new("12")), "/alunos/12");
        assert_eq!(api.record_url(&StudentId::new("abc-1")), "/alunos/abc-1");
        assert_eq!(
            api.record_url(&StudentId::new("../admin?x=1")),
            "/alunos/..%2Fadmin%3Fx=1"
        );
        assert_eq!(api.record_url(&StudentId::new("a b#c")), "/alunos/a%20b%23c");
    }
}
