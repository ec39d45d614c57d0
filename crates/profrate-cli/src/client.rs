use profrate_models::{LoginRequest, RegisterRequest};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Status and JSON body of a server response. Bodies that are not JSON are
/// kept as `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// The server's `error` field, or "Unknown error".
    pub fn error_message(&self) -> String {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string()
    }
}

/// Sends a numeric argument as a JSON number when it parses as one and as a
/// string otherwise, leaving validation to the server.
fn numeric_or_string(value: &str) -> Value {
    value
        .trim()
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(value))
}

/// Blocking client for the rating API. Holds one base URL and at most one
/// token.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().build().map_err(ClientError::Build)?;
        let mut client = Self {
            http,
            base_url: String::new(),
            token: None,
        };
        client.set_base_url(base_url);
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        }
    }

    fn send(&self, url: String, request: RequestBuilder) -> Result<ApiResponse, ClientError> {
        debug!(url = %url, "Sending request");
        let response = request.send().map_err(|source| ClientError::Http {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let body = response.json::<Value>().unwrap_or(Value::Null);
        debug!(url = %url, status = status.as_u16(), "Received response");
        Ok(ApiResponse { status, body })
    }

    pub fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url("/register/");
        let body = RegisterRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            email: Some(email.to_string()),
        };
        self.send(url.clone(), self.http.post(&url).json(&body))
    }

    /// Logs in and keeps the returned token on success.
    pub fn login(&mut self, username: &str, password: &str) -> Result<ApiResponse, ClientError> {
        let url = self.url("/login/");
        let body = LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        };
        let response = self.send(url.clone(), self.http.post(&url).json(&body))?;

        if response.status == StatusCode::OK {
            self.token = response
                .body
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_string);
        }

        Ok(response)
    }

    /// Logs out and forgets the token on success.
    pub fn logout(&mut self) -> Result<ApiResponse, ClientError> {
        let url = self.url("/logout/");
        let response = self.send(url.clone(), self.authorized(self.http.post(&url)))?;

        if response.status == StatusCode::OK {
            self.token = None;
        }

        Ok(response)
    }

    pub fn list(&self) -> Result<ApiResponse, ClientError> {
        let url = self.url("/list/");
        self.send(url.clone(), self.authorized(self.http.get(&url)))
    }

    pub fn view(&self) -> Result<ApiResponse, ClientError> {
        let url = self.url("/view/");
        self.send(url.clone(), self.http.get(&url))
    }

    pub fn average(&self, professor: &str, module: &str) -> Result<ApiResponse, ClientError> {
        let url = self.url(&format!("/average/{}/{}/", professor, module));
        self.send(url.clone(), self.http.get(&url))
    }

    pub fn rate(
        &self,
        professor: &str,
        module: &str,
        year: &str,
        semester: &str,
        rating: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url("/rate/");
        let body = json!({
            "professor_id": professor,
            "module_code": module,
            "year": numeric_or_string(year),
            "semester": numeric_or_string(semester),
            "rating": numeric_or_string(rating),
        });
        self.send(url.clone(), self.authorized(self.http.post(&url).json(&body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let mut client = ApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/list/"), "http://127.0.0.1:8000/list/");

        client.set_base_url("http://example.test");
        assert_eq!(client.url("/view/"), "http://example.test/view/");
    }

    #[test]
    fn test_new_client_is_logged_out() {
        let client = ApiClient::new("http://127.0.0.1:8000").unwrap();
        assert!(!client.is_logged_in());
        assert!(client.token().is_none());
    }

    #[test]
    fn test_numeric_or_string() {
        assert_eq!(numeric_or_string("2024"), json!(2024));
        assert_eq!(numeric_or_string("four"), json!("four"));
        assert_eq!(numeric_or_string("4.5"), json!("4.5"));
    }

    #[test]
    fn test_error_message() {
        let response = ApiResponse {
            status: StatusCode::NOT_FOUND,
            body: json!({ "error": "Module instance not found." }),
        };
        assert_eq!(response.error_message(), "Module instance not found.");

        let response = ApiResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Value::Null,
        };
        assert_eq!(response.error_message(), "Unknown error");
    }
}
