use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;

/// Content type sent with every platform request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Platform account used by every simulated user.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Encodes `username:password` as an HTTP Basic authorization value
    pub fn basic_auth_header(&self) -> String {
        let token = BASE64.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Headers built once when a simulated user starts and reused for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionHeaders {
    authorization: String,
    content_type: &'static str,
}

impl SessionHeaders {
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }
}

impl fmt::Debug for SessionHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHeaders")
            .field("authorization", &"Basic ********")
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Per-user session state: the account and its cached headers.
#[derive(Debug, Clone)]
pub struct Session {
    credentials: Credentials,
    headers: SessionHeaders,
}

impl Session {
    /// Opens a session, encoding the authorization header exactly once
    pub fn open(credentials: Credentials) -> Self {
        let headers = SessionHeaders {
            authorization: credentials.basic_auth_header(),
            content_type: JSON_CONTENT_TYPE,
        };
        Self {
            credentials,
            headers,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn headers(&self) -> &SessionHeaders {
        &self.headers
    }
}
