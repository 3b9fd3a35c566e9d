//! Outbound requests to the library API.
//!
//! In development the UI is served separately from the API, so requests go to
//! the dev server and carry the session token as a bearer header. In
//! production the API lives under the same origin and the browser's cookie is
//! used instead, so no header is added.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::cookie::Jar;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::consts::{API_PREFIX, DEV_API_ENDPOINT, LOGIN_PATH, SESSION_COOKIE};
use crate::session::SessionContext;
use crate::utils::error_messages::LOGIN_ERROR;
use crate::utils::validation::LoginForm;

/// How the application was deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Development for debug builds, production otherwise
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Mode::Development
        } else {
            Mode::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?}, expected \"development\" or \"production\"")]
pub struct UnknownMode(String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Mode::Development),
            "prod" | "production" => Ok(Mode::Production),
            _ => Err(UnknownMode(raw.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => f.write_str("development"),
            Mode::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{message} ({status})")]
    Rejected { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    cookies: Arc<Jar>,
    mode: Mode,
    endpoint: Url,
}

impl ApiClient {
    /// Resolves the API endpoint for `mode`: the dev server in development,
    /// `/api` under `origin` in production.
    pub fn new(mode: Mode, origin: &Url) -> Result<Self, ClientError> {
        let endpoint = match mode {
            Mode::Development => Url::parse(DEV_API_ENDPOINT)?,
            Mode::Production => origin.join(API_PREFIX)?,
        };
        Self::with_endpoint(mode, endpoint)
    }

    pub fn with_endpoint(mode: Mode, endpoint: Url) -> Result<Self, ClientError> {
        let cookies = Arc::new(Jar::default());
        let http = Client::builder().cookie_provider(Arc::clone(&cookies)).build()?;
        Ok(Self {
            http,
            cookies,
            mode,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Appends `path` (starting with `/`) to the endpoint
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Prepares a request to `path`, authenticated with the session token when
    /// running in development.
    pub fn request(
        &self,
        session: &SessionContext,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if self.mode == Mode::Development {
            if let Some(token) = session.token() {
                request = request.bearer_auth(token);
            }
        }
        Ok(request)
    }

    /// Signs in with validated credentials and stores the returned token.
    ///
    /// The session is left untouched when the API refuses the credentials.
    pub async fn login(&self, session: &mut SessionContext, form: &LoginForm) -> Result<(), ClientError> {
        let response = self
            .request(session, Method::POST, LOGIN_PATH)?
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => LOGIN_ERROR.to_string(),
            };
            warn!("Login refused for {}: {}", form.username, message);
            return Err(ClientError::Rejected { status, message });
        }

        let body: TokenBody = response.json().await?;
        session.set_token(body.token);
        info!("Signed in as {}", form.username);
        Ok(())
    }

    /// Forgets the session and the session cookie stored for the API
    pub fn logout(&self, session: &mut SessionContext) {
        session.reset();
        // Storing an already expired cookie evicts the current one
        let expired = format!("{}=; Max-Age=0; Path=/", SESSION_COOKIE);
        self.cookies.add_cookie_str(&expired, &self.endpoint);
        info!("Signed out");
    }
}
