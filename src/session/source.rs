use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Url, cookie::Jar};
use secrecy::ExposeSecret;

use crate::{config::ClientConfig, error::TransportError, session::SessionData};

type Result<T> = std::result::Result<T, TransportError>;

/// Where the session store gets its data from.
#[async_trait]
pub trait SessionInfoSource: Send + Sync + 'static {
    /// Fetches the current session info, using whatever credentials the
    /// source carries.
    async fn fetch_session_info(&self) -> Result<SessionData>;
}

/// Reads session info from the server's `GET /api/session/info` endpoint.
///
/// Cookies set by the server are kept in the client's jar and sent back on
/// later requests.
#[derive(Debug, Clone)]
pub struct HttpSessionSource {
    client: Client,
    url: Url,
}

impl HttpSessionSource {
    pub fn new(config: &ClientConfig) -> color_eyre::Result<Self> {
        let url = Url::parse(&config.session_info_url())?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.cookie {
            jar.add_cookie_str(cookie.expose_secret(), &url);
        }

        let mut builder = Client::builder().cookie_provider(jar);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SessionInfoSource for HttpSessionSource {
    async fn fetch_session_info(&self) -> Result<SessionData> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(TransportError::Connect)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        // A connection lost mid-body is a transport failure, not a bad body.
        let bytes = response.bytes().await.map_err(TransportError::Connect)?;
        let body = serde_json::from_slice::<serde_json::Value>(&bytes).map_err(|e| {
            TransportError::Decode {
                status,
                message: e.to_string(),
            }
        })?;

        SessionData::from_value(body).ok_or_else(|| TransportError::Decode {
            status,
            message: "expected a JSON object".to_string(),
        })
    }
}
