//! HTTP client for the management API.
//!
//! Used by the `linkctl` binary. Redirects are never followed so lookups can
//! report what the server answered for a short id.

pub mod config;
pub mod error;

use std::collections::BTreeMap;

use reqwest::{StatusCode, header};
use serde_json::json;
use url::Url;

use crate::utils::key_codec::encode_key;
pub use error::{ClientError, Result};

/// Outcome of looking up a short id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found {
        status: u16,
        location: Option<String>,
    },
    NotFound,
}

/// Client for a running kvlink server.
#[derive(Clone)]
pub struct LinkClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl LinkClient {
    /// Creates a client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the server (e.g., "http://localhost:3000")
    /// * `token` - Value sent verbatim in the `Authorization` header
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        Url::parse(base_url)?;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            client,
        })
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(ClientError::MissingToken)
    }

    /// Lists every link as `short_id -> target_url`.
    pub async fn list(&self) -> Result<BTreeMap<String, Option<String>>> {
        let url = format!("{}/api/list", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, self.token()?)
            .send()
            .await?;

        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// Looks up a short id through the public redirect endpoint.
    ///
    /// The id is sent as-is; redirect lookups are not percent-decoded by the
    /// server.
    pub async fn lookup(&self, short_id: &str) -> Result<Lookup> {
        if short_id.is_empty() {
            return Err(ClientError::MissingArgument("short ID"));
        }

        let url = format!("{}/{}", self.base_url, short_id);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, token);
        }
        let response = request.send().await?;

        match response.status() {
            StatusCode::FOUND | StatusCode::OK => Ok(Lookup::Found {
                status: response.status().as_u16(),
                location: response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
            }),
            StatusCode::NOT_FOUND => Ok(Lookup::NotFound),
            status => Err(ClientError::ServerError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }),
        }
    }

    /// Creates a link; the server rejects ids that already exist.
    pub async fn create(&self, short_id: &str, target_url: &str) -> Result<()> {
        if short_id.is_empty() || target_url.is_empty() {
            return Err(ClientError::MissingArgument("short ID or target URL"));
        }

        let url = format!("{}/api/create", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.token()?)
            .json(&json!({ "short_id": short_id, "target_url": target_url }))
            .send()
            .await?;

        expect_status(response, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Deletes a link. Namespaced ids are percent-encoded into one segment.
    pub async fn delete(&self, short_id: &str) -> Result<()> {
        if short_id.is_empty() {
            return Err(ClientError::MissingArgument("short ID"));
        }

        let url = format!("{}/api/delete/{}", self.base_url, encode_key(short_id));
        let response = self
            .client
            .delete(&url)
            .header(header::AUTHORIZATION, self.token()?)
            .send()
            .await?;

        expect_status(response, StatusCode::OK).await?;
        Ok(())
    }
}

async fn expect_status(
    response: reqwest::Response,
    expected: StatusCode,
) -> Result<reqwest::Response> {
    if response.status() == expected {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(ClientError::ServerError { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = LinkClient::new("http://localhost:3000/", None).unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(matches!(
            LinkClient::new("not a url", None),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_commands_require_token() {
        let client = LinkClient::new("http://localhost:3000", Some(String::new())).unwrap();

        assert!(matches!(client.list().await, Err(ClientError::MissingToken)));
        assert!(matches!(
            client.create("a", "https://example.com").await,
            Err(ClientError::MissingToken)
        ));
        assert!(matches!(
            client.delete("a").await,
            Err(ClientError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_empty_arguments_are_rejected_before_sending() {
        let client = LinkClient::new("http://localhost:3000", Some("t".to_string())).unwrap();

        assert!(matches!(
            client.lookup("").await,
            Err(ClientError::MissingArgument(_))
        ));
        assert!(matches!(
            client.create("a", "").await,
            Err(ClientError::MissingArgument(_))
        ));
    }
}
