//! HTTP client for the LeadNav scraper API.
//!
//! [`SalesNavClient`] mirrors the dashboard's API surface: cookie
//! save/get/delete plus the scraper start/pause controls. Every request
//! carries the caller's bearer token; the server resolves the user from
//! the token, so no user id ever appears in a request body.

use leadnav_models::{ApiResponse, CookieData, CookieSaved};
use serde::de::DeserializeOwned;

use crate::error::SdkError;

/// Base path of the Sales Navigator scraper API.
const BASE_PATH: &str = "/v1/scraper/salesnav";

/// An authenticated LeadNav API client.
#[derive(Debug, Clone)]
pub struct SalesNavClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl SalesNavClient {
    /// Create a client for the service at `base_url`, authenticating
    /// with `token` (sent as `Authorization: Bearer …`).
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, BASE_PATH, endpoint)
    }

    // ------------------------------------------------------------------
    // Cookie store
    // ------------------------------------------------------------------

    /// Save or replace the LinkedIn cookie for the authenticated user.
    ///
    /// Returns the saved record's owner and timestamp; the server never
    /// echoes the cookie value.
    pub async fn save_cookie(&self, cookie: &str) -> Result<CookieSaved, SdkError> {
        let res = self
            .http
            .post(self.url("/cookie"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "cookie": cookie }))
            .send()
            .await?;

        let envelope = into_envelope::<CookieSaved>(res).await?;
        envelope
            .data
            .ok_or(SdkError::MalformedResponse("missing `data` in save response"))
    }

    /// Fetch the stored cookie, or `None` if the user has never saved
    /// one (or deleted it) — the server's 404 is an expected outcome,
    /// not an error.
    pub async fn get_cookie(&self) -> Result<Option<CookieData>, SdkError> {
        let res = self
            .http
            .get(self.url("/cookie"))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if res.status().as_u16() == 404 {
            return Ok(None);
        }

        let envelope = into_envelope::<CookieData>(res).await?;
        envelope
            .data
            .map(Some)
            .ok_or(SdkError::MalformedResponse("missing `data` in get response"))
    }

    /// Delete the stored cookie. Returns whether a record existed;
    /// deleting twice in a row yields `true` then `false`.
    pub async fn delete_cookie(&self) -> Result<bool, SdkError> {
        let res = self
            .http
            .delete(self.url("/cookie"))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if res.status().as_u16() == 404 {
            return Ok(false);
        }

        into_envelope::<()>(res).await?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Scraper controls (placeholders server-side)
    // ------------------------------------------------------------------

    /// Ask the server to start scraping `url` into `list_name`.
    ///
    /// Returns the server's status message.
    pub async fn start_scrape(&self, url: &str, list_name: &str) -> Result<String, SdkError> {
        let res = self
            .http
            .post(self.url("/start"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "url": url, "listName": list_name }))
            .send()
            .await?;

        let envelope = into_envelope::<()>(res).await?;
        Ok(envelope.message.unwrap_or_default())
    }

    /// Ask the server to pause the running scrape.
    pub async fn pause_scrape(&self) -> Result<String, SdkError> {
        let res = self
            .http
            .post(self.url("/pause"))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let envelope = into_envelope::<()>(res).await?;
        Ok(envelope.message.unwrap_or_default())
    }
}

/// Decode the response envelope, turning non-2xx statuses into
/// [`SdkError::Api`] carrying the server's message.
async fn into_envelope<T: DeserializeOwned>(
    res: reqwest::Response,
) -> Result<ApiResponse<T>, SdkError> {
    let status = res.status();
    let envelope: ApiResponse<T> = res.json().await?;

    if !status.is_success() {
        return Err(SdkError::Api {
            status: status.as_u16(),
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        });
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_path_and_endpoint() {
        let client = SalesNavClient::new("http://localhost:3001", "t");
        assert_eq!(
            client.url("/cookie"),
            "http://localhost:3001/v1/scraper/salesnav/cookie"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_dropped() {
        let client = SalesNavClient::new("https://api.leadnav.io/", "t");
        assert_eq!(
            client.url("/start"),
            "https://api.leadnav.io/v1/scraper/salesnav/start"
        );
    }
}
