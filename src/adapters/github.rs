use crate::config::Credentials;
use crate::domain::model::{FollowStatus, UserRecord};
use crate::domain::ports::SocialGraph;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_login, validate_url};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use std::collections::HashSet;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = concat!("follow-sync/", env!("CARGO_PKG_VERSION"));

/// REST client for the authenticated user's follower graph.
///
/// The token is baked into the default headers at construction, so every
/// request made through this client carries the same read-only credential.
pub struct GithubClient {
    api_base: String,
    client: Client,
}

impl GithubClient {
    pub fn new(api_base: &str, credentials: &Credentials) -> Result<Self> {
        validate_url("api_base", api_base)?;

        let mut auth = HeaderValue::from_str(&format!("token {}", credentials.token()))
            .map_err(|_| SyncError::config("GH_TOKEN contains characters not valid in a header"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetches `url` and every page reachable through `rel="next"` links,
    /// concatenated in request order. Any non-success page aborts the fetch.
    ///
    /// A `next` link pointing at a page already fetched ends the walk.
    pub async fn paginate(&self, url: &str) -> Result<Vec<UserRecord>> {
        let mut results = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(Url::parse(url)?.to_string());
        let mut page = 0usize;

        while let Some(current) = next.take() {
            if !visited.insert(current.clone()) {
                tracing::warn!("Pagination link loops back to {}; stopping", current);
                break;
            }
            page += 1;
            tracing::debug!("Fetching page {}: {}", page, current);

            let response = self.client.get(&current).send().await?;
            tracing::debug!("Page {} response status: {}", page, response.status());

            if !response.status().is_success() {
                return Err(api_error(Method::GET, &current, response).await);
            }

            // 相對連結以目前頁面網址為基準解析
            next = match response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link)
            {
                Some(link) => Some(Url::parse(&current)?.join(&link)?.to_string()),
                None => None,
            };

            let body = response.text().await?;
            let records: Vec<UserRecord> = serde_json::from_str(&body)?;
            tracing::debug!("Page {} contained {} users", page, records.len());
            results.extend(records);
        }

        Ok(results)
    }

    pub async fn followers(&self) -> Result<Vec<UserRecord>> {
        self.paginate(&format!("{}/user/followers", self.api_base))
            .await
    }

    pub async fn following(&self) -> Result<Vec<UserRecord>> {
        self.paginate(&format!("{}/user/following", self.api_base))
            .await
    }

    /// `PUT /user/following/{login}`. 304 means the user was already followed.
    pub async fn follow(&self, login: &str) -> Result<FollowStatus> {
        validate_login(login)?;
        let url = self.following_url(login);

        // GitHub 要求此端點帶 Content-Length: 0
        let response = self.client.put(&url).body("").send().await?;
        tracing::debug!("PUT {} -> {}", url, response.status());

        match response.status() {
            StatusCode::NOT_MODIFIED => Ok(FollowStatus::AlreadyFollowing),
            status if status.is_success() => Ok(FollowStatus::Followed),
            _ => Err(api_error(Method::PUT, &url, response).await),
        }
    }

    /// `DELETE /user/following/{login}`, answered with 204 on success.
    pub async fn unfollow(&self, login: &str) -> Result<()> {
        validate_login(login)?;
        let url = self.following_url(login);

        let response = self.client.delete(&url).send().await?;
        tracing::debug!("DELETE {} -> {}", url, response.status());

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(Method::DELETE, &url, response).await)
        }
    }

    fn following_url(&self, login: &str) -> String {
        format!("{}/user/following/{}", self.api_base, login)
    }
}

#[async_trait]
impl SocialGraph for GithubClient {
    async fn followers(&self) -> Result<Vec<UserRecord>> {
        GithubClient::followers(self).await
    }

    async fn following(&self) -> Result<Vec<UserRecord>> {
        GithubClient::following(self).await
    }

    async fn follow(&self, login: &str) -> Result<FollowStatus> {
        GithubClient::follow(self, login).await
    }

    async fn unfollow(&self, login: &str) -> Result<()> {
        GithubClient::unfollow(self, login).await
    }
}

async fn api_error(method: Method, url: &str, response: Response) -> SyncError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    SyncError::ApiError {
        method: method.to_string(),
        url: url.to_string(),
        status,
        message: error_message(&body),
    }
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Extracts the `rel="next"` target from an RFC 8288 `Link` header value.
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut segments = link.split(';');
        let target = segments
            .next()?
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')?;

        let is_next = segments.any(|param| {
            let Some((key, value)) = param.split_once('=') else {
                return false;
            };
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        });

        is_next.then(|| target.to_string())
    })
}
