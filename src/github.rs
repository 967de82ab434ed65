use crate::contributor::Contributor;
use crate::error::{FetchError, FetchOutcome};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Clone)]
pub struct GithubClient {
    base: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    /// Unauthenticated REST client against `api_base` (no trailing slash).
    pub fn new(api_base: impl Into<String>) -> Self {
        let base = api_base.into().trim_end_matches('/').to_string();
        Self {
            base: Arc::new(base),
            http: Arc::new(Client::new()),
        }
    }

    fn contributors_url(&self, organization: &str, repo: &str) -> String {
        format!("{}/repos/{organization}/{repo}/contributors", self.base)
    }

    /// Fetch the contributor listing and keep the first `limit` entries in
    /// upstream order.
    pub async fn contributors(&self, organization: &str, repo: &str, limit: i64) -> FetchOutcome {
        if organization.is_empty() || repo.is_empty() {
            return Err(FetchError::InvalidRepository {
                organization: organization.to_string(),
                repo: repo.to_string(),
            });
        }

        let keep = usize::try_from(limit).unwrap_or(0);
        if keep == 0 {
            debug!(limit, "non-positive limit, skipping request");
            return Ok(Vec::new());
        }

        let url = self.contributors_url(organization, repo);
        debug!(%url, "fetching contributors");

        // GitHub rejects requests without a User-Agent.
        let resp = self
            .http
            .get(&url)
            .header("User-Agent", "rpg-contributors")
            .send()
            .await
            .map_err(|cause| FetchError::Network { cause })?;

        let status = resp.status();
        // Empty repositories answer 204 with no body.
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|cause| FetchError::Network { cause })?;
        let mut contributors: Vec<Contributor> =
            serde_json::from_slice(&body).map_err(|cause| FetchError::Parse { cause })?;

        debug!(upstream = contributors.len(), keep, "contributors received");
        contributors.truncate(keep);

        Ok(contributors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn listing(n: usize) -> String {
        let items: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r#"{{"login":"user{i}","id":{i},"avatar_url":"https://avatars.example/{i}","contributions":{}}}"#,
                    100 - i
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[tokio::test]
    async fn truncates_to_limit_in_upstream_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/haxtheweb/webcomponents/contributors")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(listing(5))
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let got = client
            .contributors("haxtheweb", "webcomponents", 3)
            .await
            .unwrap();

        mock.assert_async().await;
        let logins: Vec<&str> = got.iter().map(|c| c.login.as_str()).collect();
        assert_eq!(logins, ["user0", "user1", "user2"]);
    }

    #[tokio::test]
    async fn limit_larger_than_listing_returns_everything() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contributors")
            .with_status(200)
            .with_body(listing(2))
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let got = client.contributors("o", "r", 10).await.unwrap();
        assert_eq!(got.len(), 2);
    }

    #[tokio::test]
    async fn non_positive_limit_skips_the_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        assert!(client.contributors("o", "r", 0).await.unwrap().is_empty());
        assert!(client.contributors("o", "r", -4).await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_coordinates_are_rejected() {
        let client = GithubClient::new("http://127.0.0.1:9");
        let err = client.contributors("", "r", 10).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidRepository { .. }));
    }

    #[tokio::test]
    async fn no_content_is_an_empty_list() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/empty/contributors")
            .with_status(204)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        assert!(client.contributors("o", "empty", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/missing/contributors")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let err = client.contributors("o", "missing", 10).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contributors")
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let err = client.contributors("o", "r", 10).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let client = GithubClient::new("https://api.github.com/");
        assert_eq!(
            client.contributors_url("a", "b"),
            "https://api.github.com/repos/a/b/contributors"
        );
    }
}
