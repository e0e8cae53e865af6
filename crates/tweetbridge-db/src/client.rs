//! HTTP client for the Supabase REST and auth APIs.
//!
//! One client instance per API key: the anon-key client carries requests on
//! behalf of the logged-in bot (with a Bearer override), the service-key
//! client performs admin and approval-queue operations.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tweetbridge_core::AppError;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// A logged-in session as returned by the identity provider.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    /// Provider-reported lifetime in seconds, when present.
    pub expires_in: Option<i64>,
    pub user_id: String,
}

#[derive(Debug, serde::Deserialize)]
struct PasswordGrantResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: GrantUser,
}

#[derive(Debug, serde::Deserialize)]
struct GrantUser {
    id: String,
}

/// Minimal Supabase client: PostgREST table operations plus the two auth
/// calls the broker needs (password login, admin user delete).
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client for Supabase")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Attach the platform key and the acting identity. When no Bearer
    /// override is given the API key doubles as the token, as the platform
    /// expects for service-role access.
    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
        bearer: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let token = bearer.unwrap_or(&self.api_key);
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", token))
    }

    /// Insert one row, returning the inserted representation.
    pub async fn insert<T: Serialize + ?Sized>(
        &self,
        table: &str,
        row: &T,
        bearer: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let request = self
            .client
            .post(self.rest_url(table))
            .header("Prefer", "return=representation")
            .json(row);

        let response = self
            .apply_auth(request, bearer)
            .send()
            .await
            .map_err(transport_error)?;

        read_rows(response).await
    }

    /// Select `columns` from rows where `filter_column` equals `value`.
    pub async fn select_eq(
        &self,
        table: &str,
        columns: &str,
        filter_column: &str,
        value: &str,
        bearer: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let filter = format!("eq.{}", value);
        let request = self
            .client
            .get(self.rest_url(table))
            .query(&[("select", columns), (filter_column, filter.as_str())]);

        let response = self
            .apply_auth(request, bearer)
            .send()
            .await
            .map_err(transport_error)?;

        read_rows(response).await
    }

    /// Patch rows where `filter_column` equals `value`, returning the updated
    /// representations (empty when nothing matched).
    pub async fn update_eq(
        &self,
        table: &str,
        patch: &Value,
        filter_column: &str,
        value: &str,
        bearer: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let filter = format!("eq.{}", value);
        let request = self
            .client
            .patch(self.rest_url(table))
            .query(&[(filter_column, filter.as_str())])
            .header("Prefer", "return=representation")
            .json(patch);

        let response = self
            .apply_auth(request, bearer)
            .send()
            .await
            .map_err(transport_error)?;

        read_rows(response).await
    }

    /// Password-grant login against the identity provider.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        let url = format!("{}/auth/v1/token", self.base_url);
        let response = self
            .client
            .post(url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AppError::Unauthorized(format!(
                "Bot login failed with status {}: {}",
                status, body
            )));
        }

        let grant: PasswordGrantResponse = serde_json::from_str(&body).map_err(|_| {
            AppError::Unauthorized("Bot login failed: provider returned no session".to_string())
        })?;

        Ok(Session {
            access_token: grant.access_token,
            expires_in: grant.expires_in,
            user_id: grant.user.id,
        })
    }

    /// Delete a user account via the provider's admin API. Requires this
    /// client to hold the service-role key.
    pub async fn admin_delete_user(&self, user_id: &str) -> Result<(), AppError> {
        let url = format!("{}/auth/v1/admin/users/{}", self.base_url, user_id);
        let response = self
            .apply_auth(self.client.delete(url), None)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Database(format!(
                "User deletion failed with status {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::Database(format!("Supabase request failed: {}", err))
}

/// Surface non-2xx responses as errors carrying the body; parse the rest as
/// rows. PostgREST returns a JSON array for representation responses; a bare
/// object (never expected here) is wrapped for uniformity.
async fn read_rows(response: reqwest::Response) -> Result<Vec<Value>, AppError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(AppError::Database(format!(
            "Supabase request failed with status {}: {}",
            status, body
        )));
    }

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(Value::Array(rows)) => Ok(rows),
        Ok(other) => Ok(vec![other]),
        Err(e) => Err(AppError::Database(format!(
            "Supabase returned unparseable body: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_sends_representation_header_and_parses_rows() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/posts")
            .match_header("apikey", "anon")
            .match_header("authorization", "Bearer bot-token")
            .match_header("prefer", "return=representation")
            .with_status(201)
            .with_body(r#"[{"id": 1, "content": "hello"}]"#)
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "anon".to_string()).unwrap();
        let rows = client
            .insert(
                "posts",
                &serde_json::json!({"content": "hello"}),
                Some("bot-token"),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["content"], "hello");
    }

    #[tokio::test]
    async fn test_api_key_doubles_as_token_without_override() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/twitter_id_map")
            .match_header("authorization", "Bearer service")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("select".into(), "user_id".into()),
                mockito::Matcher::UrlEncoded("username".into(), "eq.someone".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "service".to_string()).unwrap();
        let rows = client
            .select_eq("twitter_id_map", "user_id", "username", "someone", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/rest/v1/posts")
            .with_status(409)
            .with_body(r#"{"message":"duplicate key value"}"#)
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "anon".to_string()).unwrap();
        let err = client
            .insert("posts", &serde_json::json!({}), None)
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("409"));
        assert!(message.contains("duplicate key value"));
    }

    #[tokio::test]
    async fn test_sign_in_parses_session() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/v1/token")
            .match_query(mockito::Matcher::UrlEncoded(
                "grant_type".into(),
                "password".into(),
            ))
            .with_status(200)
            .with_body(
                r#"{"access_token":"tok-1","expires_in":3600,"user":{"id":"user-1"}}"#,
            )
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "anon".to_string()).unwrap();
        let session = client
            .sign_in_with_password("bot@example.com", "secret")
            .await
            .unwrap();

        assert_eq!(session.access_token, "tok-1");
        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.expires_in, Some(3600));
    }

    #[tokio::test]
    async fn test_sign_in_without_session_is_auth_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/v1/token")
            .with_status(200)
            .with_body(r#"{"msg":"ok but no token"}"#)
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "anon".to_string()).unwrap();
        let err = client
            .sign_in_with_password("bot@example.com", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_admin_delete_user_hits_admin_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/auth/v1/admin/users/user-9")
            .match_header("authorization", "Bearer service")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = SupabaseClient::new(server.url(), "service".to_string()).unwrap();
        client.admin_delete_user("user-9").await.unwrap();
        mock.assert_async().await;
    }
}
