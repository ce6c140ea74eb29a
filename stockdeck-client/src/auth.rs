//! Auth collaborator client
//!
//! Login, registration, user administration, and the 5-minute-cached user
//! analytics payload.

use crate::cache::{DEFAULT_TTL, TtlCache};
use crate::{ClientError, ClientResult, HttpClient};
use serde::{Deserialize, Serialize};
use shared::models::{ManagedUser, Role, SessionUser, UserAnalytics, UserUpdate};

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login response wire shape
///
/// The collaborator spells the token field `accesstoken`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub role: Role,
    #[serde(alias = "accessToken")]
    pub accesstoken: String,
}

/// `GET /all` answers either a bare array or a `{ "users": [...] }` wrapper
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AllUsersResponse {
    Wrapped { users: Vec<ManagedUser> },
    Bare(Vec<ManagedUser>),
}

/// Auth service client
#[derive(Debug)]
pub struct AuthClient {
    http: HttpClient,
    analytics_cache: TtlCache<&'static str, UserAnalytics>,
}

const ANALYTICS_KEY: &str = "user_analytics";

impl AuthClient {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            analytics_cache: TtlCache::new(DEFAULT_TTL),
        }
    }

    /// Set the bearer token used by authenticated endpoints
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.http.set_token(token);
    }

    /// Clear the bearer token and any cached analytics
    pub fn clear_token(&mut self) {
        self.http.clear_token();
        self.analytics_cache.clear();
    }

    /// `POST /login`
    ///
    /// Bad credentials come back as HTTP 403 and map to
    /// [`ClientError::InvalidCredentials`] so the caller can clear the
    /// password field. On success the bearer token is retained for
    /// subsequent authenticated calls.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<SessionUser> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = match self.http.post("/login", &request).await {
            Err(ClientError::Forbidden(_)) => return Err(ClientError::InvalidCredentials),
            other => other?,
        };

        let user = SessionUser::new(response.name, email, response.role, response.accesstoken);
        self.http.set_token(user.access_token.clone());
        tracing::info!(email = %user.email, role = %user.role, "Logged in");
        Ok(user)
    }

    /// `POST /register`, then auto-login with the same credentials
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> ClientResult<SessionUser> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };

        let _: serde_json::Value = self.http.post("/register", &request).await?;
        tracing::info!(email = %email, "Registered, logging in");
        self.login(email, password).await
    }

    /// `GET /analytics`, cached for 5 minutes
    pub async fn analytics(&self) -> ClientResult<UserAnalytics> {
        if let Some(cached) = self.analytics_cache.get(&ANALYTICS_KEY) {
            tracing::debug!("User analytics served from cache");
            return Ok(cached);
        }

        let analytics: UserAnalytics = self.http.get("/analytics").await?;
        self.analytics_cache.insert(ANALYTICS_KEY, analytics);
        Ok(analytics)
    }

    /// `GET /all`
    pub async fn all_users(&self) -> ClientResult<Vec<ManagedUser>> {
        let response: AllUsersResponse = self.http.get("/all").await?;
        Ok(match response {
            AllUsersResponse::Wrapped { users } => users,
            AllUsersResponse::Bare(users) => users,
        })
    }

    /// `PUT /update`
    pub async fn update_user(&self, update: &UserUpdate) -> ClientResult<()> {
        let _: serde_json::Value = self.http.put("/update", update).await?;
        Ok(())
    }

    /// `DELETE /delete` (user id in the request body)
    pub async fn delete_user(&self, user_id: i64) -> ClientResult<()> {
        #[derive(Serialize)]
        struct DeleteRequest {
            #[serde(rename = "userId")]
            user_id: i64,
        }

        let _: serde_json::Value = self
            .http
            .delete_json("/delete", &DeleteRequest { user_id })
            .await?;
        Ok(())
    }
}
